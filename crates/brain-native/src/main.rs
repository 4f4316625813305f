use brain_core::{AppContext, Catalog, DragMode, GpuState, HoverView, PointerDrag, Viewport};
use glam::Vec2;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::ModifiersState,
    window::{CursorIcon, Window, WindowBuilder},
};

const TITLE: &str = "Brain Atlas (native)";

/// Native stand-in for the info panel: region name in the title bar and a
/// pointer cursor while hovering.
struct TitleView<'w> {
    window: &'w Window,
}

impl HoverView for TitleView<'_> {
    fn show_region(&mut self, name: &str) {
        self.window.set_title(&format!("Brain Atlas: {}", name));
        self.window.set_cursor_icon(CursorIcon::Pointer);
    }

    fn clear(&mut self) {
        self.window.set_title(TITLE);
        self.window.set_cursor_icon(CursorIcon::Default);
    }
}

fn drag_mode_for(button: MouseButton, shift: bool) -> Option<DragMode> {
    match button {
        MouseButton::Left if shift => Some(DragMode::Pan),
        MouseButton::Left => Some(DragMode::Rotate),
        MouseButton::Middle => Some(DragMode::Dolly),
        MouseButton::Right => Some(DragMode::Pan),
        _ => None,
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let catalog = Catalog::builtin()?;

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new().with_title(TITLE).build(&event_loop)?;

    let size = window.inner_size();
    let mut app = AppContext::new(
        catalog,
        Viewport::new(size.width.max(1), size.height.max(1)),
    );
    let mut gpu = pollster::block_on(GpuState::new(
        &window,
        size.width,
        size.height,
        &app.scene,
    ))?;
    log::info!("[gpu] ready {}x{}", size.width, size.height);

    let mut view = TitleView { window: &window };
    let mut drag = PointerDrag::default();
    let mut modifiers = ModifiersState::empty();
    let mut cursor = Vec2::ZERO;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => {
                if app.resize(size.width, size.height) {
                    gpu.resize(size.width, size.height);
                }
            }
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::ModifiersChanged(m) => modifiers = m.state(),
            WindowEvent::MouseInput { state, button, .. } => match state {
                ElementState::Pressed => {
                    if let Some(mode) = drag_mode_for(button, modifiers.shift_key()) {
                        drag.begin(mode, cursor);
                    }
                }
                ElementState::Released => drag.end(),
            },
            WindowEvent::CursorMoved { position, .. } => {
                cursor = Vec2::new(position.x as f32, position.y as f32);
                if let Some((mode, delta)) = drag.moved(cursor) {
                    let height = app.viewport().height;
                    app.controls.apply_drag(mode, delta, &app.camera, height);
                }
                app.pointer_move(cursor.x, cursor.y, &mut view);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                // winit reports wheel-up as positive; the controls expect DOM sign
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => -y,
                    MouseScrollDelta::PixelDelta(p) => -(p.y as f32),
                };
                app.controls.dolly(dy);
            }
            _ => {}
        },
        Event::AboutToWait => {
            app.tick();
            match gpu.render(&app.camera, &app.scene) {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                Err(e) => log::error!("[gpu] render error: {:?}", e),
            }
            view.window.request_redraw();
        }
        _ => {}
    })?;
    Ok(())
}
