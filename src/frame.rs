use crate::dom;
use crate::labels::LabelOverlay;
use crate::overlay::InfoPanel;
use brain_core::{AppContext, GpuState, PointerDrag};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub app: AppContext,
    pub gpu: GpuState<'a>,
    pub labels: LabelOverlay,
    pub info: InfoPanel,
    pub canvas: web::HtmlCanvasElement,
    pub drag: PointerDrag,
}

impl<'a> FrameContext<'a> {
    pub fn frame(&mut self) {
        let out = self.app.tick();
        self.labels.apply(&out.label_positions);

        match self.gpu.render(&self.app.camera, &self.app.scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("[gpu] surface lost, reconfiguring");
                self.gpu.reconfigure();
            }
            Err(wgpu::SurfaceError::Timeout) => {}
            Err(e) => log::error!("[gpu] render error: {:?}", e),
        }
    }

    /// Apply a new CSS viewport: camera aspect, canvas backing store and
    /// surface size. The backing store also follows devicePixelRatio
    /// changes at an unchanged CSS size. Zero-sized viewports are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        let css_changed = self.app.resize(width, height);
        let backing = self.app.viewport().backing_size(dom::device_pixel_ratio());
        if !css_changed && backing == self.gpu.size() {
            return;
        }
        let (w_px, h_px) = dom::sync_canvas_backing_size(&self.canvas, self.app.viewport());
        self.gpu.resize(w_px, h_px);
    }
}

/// Returned by [`start_loop`]; cancelling stops rescheduling after the
/// frame in flight.
#[derive(Clone)]
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn cancel(&self) {
        if self.running.replace(false) {
            log::info!("[frame] loop cancelled");
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) -> LoopHandle {
    let handle = LoopHandle {
        running: Rc::new(Cell::new(true)),
    };
    let running = handle.running.clone();
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !running.get() {
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
    handle
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
