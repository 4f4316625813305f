#![cfg(target_arch = "wasm32")]
use brain_core::{AppContext, Catalog, GpuState, PointerDrag};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod labels;
mod overlay;
mod teardown;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("brain-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let mounts = dom::MountPoints::resolve(&document)?;

    let catalog = Catalog::builtin()?;
    let viewport = dom::window_viewport(&window);
    let app = AppContext::new(catalog, viewport);

    // dropped on any early return below, removing what was added to the page
    let mut teardown = teardown::Teardown::default();
    let labels =
        labels::LabelOverlay::new(&document, &mounts.container, &app.labels, &mut teardown)?;

    let canvas = dom::create_canvas(&document, &mounts.container)?;
    let appended = canvas.clone();
    teardown.push(move || appended.remove());
    let (w_px, h_px) = dom::sync_canvas_backing_size(&canvas, viewport);
    let target = wgpu::SurfaceTarget::Canvas(canvas.clone());
    let gpu = GpuState::new(target, w_px, h_px, &app.scene).await?;
    log::info!("[gpu] ready {}x{}", w_px, h_px);

    let info = overlay::InfoPanel::new(mounts.body, mounts.info_panel, mounts.info_text);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        app,
        gpu,
        labels,
        info,
        canvas,
        drag: PointerDrag::default(),
    }));

    events::wire_pointer_handlers(&frame_ctx);
    events::wire_window_resize(&frame_ctx);
    log::info!("[init] {} page elements attached", teardown.len());
    teardown.disarm();
    let handle = frame::start_loop(frame_ctx);
    events::wire_pagehide(handle);
    Ok(())
}
