use crate::constants::{CONTAINER_ID, INFO_PANEL_ID, INFO_TEXT_ID};
use brain_core::Viewport;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements the host page must provide before startup.
pub struct MountPoints {
    pub body: web::HtmlElement,
    pub container: web::HtmlElement,
    pub info_panel: web::HtmlElement,
    pub info_text: web::Element,
}

impl MountPoints {
    pub fn resolve(document: &web::Document) -> anyhow::Result<Self> {
        let body = document
            .body()
            .ok_or_else(|| anyhow::anyhow!("document has no body"))?;
        Ok(Self {
            body,
            container: html_element_by_id(document, CONTAINER_ID)?,
            info_panel: html_element_by_id(document, INFO_PANEL_ID)?,
            info_text: element_by_id(document, INFO_TEXT_ID)?,
        })
    }
}

fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

fn html_element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    element_by_id(document, id)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!(format!("#{} is not an HTML element: {:?}", id, e)))
}

/// Window inner size in CSS pixels.
pub fn window_viewport(window: &web::Window) -> Viewport {
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(1.0).max(1.0) as u32
    };
    Viewport::new(dim(window.inner_width()), dim(window.inner_height()))
}

pub fn create_canvas(
    document: &web::Document,
    container: &web::HtmlElement,
) -> anyhow::Result<web::HtmlCanvasElement> {
    let canvas = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
    _ = canvas.style().set_property("display", "block");
    container
        .append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(canvas)
}

#[inline]
pub fn device_pixel_ratio() -> f64 {
    web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0)
}

/// Size the canvas to `viewport` CSS pixels with a backing store scaled by
/// devicePixelRatio. Returns the backing size in physical pixels.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) -> (u32, u32) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
    let (w_px, h_px) = viewport.backing_size(device_pixel_ratio());
    canvas.set_width(w_px);
    canvas.set_height(h_px);
    (w_px, h_px)
}
