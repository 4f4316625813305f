use crate::dom;
use crate::frame::{FrameContext, LoopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_window_resize(ctx: &Rc<RefCell<FrameContext<'static>>>) {
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move || {
        if let Some(window) = web::window() {
            let vp = dom::window_viewport(&window);
            ctx.borrow_mut().resize(vp.width, vp.height);
        }
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

/// Stop the frame loop when the page is being unloaded.
pub fn wire_pagehide(handle: LoopHandle) {
    let closure = Closure::wrap(Box::new(move || {
        handle.cancel();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
