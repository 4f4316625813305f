use crate::frame::FrameContext;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Shared = Rc<RefCell<FrameContext<'static>>>;

pub fn wire_pointer_handlers(ctx: &Shared) {
    wire_hover(ctx);
    wire_drag_start(ctx);
    wire_drag_move(ctx);
    wire_drag_end(ctx);
    wire_wheel(ctx);
    wire_contextmenu(ctx);
}

// Picking listens on the window so hover state follows the pointer anywhere
// over the page, labels included.
fn wire_hover(ctx: &Shared) {
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = input::pointer_client_px(&ev);
        let mut f = ctx.borrow_mut();
        let FrameContext { app, info, .. } = &mut *f;
        app.pointer_move(pos.x, pos.y, info);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_drag_start(ctx: &Shared) {
    let canvas = ctx.borrow().canvas.clone();
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let Some(mode) = input::drag_mode_for(ev.button(), ev.shift_key()) else {
            return;
        };
        let mut f = ctx.borrow_mut();
        f.drag.begin(mode, input::pointer_client_px(&ev));
        _ = f.canvas.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_drag_move(ctx: &Shared) {
    let canvas = ctx.borrow().canvas.clone();
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut f = ctx.borrow_mut();
        let Some((mode, delta)) = f.drag.moved(input::pointer_client_px(&ev)) else {
            return;
        };
        let app = &mut f.app;
        let height = app.viewport().height;
        app.controls.apply_drag(mode, delta, &app.camera, height);
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_drag_end(ctx: &Shared) {
    let canvas = ctx.borrow().canvas.clone();
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let mut f = ctx.borrow_mut();
        if f.drag.is_active() {
            f.drag.end();
            _ = f.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    for name in ["pointerup", "pointercancel"] {
        _ = canvas.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_wheel(ctx: &Shared) {
    let canvas = ctx.borrow().canvas.clone();
    let ctx = ctx.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        ev.prevent_default();
        let dy = input::wheel_delta_px(ev.delta_y(), ev.delta_mode());
        ctx.borrow_mut().app.controls.dolly(dy);
    }) as Box<dyn FnMut(_)>);
    // non-passive so prevent_default keeps the page from scrolling
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    _ = canvas.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

fn wire_contextmenu(ctx: &Shared) {
    let canvas = ctx.borrow().canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    _ = canvas.add_event_listener_with_callback("contextmenu", closure.as_ref().unchecked_ref());
    closure.forget();
}
