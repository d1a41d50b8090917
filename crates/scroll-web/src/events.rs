//! Listener wiring. Handlers only record raw values into shared cells;
//! all real work happens in the frame loop.

use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::dom;

/// Record the raw scroll offset on every scroll event.
pub fn attach_scroll_listener(window: &web::Window, offset: Rc<RefCell<f32>>) {
    let w = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        *offset.borrow_mut() = dom::scroll_offset(&w);
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("scroll", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Flag a forced redraw on resize; the frame loop consumes the flag and
/// re-derives extents itself.
pub fn attach_resize_listener(window: &web::Window, needs_render: Rc<RefCell<bool>>) {
    let closure = Closure::wrap(Box::new(move || {
        *needs_render.borrow_mut() = true;
    }) as Box<dyn FnMut()>);
    let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}
