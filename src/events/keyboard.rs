use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_rebuild_key(key: &str) -> bool {
    matches!(key, "r" | "R")
}

/// `r` asks the frame loop to tear down and rebuild the scene on its next tick.
pub fn wire_rebuild_key(rebuild: Rc<Cell<bool>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        if ev.repeat() || !is_rebuild_key(&ev.key()) {
            return;
        }
        rebuild.set(true);
        log::info!("[input] scene rebuild requested");
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
