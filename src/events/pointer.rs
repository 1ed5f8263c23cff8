use crate::core::{DragState, PointerState};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Normalize a pointer event against the canvas' CSS box.
#[inline]
pub fn pointer_state(ev: &web::PointerEvent, canvas: &web::HtmlCanvasElement) -> PointerState {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    PointerState::from_surface_px(x_css, y_css, rect.width() as f32, rect.height() as f32)
}

/// Listen on the window so the figure keeps tracking when the cursor leaves the canvas.
pub fn wire_pointer_move(canvas: web::HtmlCanvasElement, pointer: Rc<RefCell<PointerState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        *pointer.borrow_mut() = pointer_state(&ev, &canvas);
    }) as Box<dyn FnMut(_)>);

    if let Some(wnd) = web::window() {
        if let Err(e) =
            wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
        {
            log::error!("[input] pointermove listener: {:?}", e);
        }
    }

    closure.forget();
}

/// Drag on the canvas to orbit, wheel to zoom. Deltas are drained once per frame.
pub fn wire_orbit_drag(canvas: web::HtmlCanvasElement, drag: Rc<RefCell<DragState>>) {
    wire_pointerdown(&canvas, drag.clone());
    wire_drag_move(drag.clone());
    wire_pointerup(drag.clone());
    wire_wheel(&canvas, drag);
}

#[inline]
fn client_px(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

fn wire_pointerdown(canvas: &web::HtmlCanvasElement, drag: Rc<RefCell<DragState>>) {
    let canvas_target = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        drag.borrow_mut().begin(client_px(&ev));
        _ = canvas_target.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Err(e) =
        canvas.add_event_listener_with_callback("pointerdown", closure.as_ref().unchecked_ref())
    {
        log::error!("[input] pointerdown listener: {:?}", e);
    }
    closure.forget();
}

fn wire_drag_move(drag: Rc<RefCell<DragState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        drag.borrow_mut().moved(client_px(&ev));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        if let Err(e) =
            wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref())
        {
            log::error!("[input] drag pointermove listener: {:?}", e);
        }
    }
    closure.forget();
}

fn wire_pointerup(drag: Rc<RefCell<DragState>>) {
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        drag.borrow_mut().end();
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        if let Err(e) =
            wnd.add_event_listener_with_callback("pointerup", closure.as_ref().unchecked_ref())
        {
            log::error!("[input] pointerup listener: {:?}", e);
        }
    }
    closure.forget();
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, drag: Rc<RefCell<DragState>>) {
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        drag.borrow_mut().wheel(ev.delta_y() as f32);
        ev.prevent_default();
    }) as Box<dyn FnMut(_)>);
    if let Err(e) = canvas.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref())
    {
        log::error!("[input] wheel listener: {:?}", e);
    }
    closure.forget();
}
