#![cfg(target_arch = "wasm32")]
use crate::core::{
    figurine, AnimationConfig, AnimationContext, DragState, FrameLoop, InstantClock, PointerState,
    SceneGraph,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

pub mod core;
mod dom;
mod events;
mod frame;
mod render;

const CANVAS_ID: &str = "app-canvas";

fn wire_canvas_resize(canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("figurine-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (_window, document) = dom::window_document()?;
    let canvas = dom::canvas_by_id(&document, CANVAS_ID)?;
    wire_canvas_resize(&canvas);

    let mut anim = AnimationContext::new(AnimationConfig::default())?;
    let mut scene = SceneGraph::new();
    figurine::rebuild(&mut anim, &mut scene)?;

    let renderer = render::CanvasRenderer::new(canvas.clone())?;

    let pointer = Rc::new(RefCell::new(PointerState::CENTER));
    let drag = Rc::new(RefCell::new(DragState::default()));
    let rebuild = Rc::new(Cell::new(false));
    events::wire_orbit_drag(canvas.clone(), drag.clone());
    events::wire_pointer_move(canvas, pointer.clone());
    events::wire_rebuild_key(rebuild.clone());

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        anim,
        scene,
        pointer,
        drag,
        rebuild,
        frame_loop: FrameLoop::new(InstantClock::default()),
        renderer,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
