use crate::core::{
    figurine, AnimationContext, DragState, FrameLoop, InstantClock, PointerState, SceneGraph,
};
use crate::render::CanvasRenderer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub anim: AnimationContext,
    pub scene: SceneGraph,
    pub pointer: Rc<RefCell<PointerState>>,
    pub drag: Rc<RefCell<DragState>>,
    pub rebuild: Rc<Cell<bool>>,
    pub frame_loop: FrameLoop<InstantClock>,
    pub renderer: CanvasRenderer,
}

impl FrameContext {
    pub fn frame(&mut self) {
        if self.rebuild.take() {
            if let Err(e) = figurine::rebuild(&mut self.anim, &mut self.scene) {
                log::error!("[scene] rebuild error: {}", e);
            }
        }

        // Latest pointer sample wins; events between frames are coalesced.
        self.anim.set_pointer(*self.pointer.borrow());

        let (drag, zoom) = self.drag.borrow_mut().take();
        let camera = self.renderer.camera_mut();
        camera.orbit.rotate(drag.x, drag.y);
        camera.orbit.zoom(zoom);
        camera.update_orbit();

        if let Err(e) = self
            .frame_loop
            .step(&mut self.anim, &mut self.scene, &mut self.renderer)
        {
            log::error!("[frame] render error: {:?}", e);
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        if let Err(e) = w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            log::error!("[frame] requestAnimationFrame: {:?}", e);
        }
    }
}
