use crate::app::App;
use crate::render::DialPainter;
use comparator_core::{build_scene, LoopState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: Rc<RefCell<App>>,
    pub painter: DialPainter,
    pub loop_state: LoopState,
}

impl FrameContext {
    pub fn new(app: Rc<RefCell<App>>, painter: DialPainter) -> Self {
        Self {
            app,
            painter,
            loop_state: LoopState::Unstarted,
        }
    }

    /// One full frame: measure, advance the needle, update the readout and
    /// repaint the dial.
    pub fn frame(&mut self) {
        let state = {
            let mut app = self.app.borrow_mut();
            app.update_measurement();
            let state = app.sim.tick();
            app.show_reading(state.displayed_mm);
            state
        };
        let scene = build_scene(&state, &self.painter.style);
        self.painter.paint(&scene);
    }
}

/// Start the `requestAnimationFrame` loop. It reschedules itself every frame
/// for the lifetime of the page; a second call is ignored.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    if !frame_ctx.borrow_mut().loop_state.start() {
        log::warn!("[frame] loop already running");
        return;
    }
    log::info!("[frame] animation loop running");

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
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
