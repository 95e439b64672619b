use crate::app::App;
use crate::constants::{CURSOR_GRAB, CURSOR_GRABBING};
use crate::dom;
use crate::input;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub document: web::Document,
    pub app: Rc<RefCell<App>>,
}

/// Document-level move/release handlers. They stay registered for the page's
/// lifetime and no-op unless a drag is engaged.
pub fn wire_input_handlers(w: InputWiring) {
    wire_pointermove(&w);
    wire_pointerup(&w);
}

/// Grab handlers on a freshly mounted active clone.
pub fn wire_drag_start(app: &Rc<RefCell<App>>, el: &web::HtmlElement) {
    let app_mouse = app.clone();
    let el_mouse = el.clone();
    dom::add_mouse_listener(el, "mousedown", move |ev: web::MouseEvent| {
        begin_drag(&app_mouse, &el_mouse, input::mouse_client_x(&ev));
    });

    let app_touch = app.clone();
    let el_touch = el.clone();
    dom::add_touch_listener(el, "touchstart", move |ev: web::TouchEvent| {
        ev.prevent_default();
        if let Some(x) = input::touch_client_x(&ev) {
            begin_drag(&app_touch, &el_touch, x);
        }
    });
}

fn begin_drag(app: &Rc<RefCell<App>>, el: &web::HtmlElement, pointer_x: f64) {
    let mut app = app.borrow_mut();
    let object_left = dom::rect(el).left;
    if app.sim.begin_drag(pointer_x, object_left) {
        dom::set_style(el, "cursor", CURSOR_GRABBING);
        log::debug!("[drag] begin at x={:.1}", pointer_x);
    }
}

fn drag_to(app: &Rc<RefCell<App>>, pointer_x: f64) -> bool {
    let mut app = app.borrow_mut();
    if !app.sim.is_dragging() {
        return false;
    }
    let container = app.container_rect();
    if app
        .sim
        .drag_to(pointer_x, container.left, container.width)
        .is_none()
    {
        return false;
    }
    app.sync_active_left();
    app.update_measurement();
    true
}

fn end_drag(app: &Rc<RefCell<App>>) {
    let mut app = app.borrow_mut();
    if app.sim.end_drag() {
        if let Some(el) = &app.active {
            dom::set_style(el, "cursor", CURSOR_GRAB);
        }
        log::debug!("[drag] end");
    }
}

fn wire_pointermove(w: &InputWiring) {
    let app = w.app.clone();
    dom::add_mouse_listener(&w.document, "mousemove", move |ev: web::MouseEvent| {
        if drag_to(&app, input::mouse_client_x(&ev)) {
            ev.prevent_default();
        }
    });

    let app = w.app.clone();
    dom::add_touch_listener(&w.document, "touchmove", move |ev: web::TouchEvent| {
        if !app.borrow().sim.is_dragging() {
            return;
        }
        ev.prevent_default();
        if let Some(x) = input::touch_client_x(&ev) {
            drag_to(&app, x);
        }
    });
}

fn wire_pointerup(w: &InputWiring) {
    let app = w.app.clone();
    dom::add_mouse_listener(&w.document, "mouseup", move |_ev: web::MouseEvent| {
        end_drag(&app);
    });

    let app = w.app.clone();
    dom::add_touch_listener(&w.document, "touchend", move |_ev: web::TouchEvent| {
        end_drag(&app);
    });
}
