use crate::app::App;
use crate::dom;
use crate::events::pointer;
use crate::layout;
use crate::workpiece;
use comparator_core::{Tap, TapDetector};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Double-click or double-tap on a source workpiece activates it.
pub fn wire_sources(app: &Rc<RefCell<App>>, sources: &[web::HtmlElement]) {
    let window = app.borrow().sim.config.double_tap_window;
    for source in sources {
        let app_dbl = app.clone();
        let src_dbl = source.clone();
        dom::add_mouse_listener(source, "dblclick", move |_ev: web::MouseEvent| {
            activate(&app_dbl, &src_dbl);
        });

        let app_tap = app.clone();
        let src_tap = source.clone();
        let mut taps = TapDetector::new(window);
        dom::add_touch_listener(source, "touchend", move |_ev: web::TouchEvent| {
            if taps.register(Instant::now()) == Tap::Double {
                activate(&app_tap, &src_tap);
            }
        });
    }
}

/// Clone `source` into the measurement slot where it currently sits, then
/// move it to the centred resting position on the next frame.
pub fn activate(app: &Rc<RefCell<App>>, source: &web::HtmlElement) {
    let spec = match workpiece::read_spec(source) {
        Ok(spec) => spec,
        Err(e) => {
            log::warn!("[activate] ignoring workpiece: {e}");
            return;
        }
    };

    let clone = {
        let mut a = app.borrow_mut();
        let container_el = a.els.container.clone();
        let clone = match workpiece::mount_clone(source, &container_el, &spec, &a.sim.config) {
            Ok(el) => el,
            Err(e) => {
                log::error!("[activate] {:?}", e);
                return;
            }
        };

        let container = a.container_rect();
        let (start_left, start_top) = layout::offset_within(&dom::rect(source), &container);
        let width = clone.offset_width() as f64;
        let container_width = a.container_width();
        log::info!(
            "[activate] {} {:.1}mm width={:.0}px",
            spec.profile,
            spec.nominal_height_mm,
            width
        );
        a.sim.activate(spec, start_left, width, container_width);
        a.active = Some(clone.clone());
        a.sync_active_left();
        dom::set_style(&clone, "top", &layout::px(start_top));
        clone
    };

    pointer::wire_drag_start(app, &clone);

    let app_rest = app.clone();
    dom::next_frame(move || {
        let mut a = app_rest.borrow_mut();
        // A newer activation may have replaced this clone already.
        let is_current = a.active.as_ref().is_some_and(|el| el == &clone);
        if !is_current {
            return;
        }
        let container_width = a.container_width();
        a.sim.center_slot(container_width);
        a.sync_active_left();
        let top = layout::resting_top(
            a.els.container.offset_height() as f64,
            clone.offset_height() as f64,
        );
        dom::set_style(&clone, "top", &layout::px(top));
        a.update_measurement();
    });
}
