use crate::constants::*;
use crate::dom;
use crate::layout;
use comparator_core::{Reading, Simulation};
use web_sys as web;

/// Elements of the lab page the simulation reads geometry from or writes to.
#[derive(Clone)]
pub struct Elements {
    pub canvas: web::HtmlCanvasElement,
    pub display: Option<web::HtmlElement>,
    pub plunger_mount: web::HtmlElement,
    pub plunger_shaft: web::HtmlElement,
    pub plunger_tip: web::HtmlElement,
    pub base: web::HtmlElement,
    pub container: web::HtmlElement,
}

impl Elements {
    pub fn lookup(document: &web::Document) -> anyhow::Result<Self> {
        let display: Option<web::HtmlElement> =
            dom::element_by_id(document, MEASUREMENT_DISPLAY_ID).ok();
        if display.is_none() {
            log::warn!("[setup] #{} not found; readout disabled", MEASUREMENT_DISPLAY_ID);
        }
        Ok(Self {
            canvas: dom::element_by_id(document, DIAL_CANVAS_ID)?,
            display,
            plunger_mount: dom::element_by_id(document, PLUNGER_MOUNT_ID)?,
            plunger_shaft: dom::element_by_id(document, PLUNGER_SHAFT_ID)?,
            plunger_tip: dom::element_by_id(document, PLUNGER_TIP_ID)?,
            base: dom::element_by_id(document, BASE_ID)?,
            container: dom::element_by_id(document, ACTIVE_CONTAINER_ID)?,
        })
    }
}

/// Everything input handlers and the frame loop share.
pub struct App {
    pub sim: Simulation,
    pub els: Elements,
    /// The clone currently under the plunger.
    pub active: Option<web::HtmlElement>,
    max_shaft_px: Option<f64>,
}

impl App {
    pub fn new(els: Elements, sim: Simulation) -> Self {
        Self {
            sim,
            els,
            active: None,
            max_shaft_px: None,
        }
    }

    #[inline]
    pub fn container_rect(&self) -> layout::Rect {
        dom::rect(&self.els.container)
    }

    #[inline]
    pub fn container_width(&self) -> f64 {
        self.els.container.offset_width() as f64
    }

    /// Measure the free shaft length from the current layout. No-op until the
    /// base has been laid out; the resize handler retries.
    pub fn setup_plunger(&mut self) {
        let mount = dom::rect(&self.els.plunger_mount);
        let base = dom::rect(&self.els.base);
        let tip_height = self.els.plunger_tip.offset_height() as f64;
        match layout::max_shaft_height(&mount, &base, tip_height) {
            Some(h) => {
                self.max_shaft_px = Some(h);
                dom::set_style(&self.els.plunger_shaft, "height", &layout::px(h));
                log::info!("[setup] plunger shaft max height {:.1}px", h);
            }
            None => log::debug!("[setup] base not laid out yet; deferring plunger setup"),
        }
    }

    /// Recompute the raw reading from live geometry and lift the plunger.
    pub fn update_measurement(&mut self) -> Reading {
        let container = self.container_rect();
        let tip = dom::rect(&self.els.plunger_tip);
        let reading = self
            .sim
            .update_measurement(layout::plunger_x_in(&container, &tip));
        if let Some(max) = self.max_shaft_px {
            let h = self.sim.shaft_height_px(max);
            dom::set_style(&self.els.plunger_shaft, "height", &layout::px(h));
        }
        reading
    }

    /// Write the active clone's left offset from the simulation.
    pub fn sync_active_left(&self) {
        if let (Some(el), Some(slot)) = (&self.active, self.sim.slot()) {
            dom::set_style(el, "left", &layout::px(slot.left_px()));
        }
    }

    /// Re-read geometry after the window changed size.
    pub fn handle_resize(&mut self) {
        self.setup_plunger();
        if let Some(el) = &self.active {
            let width = el.offset_width() as f64;
            let container_width = self.container_width();
            self.sim.resize_slot(width, container_width);
        }
        self.sync_active_left();
        self.update_measurement();
    }

    pub fn show_reading(&self, mm: f64) {
        if let Some(display) = &self.els.display {
            display.set_text_content(Some(&layout::format_reading(mm, READOUT_DECIMALS)));
        }
    }
}
