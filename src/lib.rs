#![cfg(target_arch = "wasm32")]
use comparator_core::{DialStyle, Simulation};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod app;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod layout;
mod render;
mod workpiece;

fn wire_resize(app: &Rc<RefCell<app::App>>) {
    let app = app.clone();
    dom::add_window_listener("resize", move || {
        app.borrow_mut().handle_resize();
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("comparator-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // Geometry reads before layout settles come back zero-sized.
    dom::sleep_ms(constants::STARTUP_DELAY_MS).await?;

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let els = app::Elements::lookup(&document)?;
    let painter = render::DialPainter::new(els.canvas.clone(), DialStyle::default())?;

    let app = Rc::new(RefCell::new(app::App::new(els, Simulation::default())));
    app.borrow_mut().setup_plunger();

    events::wire_input_handlers(events::InputWiring {
        document: document.clone(),
        app: app.clone(),
    });
    let sources = workpiece::source_workpieces(&document);
    log::info!("[setup] {} source workpieces", sources.len());
    events::wire_sources(&app, &sources);
    wire_resize(&app);

    if let Some(first) = sources.first() {
        events::activate(&app, first);
    }

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(app, painter)));
    frame::start_loop(frame_ctx);
    Ok(())
}
