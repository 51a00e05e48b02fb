#![cfg(target_arch = "wasm32")]
use hgif_core::{AnimationDriver, AppState, DemoConfig, DeviceKind, RenderPipeline};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
mod dom;
mod events;
mod export;
mod frame;
mod hud;
mod input;
mod markup;
mod timer;

use constants::*;

pub(crate) type SharedApp = Rc<RefCell<AppState<web::HtmlImageElement>>>;

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

/// Device profile preselected in the page, falling back to the default.
fn initial_device(document: &web::Document) -> DeviceKind {
    dom::element::<web::HtmlSelectElement>(document, ID_DEVICE_SELECT)
        .ok()
        .and_then(|select| select.value().parse().ok())
        .unwrap_or_default()
}

/// Slider position from the markup, so the first frame matches the page.
fn initial_bandwidth(document: &web::Document, fallback: f64) -> f64 {
    dom::element::<web::HtmlInputElement>(document, ID_BANDWIDTH_SLIDER)
        .ok()
        .and_then(|slider| input::parse_mbps(&slider.value()))
        .unwrap_or(fallback)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hgif-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas: web::HtmlCanvasElement = dom::element(&document, ID_CANVAS)?;
    wire_canvas_resize(&canvas);

    let defaults = DemoConfig::default();
    let config = DemoConfig {
        initial_bandwidth_mbps: initial_bandwidth(&document, defaults.initial_bandwidth_mbps),
        ..defaults
    };
    let device = initial_device(&document);
    let pipeline = RenderPipeline::standard(&config);
    let mut state = AppState::new(config, device, Box::new(dom::JsClock));
    hud::wire_log_list(&document, &mut state.agent);
    log::info!(
        "[init] device={} ({}) bandwidth={} Mbps",
        device,
        device.capability().display_name,
        state.bandwidth_mbps()
    );
    let app: SharedApp = Rc::new(RefCell::new(state));

    let ui = events::Ui::new(app.clone(), &document)?;
    events::wire_controls(&ui);
    events::wire_upload(&ui);
    events::wire_download(&ui);

    let frame_loop = frame::FrameLoop::new(frame::FrameContext {
        app,
        driver: AnimationDriver::default(),
        pipeline,
        surface: canvas::CanvasSurface::new(canvas)?,
        hud: hud::DomHud::new(&document),
        started: Instant::now(),
    });
    events::wire_global_keydown(&document, frame_loop.clone());
    frame_loop.start();

    Ok(())
}
