#![cfg(target_arch = "wasm32")]

use std::cell::RefCell;
use std::rc::Rc;

use instant::Instant;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

use crate::core::{default_catalog, PointerPicker, SphereField, RING_RADIUS};

mod camera;
mod captions;
mod core;
mod dom;
mod events;
mod frame;
mod render;

const FIELD_SEED: u64 = 42;

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
    log::info!("portfolio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    wire_canvas_resize(&canvas);

    let catalog = default_catalog();
    let field = Rc::new(RefCell::new(SphereField::new(
        &catalog,
        RING_RADIUS,
        FIELD_SEED,
    )));
    if dom::debug_enabled() {
        for (i, p) in catalog.iter().enumerate() {
            log::info!(
                "[field] {} {}: amp={:.2} freq={:.2} mode={:?}",
                i,
                p.title,
                p.amplitude,
                p.frequency,
                p.noise_mode
            );
        }
    }

    let picker = Rc::new(RefCell::new(PointerPicker::default()));
    let elapsed = Rc::new(RefCell::new(0.0_f32));

    events::wire_input_handlers(events::InputWiring {
        canvas: canvas.clone(),
        field: field.clone(),
        picker: picker.clone(),
        elapsed: elapsed.clone(),
    });

    let gpu = frame::init_gpu(&canvas).await;

    let now = Instant::now();
    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        field,
        elapsed,
        canvas,
        gpu,
        start: now,
        last: now,
    }));
    frame::start_loop(frame_ctx);

    Ok(())
}
