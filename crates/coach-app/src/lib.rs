//! Coach App — WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It resolves the endpoint, builds the HTTP adapter and hands both
//! to the egui UI.

mod app;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

use coach_types::{CoachError, Result};

const CANVAS_ID: &str = "coach_canvas";

/// WASM entry point — called from index.html
#[wasm_bindgen(start)]
pub async fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("Hot Mess Coach starting...");

    let canvas = match find_canvas(CANVAS_ID) {
        Ok(canvas) => canvas,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            return;
        }
    };

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async move {
        let started = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(app::CoachApp::new(cc)))),
            )
            .await;
        if let Err(e) = started {
            log::error!("Failed to start eframe: {:?}", e);
        }
    });
}

fn find_canvas(id: &str) -> Result<HtmlCanvasElement> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| CoachError::JsInterop("No document".to_string()))?;

    document
        .get_element_by_id(id)
        .ok_or_else(|| CoachError::JsInterop(format!("No canvas element with id '{}'", id)))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| CoachError::JsInterop(format!("Element '{}' is not a canvas", id)))
}
