//! Browser side of the air-quality prediction page.
//!
//! Compiled to WebAssembly; binds the `aq_predict` core to the page's
//! existing markup. Every module initialises independently and a module whose
//! elements are missing is skipped.

mod chart;
mod dom;
mod forest;
mod form;
mod motion;
mod sample;
mod validation;

use aq_predict::settings::SETTINGS_ELEMENT_ID;
use aq_predict::{AqError, Settings};
use tracing::{debug, error, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Document;

const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_COMMIT: &str = env!("GIT_COMMIT_HASH");

fn load_settings(document: &Document) -> (Settings, Option<AqError>) {
    let raw = document
        .get_element_by_id(SETTINGS_ELEMENT_ID)
        .and_then(|el| el.text_content());
    match raw {
        None => (Settings::default(), None),
        Some(raw) => match Settings::from_json(&raw) {
            Ok(settings) => (settings, None),
            Err(err) => (Settings::default(), Some(err)),
        },
    }
}

fn init_logging(settings: &Settings) {
    let level = settings
        .log_level
        .parse::<log::Level>()
        .unwrap_or(log::Level::Info);
    wasm_logger::init(wasm_logger::Config::new(level));
}

fn init_page(document: &Document, settings: &Settings) {
    let steps: [(&str, Result<(), AqError>); 7] = [
        ("prediction form", form::init(document, settings)),
        ("feature chart", chart::init(document, settings)),
        ("forest animation", forest::init(document, settings)),
        ("smooth scrolling", motion::init_smooth_scrolling(document)),
        ("fade-in animations", motion::init_fade_in(document, settings)),
        ("field validation", validation::init(document, settings)),
        ("sample data button", sample::init(document, settings)),
    ];
    for (name, result) in steps {
        match result {
            Ok(()) => debug!(module = name, "initialised"),
            Err(err) => error!(module = name, error = %err, "initialisation failed"),
        }
    }
}

fn boot() -> Result<(), AqError> {
    let document = dom::document()?;
    let (settings, settings_error) = load_settings(&document);
    init_logging(&settings);
    info!("aq_predict_web {APP_VERSION} ({APP_COMMIT})");
    if let Some(err) = settings_error {
        warn!(error = %err, "ignoring page settings, using defaults");
    }

    if document.ready_state() == "loading" {
        let ready_document = document.clone();
        dom::listen(&document, "DOMContentLoaded", move |_| {
            init_page(&ready_document, &settings);
        })
    } else {
        init_page(&document, &settings);
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(err) = boot() {
        web_sys::console::error_1(&JsValue::from_str(&err.to_string()));
    }
}

/// Mark every form field valid or invalid. Advisory; returns whether all passed.
#[wasm_bindgen]
pub fn validate_form() -> bool {
    let result = dom::document().and_then(|document| {
        let (settings, _) = load_settings(&document);
        validation::validate_all(&document, &settings)
    });
    result.unwrap_or_else(|err| {
        warn!(error = %err, "form validation unavailable");
        false
    })
}

#[wasm_bindgen]
pub fn populate_sample_data() {
    sample::fill_current_page();
}
