//! Core of the air-quality prediction page, independent of the browser.
//!
//! Everything that decides *what* the page shows lives here: the `/predict`
//! wire contract, PM2.5 classification, the result-region model, the submit
//! cycle, advisory validation, sample data, the chart configuration and the
//! forest animation scene. The `aq_predict_web` crate only binds these to the
//! DOM.

pub mod chart;
pub mod classify;
pub mod contract;
pub mod forest;
pub mod motion;
pub mod render;
pub mod sample;
pub mod settings;
pub mod submit;
pub mod validation;

use thiserror::Error;

pub use classify::{classify, AirQuality, BadgeStyle};
pub use contract::{PredictionOutcome, PredictionRequest, PredictionResponse};
pub use render::{ResultView, ScrollBlock, ValueTone};
pub use settings::{ElementIds, Settings};
pub use submit::{run_submit_cycle, LoadingGuard, PredictionTransport, ResultSink, SubmitControl};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AqError {
    #[error("prediction request failed: {0}")]
    Transport(String),
    #[error("malformed prediction response: {0}")]
    MalformedResponse(String),
    #[error("required page element missing: {0}")]
    MissingElement(String),
    #[error("invalid settings: {0}")]
    Config(String),
    #[error("javascript error: {0}")]
    Js(String),
}

/// Unit suffix appended to every rendered prediction.
pub const CONCENTRATION_UNIT: &str = "μg/m³";

/// Format a prediction the way the result region shows it, e.g. `10 μg/m³`.
///
/// Numbers read as the page script's string conversion prints them: shortest
/// round-trip digits, no fractional part for whole numbers, exponent form
/// below `1e-6` and from `1e21` up.
pub fn format_concentration(value: f64) -> String {
    format!("{} {CONCENTRATION_UNIT}", number_text(value))
}

fn number_text(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        let sign = if value.is_sign_negative() { "-" } else { "" };
        return format!("{sign}Infinity");
    }
    // Also catches -0.0.
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if !(1e-6..1e21).contains(&magnitude) {
        let text = format!("{value:e}");
        return match text.split_once('e') {
            Some((digits, exponent)) if !exponent.starts_with('-') => {
                format!("{digits}e+{exponent}")
            }
            _ => text,
        };
    }
    value.to_string()
}
