use aq_predict::chart::feature_importance_config;
use aq_predict::{AqError, Settings};
use serde::Serialize;
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlCanvasElement};

use crate::dom;

pub fn init(document: &Document, settings: &Settings) -> Result<(), AqError> {
    let Some(canvas) = dom::optional_by_id::<HtmlCanvasElement>(document, &settings.elements.chart)?
    else {
        debug!(id = %settings.elements.chart, "no chart canvas on this page");
        return Ok(());
    };

    let chart = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("Chart"))
        .unwrap_or(JsValue::UNDEFINED);
    let Ok(constructor) = chart.dyn_into::<js_sys::Function>() else {
        warn!("Chart.js is not loaded; skipping feature importance chart");
        return Ok(());
    };

    let context = canvas
        .get_context("2d")
        .map_err(dom::js_error)?
        .ok_or_else(|| AqError::Js("canvas has no 2d context".into()))?;
    let config = feature_importance_config()
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(|e| AqError::Js(e.to_string()))?;

    let args = js_sys::Array::of2(&context, &config);
    js_sys::Reflect::construct(&constructor, &args).map_err(dom::js_error)?;
    debug!("feature importance chart created");
    Ok(())
}
