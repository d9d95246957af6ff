use aq_predict::sample::sample_readings;
use aq_predict::{AqError, Settings};
use leptos::*;
use tracing::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement};

use crate::{dom, form};

pub fn fill(document: &Document) -> usize {
    let mut rng = rand::thread_rng();
    let mut filled = 0;
    for (id, value) in sample_readings(&mut rng) {
        match document.get_element_by_id(id) {
            Some(el) if dom::set_control_value(&el, &value) => filled += 1,
            Some(_) => debug!(%id, "sample field is not an input or select"),
            None => {}
        }
    }
    debug!(filled, "sample data populated");
    filled
}

pub fn fill_current_page() {
    match dom::document() {
        Ok(document) => {
            fill(&document);
        }
        Err(err) => warn!(error = %err, "cannot populate sample data"),
    }
}

#[component]
pub fn SampleDataButton() -> impl IntoView {
    view! {
        <button type="button" class="btn btn-outline-secondary btn-sm ms-2" on:click=move |_| fill_current_page()>
            <i class="fas fa-magic me-1"></i>"Sample Data"
        </button>
    }
}

pub fn init(document: &Document, settings: &Settings) -> Result<(), AqError> {
    let Some(form_el) = dom::optional_by_id::<HtmlFormElement>(document, &settings.elements.form)?
    else {
        return Ok(());
    };
    let submit = form::submit_button(&form_el)?;
    let parent = submit
        .parent_element()
        .ok_or_else(|| AqError::MissingElement("submit button container".into()))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| AqError::Js("submit button container is not an HTML element".into()))?;
    mount_to(parent, || view! { <SampleDataButton/> });
    Ok(())
}
