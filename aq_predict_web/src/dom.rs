// Small helpers over web-sys lookups and listeners.

use aq_predict::AqError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlInputElement, HtmlSelectElement, Window};

pub fn window() -> Result<Window, AqError> {
    web_sys::window().ok_or_else(|| AqError::MissingElement("window".into()))
}

pub fn document() -> Result<Document, AqError> {
    window()?
        .document()
        .ok_or_else(|| AqError::MissingElement("document".into()))
}

/// Best-effort text of a thrown JS value.
pub fn js_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

pub fn js_error(value: JsValue) -> AqError {
    AqError::Js(js_message(&value))
}

pub fn optional_by_id<T: JsCast>(document: &Document, id: &str) -> Result<Option<T>, AqError> {
    match document.get_element_by_id(id) {
        None => Ok(None),
        Some(el) => el
            .dyn_into::<T>()
            .map(Some)
            .map_err(|_| AqError::Js(format!("#{id} is not the expected element type"))),
    }
}

pub fn required_by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, AqError> {
    optional_by_id(document, id)?.ok_or_else(|| AqError::MissingElement(format!("#{id}")))
}

pub fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, AqError> {
    let list = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<(), AqError>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(js_error)?;
    closure.forget();
    Ok(())
}

/// `required` flag and current value of a form control, if it is one.
pub fn control_state(el: &Element) -> Option<(bool, String)> {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        return Some((input.required(), input.value()));
    }
    el.dyn_ref::<HtmlSelectElement>()
        .map(|select| (select.required(), select.value()))
}

pub fn set_control_value(el: &Element, value: &str) -> bool {
    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        input.set_value(value);
        true
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        select.set_value(value);
        true
    } else {
        false
    }
}
