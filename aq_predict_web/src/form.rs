// Prediction form controller: binds the submit event, talks to the backend
// through `fetch` and paints the result region.

use std::rc::Rc;

use aq_predict::contract::{REQUEST_HEADERS, REQUEST_METHOD};
use aq_predict::render::ERROR_VALUE_CLASS;
use aq_predict::{
    run_submit_cycle, AqError, ElementIds, LoadingGuard, PredictionRequest, PredictionTransport,
    ResultSink, ResultView, ScrollBlock, Settings, SubmitControl, ValueTone,
};
use tracing::{debug, warn};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Document, FormData, Headers, HtmlButtonElement, HtmlElement, HtmlFormElement, Request,
    RequestInit, Response, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom;

pub const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";

pub struct FetchTransport;

fn transport_error(value: JsValue) -> AqError {
    AqError::Transport(dom::js_message(&value))
}

impl PredictionTransport for FetchTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<String, AqError> {
        let headers = Headers::new().map_err(transport_error)?;
        for (name, value) in REQUEST_HEADERS {
            headers.set(name, value).map_err(transport_error)?;
        }

        let init = RequestInit::new();
        init.set_method(REQUEST_METHOD);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&body));

        let request = Request::new_with_str_and_init(endpoint, &init).map_err(transport_error)?;
        let window = dom::window()?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport_error)?
            .dyn_into()
            .map_err(transport_error)?;
        debug!(status = response.status(), "prediction response received");

        let text = JsFuture::from(response.text().map_err(transport_error)?)
            .await
            .map_err(transport_error)?;
        text.as_string()
            .ok_or_else(|| AqError::Transport("response body is not text".into()))
    }
}

#[derive(Clone)]
pub struct SubmitButton(HtmlButtonElement);

impl SubmitControl for SubmitButton {
    fn label(&self) -> String {
        self.0.inner_html()
    }

    fn set_label(&self, label: &str) {
        self.0.set_inner_html(label);
    }

    fn is_disabled(&self) -> bool {
        self.0.disabled()
    }

    fn set_disabled(&self, disabled: bool) {
        self.0.set_disabled(disabled);
    }
}

pub struct ResultRegion {
    container: HtmlElement,
    value: HtmlElement,
    message: HtmlElement,
    status: HtmlElement,
    value_class_on_load: String,
}

impl ResultRegion {
    pub fn bind(document: &Document, ids: &ElementIds) -> Result<Self, AqError> {
        let value: HtmlElement = dom::required_by_id(document, &ids.value)?;
        Ok(Self {
            container: dom::required_by_id(document, &ids.result)?,
            value_class_on_load: value.class_name(),
            value,
            message: dom::required_by_id(document, &ids.message)?,
            status: dom::required_by_id(document, &ids.status)?,
        })
    }

    fn set_display(el: &HtmlElement, display: Option<&str>) {
        let style = el.style();
        let outcome = match display {
            Some(value) => style.set_property("display", value),
            None => style.remove_property("display").map(|_| ()),
        };
        if let Err(err) = outcome {
            warn!(error = %dom::js_message(&err), "could not change element display");
        }
    }
}

impl ResultSink for ResultRegion {
    fn show(&self, view: &ResultView) {
        self.value.set_text_content(Some(&view.value_text));
        match view.value_tone {
            ValueTone::Original => self.value.set_class_name(&self.value_class_on_load),
            ValueTone::Danger => self.value.set_class_name(ERROR_VALUE_CLASS),
        }
        self.message.set_text_content(Some(&view.message));

        match &view.badge {
            Some(badge) => {
                self.status.set_text_content(Some(badge.label));
                self.status.set_class_name(&badge.class_name);
                Self::set_display(&self.status, None);
            }
            None => Self::set_display(&self.status, Some("none")),
        }

        Self::set_display(&self.container, Some("block"));
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(match view.scroll {
            ScrollBlock::Center => ScrollLogicalPosition::Center,
            ScrollBlock::Start => ScrollLogicalPosition::Start,
        });
        self.container
            .scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn submit_button(form: &HtmlFormElement) -> Result<HtmlButtonElement, AqError> {
    form.query_selector(SUBMIT_BUTTON_SELECTOR)
        .map_err(dom::js_error)?
        .ok_or_else(|| AqError::MissingElement(SUBMIT_BUTTON_SELECTOR.into()))?
        .dyn_into::<HtmlButtonElement>()
        .map_err(|_| AqError::Js("submit control is not a <button>".into()))
}

fn collect_fields(form: &HtmlFormElement) -> Result<PredictionRequest, AqError> {
    let data = FormData::new_with_form(form).map_err(dom::js_error)?;
    let entries = js_sys::try_iter(&data)
        .map_err(dom::js_error)?
        .ok_or_else(|| AqError::Js("FormData is not iterable".into()))?;

    let mut request = PredictionRequest::new();
    for entry in entries {
        let pair: js_sys::Array = entry.map_err(dom::js_error)?.unchecked_into();
        let name = pair.get(0).as_string().unwrap_or_default();
        match pair.get(1).as_string() {
            Some(value) => request.insert(name, value),
            None => debug!(%name, "skipping non-text form entry"),
        }
    }
    if request.is_empty() {
        warn!("prediction form has no text fields; sending an empty body");
    }
    Ok(request)
}

struct FormContext {
    form: HtmlFormElement,
    button: SubmitButton,
    region: ResultRegion,
    settings: Settings,
}

pub fn init(document: &Document, settings: &Settings) -> Result<(), AqError> {
    let Some(form) = dom::optional_by_id::<HtmlFormElement>(document, &settings.elements.form)?
    else {
        debug!(id = %settings.elements.form, "no prediction form on this page");
        return Ok(());
    };
    let context = Rc::new(FormContext {
        button: SubmitButton(submit_button(&form)?),
        region: ResultRegion::bind(document, &settings.elements)?,
        settings: settings.clone(),
        form: form.clone(),
    });

    dom::listen(&form, "submit", move |event| {
        event.prevent_default();
        let Some(loading) =
            LoadingGuard::engage(context.button.clone(), &context.settings.loading_label)
        else {
            debug!("prediction already in flight; ignoring submit");
            return;
        };
        let request = match collect_fields(&context.form) {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "could not read the prediction form");
                context
                    .region
                    .show(&ResultView::error(context.settings.generic_error_message.clone()));
                return;
            }
        };
        let context = Rc::clone(&context);
        leptos::spawn_local(async move {
            let _ = run_submit_cycle(
                &context.settings,
                &FetchTransport,
                loading,
                &context.region,
                request,
            )
            .await;
        });
    })
}
