// Smooth in-page navigation and scroll-triggered fade-ins.

use aq_predict::motion::{
    anchor_target, fade_in_stylesheet, ACTIVE_CLASS, ANCHOR_LINK_SELECTOR, ANIMATE_IN_CLASS,
    NAV_LINK_SELECTOR,
};
use aq_predict::{AqError, Settings};
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom;

pub fn init_smooth_scrolling(document: &Document) -> Result<(), AqError> {
    let links = dom::query_all(document, ANCHOR_LINK_SELECTOR)?;
    debug!(count = links.len(), "binding in-page links");
    for link in links {
        let document = document.clone();
        let target = link.clone();
        dom::listen(&target, "click", move |event| {
            event.prevent_default();
            let href = link.get_attribute("href").unwrap_or_default();
            let Some(selector) = anchor_target(&href) else {
                return;
            };
            let Ok(Some(section)) = document.query_selector(selector) else {
                return;
            };

            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            section.scroll_into_view_with_scroll_into_view_options(&options);

            if let Ok(nav_links) = dom::query_all(&document, NAV_LINK_SELECTOR) {
                for nav in nav_links {
                    let _ = nav.class_list().remove_1(ACTIVE_CLASS);
                }
            }
            if let Err(err) = link.class_list().add_1(ACTIVE_CLASS) {
                warn!(error = %dom::js_message(&err), "could not mark nav link active");
            }
        })?;
    }
    Ok(())
}

pub fn init_fade_in(document: &Document, settings: &Settings) -> Result<(), AqError> {
    let callback = Closure::<dyn FnMut(js_sys::Array)>::new(|entries: js_sys::Array| {
        for entry in entries.iter() {
            let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                continue;
            };
            if entry.is_intersecting() {
                let _ = entry.target().class_list().add_1(ANIMATE_IN_CLASS);
            }
        }
    });

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(settings.fade_in_threshold));
    options.set_root_margin(&settings.fade_in_root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(dom::js_error)?;
    callback.forget();

    let targets = dom::query_all(document, &settings.fade_in_selector)?;
    debug!(count = targets.len(), "observing fade-in targets");
    for el in &targets {
        observer.observe(el);
    }

    let style = document.create_element("style").map_err(dom::js_error)?;
    style.set_text_content(Some(&fade_in_stylesheet(&settings.fade_in_selector)));
    let head = document
        .head()
        .ok_or_else(|| AqError::MissingElement("<head>".into()))?;
    head.append_child(&style).map_err(dom::js_error)?;
    Ok(())
}
