// Advisory field validation listeners.

use aq_predict::validation::{field_selector, on_blur, on_input, passes, ClassChange, INVALID_CLASS};
use aq_predict::{AqError, Settings};
use tracing::debug;
use web_sys::{Document, DomTokenList, Element};

use crate::dom;

fn apply(classes: &DomTokenList, change: ClassChange) {
    if let Some(class) = change.remove {
        let _ = classes.remove_1(class);
    }
    if let Some(class) = change.add {
        let _ = classes.add_1(class);
    }
}

fn blur_check(field: &Element) -> bool {
    let Some((required, value)) = dom::control_state(field) else {
        return true;
    };
    apply(&field.class_list(), on_blur(required, &value));
    passes(required, &value)
}

pub fn init(document: &Document, settings: &Settings) -> Result<(), AqError> {
    let fields = dom::query_all(document, &field_selector(&settings.elements.form))?;
    debug!(count = fields.len(), "binding field validation");
    for field in fields {
        let on_blur_field = field.clone();
        dom::listen(&field, "blur", move |_| {
            blur_check(&on_blur_field);
        })?;

        let on_input_field = field.clone();
        dom::listen(&field, "input", move |_| {
            let classes = on_input_field.class_list();
            apply(&classes, on_input(classes.contains(INVALID_CLASS)));
        })?;
    }
    Ok(())
}

// Advisory; the submit handler never calls this.
pub fn validate_all(document: &Document, settings: &Settings) -> Result<bool, AqError> {
    let fields = dom::query_all(document, &field_selector(&settings.elements.form))?;
    Ok(fields.iter().fold(true, |ok, field| blur_check(field) && ok))
}
