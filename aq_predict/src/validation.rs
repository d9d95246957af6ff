// Advisory field validation. Results only drive CSS classes; submission is
// never blocked on them.

pub const INVALID_CLASS: &str = "is-invalid";
pub const VALID_CLASS: &str = "is-valid";

pub fn field_selector(form_id: &str) -> String {
    format!("#{form_id} input, #{form_id} select")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassChange {
    pub add: Option<&'static str>,
    pub remove: Option<&'static str>,
}

impl ClassChange {
    const NONE: ClassChange = ClassChange { add: None, remove: None };
}

/// Blur rule: a required field left empty is invalid, anything else valid.
pub fn on_blur(required: bool, value: &str) -> ClassChange {
    if required && value.is_empty() {
        ClassChange {
            add: Some(INVALID_CLASS),
            remove: None,
        }
    } else {
        ClassChange {
            add: Some(VALID_CLASS),
            remove: Some(INVALID_CLASS),
        }
    }
}

/// Input rule: typing clears a previous invalid mark and nothing else.
pub fn on_input(currently_invalid: bool) -> ClassChange {
    if currently_invalid {
        ClassChange {
            add: None,
            remove: Some(INVALID_CLASS),
        }
    } else {
        ClassChange::NONE
    }
}

pub fn passes(required: bool, value: &str) -> bool {
    !(required && value.is_empty())
}
