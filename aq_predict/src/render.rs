// Model of the result region: what each element shows after a submit cycle.

use crate::classify::classify;
use crate::contract::PredictionOutcome;
use crate::{format_concentration, AqError};

// Shown for every transport or decoding failure; the cause only goes to the log.
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while making the prediction.";

pub const ERROR_VALUE_TEXT: &str = "Error";
pub const ERROR_VALUE_CLASS: &str = "display-4 fw-bold text-danger";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollBlock {
    Center,
    Start,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueTone {
    // Whatever class the element carried when the page loaded.
    Original,
    Danger,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Badge {
    pub label: &'static str,
    pub class_name: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ResultView {
    pub value_text: String,
    pub value_tone: ValueTone,
    pub message: String,
    pub badge: Option<Badge>,
    pub scroll: ScrollBlock,
}

impl ResultView {
    pub fn prediction(prediction: f64, message: impl Into<String>) -> Self {
        let quality = classify(prediction);
        Self {
            value_text: format_concentration(prediction),
            value_tone: ValueTone::Original,
            message: message.into(),
            badge: Some(Badge {
                label: quality.label(),
                class_name: quality.badge_class(),
            }),
            scroll: ScrollBlock::Center,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            value_text: ERROR_VALUE_TEXT.to_string(),
            value_tone: ValueTone::Danger,
            message: message.into(),
            badge: None,
            scroll: ScrollBlock::Start,
        }
    }

    /// Errors never reach the user verbatim; `generic_message` stands in for
    /// them and for a failure the backend gave no reason for.
    pub fn from_result(result: &Result<PredictionOutcome, AqError>, generic_message: &str) -> Self {
        match result {
            Ok(PredictionOutcome::Success {
                prediction,
                message,
            }) => ResultView::prediction(*prediction, message.clone()),
            Ok(PredictionOutcome::Failure { message }) => {
                ResultView::error(message.as_deref().unwrap_or(generic_message))
            }
            Err(_) => ResultView::error(generic_message),
        }
    }
}
