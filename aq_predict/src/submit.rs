// One submit cycle of the prediction form: loading state, request, render, restore.

use tracing::{debug, error, info};

use crate::contract::{parse_response, PredictionOutcome, PredictionRequest};
use crate::render::ResultView;
use crate::settings::Settings;
use crate::AqError;

/// Network and body-read failures are `AqError::Transport`; HTTP status
/// codes are not errors.
#[allow(async_fn_in_trait)]
pub trait PredictionTransport {
    async fn post_json(&self, endpoint: &str, body: String) -> Result<String, AqError>;
}

pub trait SubmitControl {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn is_disabled(&self) -> bool;
    fn set_disabled(&self, disabled: bool);
}

impl<C: SubmitControl + ?Sized> SubmitControl for &C {
    fn label(&self) -> String {
        (**self).label()
    }
    fn set_label(&self, label: &str) {
        (**self).set_label(label)
    }
    fn is_disabled(&self) -> bool {
        (**self).is_disabled()
    }
    fn set_disabled(&self, disabled: bool) {
        (**self).set_disabled(disabled)
    }
}

pub trait ResultSink {
    fn show(&self, view: &ResultView);
}

/// Holds the button in its loading state and puts it back when dropped.
///
/// Engage it in the submit handler itself, not inside the spawned future.
pub struct LoadingGuard<C: SubmitControl> {
    control: C,
    label: String,
}

impl<C: SubmitControl> LoadingGuard<C> {
    // None while another cycle holds the button.
    pub fn engage(control: C, loading_label: &str) -> Option<Self> {
        if control.is_disabled() {
            return None;
        }
        let guard = Self {
            label: control.label(),
            control,
        };
        guard.control.set_label(loading_label);
        guard.control.set_disabled(true);
        Some(guard)
    }
}

impl<C: SubmitControl> Drop for LoadingGuard<C> {
    fn drop(&mut self) {
        self.control.set_label(&self.label);
        self.control.set_disabled(false);
    }
}

async fn exchange<T: PredictionTransport>(
    transport: &T,
    endpoint: &str,
    request: &PredictionRequest,
) -> Result<PredictionOutcome, AqError> {
    let body = request.to_json()?;
    let response = transport.post_json(endpoint, body).await?;
    parse_response(&response)
}

/// Failures are rendered, not propagated; the returned value is for logging.
pub async fn run_submit_cycle<T, C, R>(
    settings: &Settings,
    transport: &T,
    loading: LoadingGuard<C>,
    sink: &R,
    request: PredictionRequest,
) -> Result<PredictionOutcome, AqError>
where
    T: PredictionTransport,
    C: SubmitControl,
    R: ResultSink,
{
    let _loading = loading;
    debug!(fields = request.len(), endpoint = %settings.endpoint, "submitting prediction request");

    let result = exchange(transport, &settings.endpoint, &request).await;
    match &result {
        Ok(PredictionOutcome::Success { prediction, .. }) => {
            info!(prediction, "prediction received");
        }
        Ok(PredictionOutcome::Failure { message }) => {
            info!(reason = message.as_deref().unwrap_or(""), "prediction rejected by backend");
        }
        Err(err) => {
            error!(error = %err, "prediction error");
        }
    }

    sink.show(&ResultView::from_result(&result, &settings.generic_error_message));
    result
}
