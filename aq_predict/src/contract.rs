// Wire contract of the `/predict` endpoint.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::AqError;

pub const DEFAULT_ENDPOINT: &str = "/predict";
pub const JSON_CONTENT_TYPE: &str = "application/json";

pub const REQUEST_METHOD: &str = "POST";
pub const REQUEST_HEADERS: [(&str, &str); 1] = [("Content-Type", JSON_CONTENT_TYPE)];

/// Form entries in submission order, sent as a flat JSON object of strings.
///
/// Values are passed through verbatim; the backend does all coercion. A
/// repeated name keeps its first position and takes the last value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PredictionRequest {
    fields: Vec<(String, String)>,
}

impl PredictionRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn to_json(&self) -> Result<String, AqError> {
        serde_json::to_string(self).map_err(|e| AqError::Transport(e.to_string()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PredictionRequest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut request = PredictionRequest::new();
        for (name, value) in iter {
            request.insert(name, value);
        }
        request
    }
}

impl Serialize for PredictionRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Body returned by the backend. Extra keys are tolerated.
///
/// A missing or `null` `success` reads as `false`, like the page script's
/// truthiness check. Any other non-boolean value is still malformed.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PredictionResponse {
    #[serde(default, deserialize_with = "null_as_false")]
    pub success: bool,
    #[serde(default)]
    pub prediction: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

#[derive(Clone, Debug, PartialEq)]
pub enum PredictionOutcome {
    Success { prediction: f64, message: String },
    Failure { message: Option<String> },
}

impl TryFrom<PredictionResponse> for PredictionOutcome {
    type Error = AqError;

    fn try_from(response: PredictionResponse) -> Result<Self, Self::Error> {
        if !response.success {
            return Ok(PredictionOutcome::Failure {
                message: response.message,
            });
        }
        let prediction = response.prediction.ok_or_else(|| {
            AqError::MalformedResponse("success response without a prediction".into())
        })?;
        Ok(PredictionOutcome::Success {
            prediction,
            message: response.message.unwrap_or_default(),
        })
    }
}

/// Decode a response body. Anything outside the contract is `MalformedResponse`.
pub fn parse_response(body: &str) -> Result<PredictionOutcome, AqError> {
    let response: PredictionResponse =
        serde_json::from_str(body).map_err(|e| AqError::MalformedResponse(e.to_string()))?;
    PredictionOutcome::try_from(response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_in_form_order() {
        let request: PredictionRequest = [
            ("DEWP", "-16"),
            ("TEMP", "-4"),
            ("cbwd", "NW"),
            ("pm2_5_lag1", "129.0"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            request.to_json().unwrap(),
            r#"{"DEWP":"-16","TEMP":"-4","cbwd":"NW","pm2_5_lag1":"129.0"}"#
        );
    }

    #[test]
    fn test_request_repeated_name_last_value_wins() {
        let mut request = PredictionRequest::new();
        request.insert("hour", "3");
        request.insert("month", "7");
        request.insert("hour", "4");
        assert_eq!(request.len(), 2);
        assert_eq!(request.to_json().unwrap(), r#"{"hour":"4","month":"7"}"#);
    }

    #[test]
    fn test_request_keeps_values_verbatim() {
        let request: PredictionRequest = [("PRES", " 1012 "), ("Iws", "")].into_iter().collect();
        assert_eq!(request.to_json().unwrap(), r#"{"PRES":" 1012 ","Iws":""}"#);
    }

    #[test]
    fn test_parse_success() {
        let outcome = parse_response(
            r#"{"success": true, "prediction": 10, "message": "ok"}"#,
        )
        .unwrap();
        assert_eq!(
            outcome,
            PredictionOutcome::Success {
                prediction: 10.0,
                message: "ok".into()
            }
        );
    }

    #[test]
    fn test_parse_failure() {
        let outcome = parse_response(r#"{"success": false, "message": "bad input"}"#).unwrap();
        assert_eq!(
            outcome,
            PredictionOutcome::Failure {
                message: Some("bad input".into())
            }
        );
    }

    #[test]
    fn test_parse_failure_ignores_prediction() {
        let outcome =
            parse_response(r#"{"success": false, "prediction": null, "message": "x"}"#).unwrap();
        assert!(matches!(outcome, PredictionOutcome::Failure { .. }));
    }

    #[test]
    fn test_parse_tolerates_extra_keys() {
        let outcome = parse_response(
            r#"{"success": true, "prediction": 42.5, "message": "m", "model": "rf"}"#,
        )
        .unwrap();
        assert!(matches!(outcome, PredictionOutcome::Success { prediction, .. } if prediction == 42.5));
    }

    #[test]
    fn test_parse_falsy_success_is_failure() {
        let outcome =
            parse_response(r#"{"success": null, "message": "Model not loaded"}"#).unwrap();
        assert_eq!(
            outcome,
            PredictionOutcome::Failure {
                message: Some("Model not loaded".into())
            }
        );

        let outcome = parse_response(r#"{"prediction": 3, "message": "no flag"}"#).unwrap();
        assert!(matches!(outcome, PredictionOutcome::Failure { .. }));

        let outcome = parse_response(r#"{"success": false}"#).unwrap();
        assert_eq!(outcome, PredictionOutcome::Failure { message: None });
    }

    #[test]
    fn test_parse_success_without_message() {
        let outcome = parse_response(r#"{"success": true, "prediction": 7.5}"#).unwrap();
        assert_eq!(
            outcome,
            PredictionOutcome::Success {
                prediction: 7.5,
                message: String::new()
            }
        );
    }

    #[test]
    fn test_request_line_is_json_post() {
        assert_eq!(REQUEST_METHOD, "POST");
        assert_eq!(REQUEST_HEADERS, [("Content-Type", "application/json")]);
    }

    #[test]
    fn test_parse_rejects_off_contract_bodies() {
        let bodies = [
            "",
            "<html>Internal Server Error</html>",
            r#"{"success": "yes", "prediction": 3, "message": "m"}"#,
            r#"{"success": 1, "prediction": 3, "message": "m"}"#,
            r#"{"success": true, "message": "missing value"}"#,
            r#"{"success": true, "prediction": "12", "message": "m"}"#,
        ];
        for body in bodies {
            let err = parse_response(body).unwrap_err();
            assert!(matches!(err, AqError::MalformedResponse(_)), "body {body:?}");
        }
    }
}
