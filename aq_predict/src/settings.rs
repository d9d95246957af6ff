// Page settings. Defaults match the stock page; a page can override any
// subset with an inline JSON block.

use serde::Deserialize;

use crate::contract::DEFAULT_ENDPOINT;
use crate::render::GENERIC_ERROR_MESSAGE;
use crate::AqError;

/// Id of the optional `<script type="application/json">` holding overrides.
pub const SETTINGS_ELEMENT_ID: &str = "aqSettings";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ElementIds {
    pub form: String,
    pub result: String,
    pub value: String,
    pub message: String,
    pub status: String,
    pub chart: String,
    pub forest: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "predictionForm".to_string(),
            result: "predictionResult".to_string(),
            value: "predictionValue".to_string(),
            message: "predictionMessage".to_string(),
            status: "airQualityStatus".to_string(),
            chart: "featureImportanceChart".to_string(),
            forest: "forestCanvas".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub endpoint: String,
    pub elements: ElementIds,
    pub loading_label: String,
    pub generic_error_message: String,
    /// One of `error`, `warn`, `info`, `debug`, `trace`.
    pub log_level: String,
    pub fade_in_selector: String,
    pub fade_in_threshold: f64,
    pub fade_in_root_margin: String,
    pub particle_spawn_probability: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            elements: ElementIds::default(),
            loading_label: "<span class=\"loading\"></span> Predicting...".to_string(),
            generic_error_message: GENERIC_ERROR_MESSAGE.to_string(),
            log_level: "info".to_string(),
            fade_in_selector: ".card, .feature-item, .metric-circle".to_string(),
            fade_in_threshold: 0.1,
            fade_in_root_margin: "0px 0px -50px 0px".to_string(),
            particle_spawn_probability: 0.1,
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

impl Settings {
    pub fn from_json(raw: &str) -> Result<Self, AqError> {
        let settings: Settings =
            serde_json::from_str(raw).map_err(|e| AqError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), AqError> {
        if self.endpoint.trim().is_empty() {
            return Err(AqError::Config("endpoint must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.fade_in_threshold) {
            return Err(AqError::Config(format!(
                "fadeInThreshold must be within [0, 1], got {}",
                self.fade_in_threshold
            )));
        }
        if !(0.0..=1.0).contains(&self.particle_spawn_probability) {
            return Err(AqError::Config(format!(
                "particleSpawnProbability must be within [0, 1], got {}",
                self.particle_spawn_probability
            )));
        }
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(AqError::Config(format!("unknown logLevel '{}'", self.log_level)));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.endpoint, "/predict");
        assert_eq!(settings.elements.form, "predictionForm");
        assert_eq!(settings.elements.forest, "forestCanvas");
        assert_eq!(
            settings.generic_error_message,
            "An error occurred while making the prediction."
        );
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_override() {
        let settings =
            Settings::from_json(r#"{"endpoint": "/v2/predict", "elements": {"chart": "fi"}}"#)
                .unwrap();
        assert_eq!(settings.endpoint, "/v2/predict");
        assert_eq!(settings.elements.chart, "fi");
        assert_eq!(settings.elements.result, "predictionResult");
        assert_eq!(settings.fade_in_threshold, 0.1);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(Settings::from_json("{}").unwrap(), Settings::default());
    }

    #[test]
    fn test_invalid_overrides() {
        for raw in [
            "not json",
            r#"{"endpoint": "  "}"#,
            r#"{"fadeInThreshold": 1.5}"#,
            r#"{"particleSpawnProbability": -0.1}"#,
            r#"{"logLevel": "loud"}"#,
        ] {
            assert!(matches!(Settings::from_json(raw), Err(AqError::Config(_))), "{raw}");
        }
    }
}
