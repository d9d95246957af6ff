// Chart.js configuration for the feature-importance bar chart.

use serde_json::{json, Value};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureImportance {
    pub label: &'static str,
    pub importance: f64,
    pub rgb: (u8, u8, u8),
}

/// Importances of the random-forest model, highest first.
pub const FEATURE_IMPORTANCES: [FeatureImportance; 10] = [
    FeatureImportance { label: "PM2.5 Lag", importance: 0.245, rgb: (255, 99, 132) },
    FeatureImportance { label: "Temperature", importance: 0.189, rgb: (54, 162, 235) },
    FeatureImportance { label: "Dew Point", importance: 0.156, rgb: (255, 206, 86) },
    FeatureImportance { label: "Pressure", importance: 0.134, rgb: (75, 192, 192) },
    FeatureImportance { label: "Wind Speed", importance: 0.123, rgb: (153, 102, 255) },
    FeatureImportance { label: "Hour", importance: 0.098, rgb: (255, 159, 64) },
    FeatureImportance { label: "Month", importance: 0.087, rgb: (199, 199, 199) },
    FeatureImportance { label: "Snow Hours", importance: 0.045, rgb: (83, 102, 255) },
    FeatureImportance { label: "Rain Hours", importance: 0.032, rgb: (78, 252, 3) },
    FeatureImportance { label: "Wind Direction", importance: 0.025, rgb: (252, 3, 244) },
];

const BACKGROUND_ALPHA: f64 = 0.8;
const BORDER_ALPHA: f64 = 1.0;

fn rgba((r, g, b): (u8, u8, u8), alpha: f64) -> String {
    format!("rgba({r}, {g}, {b}, {alpha})")
}

/// Full `new Chart(ctx, config)` argument for the given features.
pub fn bar_chart_config(features: &[FeatureImportance]) -> Value {
    let labels: Vec<&str> = features.iter().map(|f| f.label).collect();
    let data: Vec<f64> = features.iter().map(|f| f.importance).collect();
    let background: Vec<String> = features.iter().map(|f| rgba(f.rgb, BACKGROUND_ALPHA)).collect();
    let border: Vec<String> = features.iter().map(|f| rgba(f.rgb, BORDER_ALPHA)).collect();

    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Feature Importance",
                "data": data,
                "backgroundColor": background,
                "borderColor": border,
                "borderWidth": 2
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": { "display": false },
                "title": {
                    "display": true,
                    "text": "Feature Importance in Random Forest Model"
                }
            },
            "scales": {
                "y": {
                    "beginAtZero": true,
                    "title": { "display": true, "text": "Importance Score" }
                },
                "x": {
                    "title": { "display": true, "text": "Features" }
                }
            }
        }
    })
}

pub fn feature_importance_config() -> Value {
    bar_chart_config(&FEATURE_IMPORTANCES)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_shape() {
        let config = feature_importance_config();
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"][0], "PM2.5 Lag");
        assert_eq!(config["data"]["labels"][9], "Wind Direction");
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["data"].as_array().map(Vec::len), Some(10));
        assert_eq!(dataset["data"][1], 0.189);
        assert_eq!(dataset["borderWidth"], 2);
        assert_eq!(config["options"]["plugins"]["legend"]["display"], false);
        assert_eq!(config["options"]["scales"]["y"]["beginAtZero"], true);
        assert_eq!(config["options"]["scales"]["x"]["title"]["text"], "Features");
    }

    #[test]
    fn test_colours() {
        let config = feature_importance_config();
        let dataset = &config["data"]["datasets"][0];
        assert_eq!(dataset["backgroundColor"][0], "rgba(255, 99, 132, 0.8)");
        assert_eq!(dataset["borderColor"][0], "rgba(255, 99, 132, 1)");
        assert_eq!(dataset["borderColor"][8], "rgba(78, 252, 3, 1)");
    }

    #[test]
    fn test_importances_descend() {
        assert!(FEATURE_IMPORTANCES
            .windows(2)
            .all(|w| w[0].importance >= w[1].importance));
    }
}
