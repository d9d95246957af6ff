// PM2.5 severity bands used for the status badge.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AirQuality {
    Good,
    Moderate,
    UnhealthyForSensitiveGroups,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BadgeStyle {
    Success,
    Warning,
    Orange,
    Danger,
    Purple,
    Dark,
}

// Inclusive upper bounds, ascending. Anything above the last is Hazardous.
const BANDS: [(f64, AirQuality); 5] = [
    (12.0, AirQuality::Good),
    (35.4, AirQuality::Moderate),
    (55.4, AirQuality::UnhealthyForSensitiveGroups),
    (150.4, AirQuality::Unhealthy),
    (250.4, AirQuality::VeryUnhealthy),
];

/// Classify a predicted concentration. NaN compares false against every
/// bound and lands in `Hazardous`.
pub fn classify(prediction: f64) -> AirQuality {
    BANDS
        .iter()
        .find(|(upper, _)| prediction <= *upper)
        .map(|(_, quality)| *quality)
        .unwrap_or(AirQuality::Hazardous)
}

impl AirQuality {
    pub fn label(self) -> &'static str {
        match self {
            AirQuality::Good => "Good",
            AirQuality::Moderate => "Moderate",
            AirQuality::UnhealthyForSensitiveGroups => "Unhealthy for Sensitive Groups",
            AirQuality::Unhealthy => "Unhealthy",
            AirQuality::VeryUnhealthy => "Very Unhealthy",
            AirQuality::Hazardous => "Hazardous",
        }
    }

    pub fn style(self) -> BadgeStyle {
        match self {
            AirQuality::Good => BadgeStyle::Success,
            AirQuality::Moderate => BadgeStyle::Warning,
            AirQuality::UnhealthyForSensitiveGroups => BadgeStyle::Orange,
            AirQuality::Unhealthy => BadgeStyle::Danger,
            AirQuality::VeryUnhealthy => BadgeStyle::Purple,
            AirQuality::Hazardous => BadgeStyle::Dark,
        }
    }

    pub fn badge_class(self) -> String {
        format!("badge {} fs-6 p-3 mt-3", self.style().background_class())
    }
}

impl BadgeStyle {
    pub fn name(self) -> &'static str {
        match self {
            BadgeStyle::Success => "success",
            BadgeStyle::Warning => "warning",
            BadgeStyle::Orange => "orange",
            BadgeStyle::Danger => "danger",
            BadgeStyle::Purple => "purple",
            BadgeStyle::Dark => "dark",
        }
    }

    pub fn background_class(self) -> String {
        format!("bg-{}", self.name())
    }
}

impl std::fmt::Display for AirQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
