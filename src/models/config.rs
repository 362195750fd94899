//! User preference record for Sentinel Guard
//!
//! Every field carries a serde default so partially persisted data
//! backfills cleanly on load. Partial updates merge through
//! `SettingsUpdate` - the storage layer always writes the full record.

use serde::{Deserialize, Serialize};

/// Supported UI languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Zh,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Zh => "zh",
        }
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// How aggressively the analysis UI flags findings
///
/// Accepted by the mock analyzer but does not alter its fixed verdicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskSensitivity {
    Minimal,
    #[default]
    Standard,
    Strict,
}

impl RiskSensitivity {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskSensitivity::Minimal => "minimal",
            RiskSensitivity::Standard => "standard",
            RiskSensitivity::Strict => "strict",
        }
    }
}

/// Animation intensity for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimationIntensity {
    Subtle,
    #[default]
    Normal,
    Fun,
}

/// Flat user preference record
///
/// `Default` is the documented fallback for every field; missing fields
/// in persisted data are backfilled field-by-field via `serde(default)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub language: Language,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub risk_sensitivity: RiskSensitivity,
    #[serde(default)]
    pub animation_intensity: AnimationIntensity,
}

impl AppSettings {
    /// Shallow-merge a partial update into this record
    pub fn apply(&mut self, update: SettingsUpdate) {
        if let Some(language) = update.language {
            self.language = language;
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(sensitivity) = update.risk_sensitivity {
            self.risk_sensitivity = sensitivity;
        }
        if let Some(intensity) = update.animation_intensity {
            self.animation_intensity = intensity;
        }
    }
}

/// Partial settings patch - unset fields keep their current value
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub language: Option<Language>,
    pub theme: Option<Theme>,
    pub risk_sensitivity: Option<RiskSensitivity>,
    pub animation_intensity: Option<AnimationIntensity>,
}

impl SettingsUpdate {
    pub fn language(language: Language) -> Self {
        Self {
            language: Some(language),
            ..Self::default()
        }
    }

    pub fn theme(theme: Theme) -> Self {
        Self {
            theme: Some(theme),
            ..Self::default()
        }
    }

    pub fn risk_sensitivity(sensitivity: RiskSensitivity) -> Self {
        Self {
            risk_sensitivity: Some(sensitivity),
            ..Self::default()
        }
    }

    pub fn animation_intensity(intensity: AnimationIntensity) -> Self {
        Self {
            animation_intensity: Some(intensity),
            ..Self::default()
        }
    }
}
