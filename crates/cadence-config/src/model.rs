use cadence_domain::WeekStart;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Stores user-configurable profiling and CLI preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// First day of week-aligned windows: `sunday` or `monday`.
    #[serde(default)]
    pub week_start: WeekStart,
    /// chrono format string for the date column of CSV input.
    #[serde(default = "Config::default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub diagnostics: bool,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    #[serde(default)]
    pub accessibility: AccessibilitySettings,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Input file used when none is given on the command line.
    pub default_input: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_start: WeekStart::default(),
            date_format: Self::default_date_format(),
            diagnostics: false,
            ui_color_enabled: Self::default_ui_color_enabled(),
            accessibility: AccessibilitySettings::default(),
            default_input: None,
        }
    }
}

impl Config {
    pub fn default_date_format() -> String {
        "%m/%d/%Y".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Input path to read: the explicit one, then the configured default, then `sample.csv`.
    pub fn resolve_input(&self, explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| self.default_input.clone())
            .unwrap_or_else(|| PathBuf::from("sample.csv"))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessibilitySettings {
    #[serde(default)]
    pub plain_output: bool,
}
