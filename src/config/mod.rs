pub use cadence_config::{AccessibilitySettings, Config, ConfigError, ConfigManager};

use cadence_core::ClassifierOptions;
use cadence_domain::WeekStart;

use crate::errors::{CadenceError, Result};

/// Manager for the default location. Reading never creates directories.
pub fn default_manager() -> ConfigManager {
    ConfigManager::with_base_dir(ConfigManager::default_base_dir())
}

/// Resolves the explicit run options; overrides win over stored preferences.
pub fn classifier_options(
    config: &Config,
    week_start_override: Option<&str>,
    debug_override: bool,
) -> Result<ClassifierOptions> {
    let week_start = match week_start_override {
        Some(raw) => raw
            .parse::<WeekStart>()
            .map_err(|err| CadenceError::InvalidInput(err.to_string()))?,
        None => config.week_start,
    };

    Ok(ClassifierOptions::default()
        .with_week_start(week_start)
        .with_diagnostics(debug_override || config.diagnostics))
}
