use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{Config, ConfigError};

const HOME_ENV: &str = "CADENCE_HOME";
const TMP_SUFFIX: &str = "tmp";

/// Handles persistence for [`Config`].
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    pub fn new(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    /// Points at `<base>/config/config.json`. Nothing is created until [`save`](Self::save).
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self::new(base.join("config").join("config.json"))
    }

    /// `$CADENCE_HOME`, else the platform config directory, else `./.cadence`.
    pub fn default_base_dir() -> PathBuf {
        if let Some(home) = env::var_os(HOME_ENV).filter(|value| !value.is_empty()) {
            return PathBuf::from(home);
        }
        dirs::config_dir()
            .map(|dir| dir.join("cadence"))
            .unwrap_or_else(|| PathBuf::from(".cadence"))
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.config_path.exists() {
            let data =
                fs::read_to_string(&self.config_path).map_err(ConfigError::io(&self.config_path))?;
            serde_json::from_str(&data).map_err(|err| ConfigError::Serde(err.to_string()))
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::io(parent))?;
        }
        let json = serde_json::to_string_pretty(config)
            .map_err(|err| ConfigError::Serde(err.to_string()))?;
        let tmp = tmp_path(&self.config_path);
        write_atomic(&tmp, &json).map_err(ConfigError::io(&tmp))?;
        fs::rename(&tmp, &self.config_path).map_err(ConfigError::io(&self.config_path))?;
        Ok(())
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()?;
    Ok(())
}
