use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error at {}: {source}", .path.display())]
    Io { path: PathBuf, source: io::Error },

    #[error("Serialization error: {0}")]
    Serde(String),
}

impl ConfigError {
    pub(crate) fn io(path: &Path) -> impl FnOnce(io::Error) -> ConfigError + '_ {
        move |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
