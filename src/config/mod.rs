//! Persisted application settings (`config.toml` under the app root).

mod io;

pub use io::{CONFIG_FILE_NAME, config_path, load_from_path, load_or_default, save, save_to_path};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sprite_drop::LayeredImageExtensions;

/// Top-level settings file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub drop: DropSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    /// TOML manifest listing sprite sheets and their sprites.
    #[serde(default)]
    pub sprite_manifest: Option<PathBuf>,
}

/// Drop receiver behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropSettings {
    /// Extensions recognized as layered images, without the leading dot.
    #[serde(default = "default_layered_image_extensions")]
    pub layered_image_extensions: Vec<String>,
    /// Class applied to the active drop receiver.
    #[serde(default = "default_highlight_class")]
    pub highlight_class: String,
    /// Key naming the receiver group of the library window.
    #[serde(default = "default_data_key")]
    pub data_key: String,
}

impl Default for DropSettings {
    fn default() -> Self {
        Self {
            layered_image_extensions: default_layered_image_extensions(),
            highlight_class: default_highlight_class(),
            data_key: default_data_key(),
        }
    }
}

impl DropSettings {
    pub fn extensions(&self) -> LayeredImageExtensions {
        LayeredImageExtensions::new(&self.layered_image_extensions)
    }
}

/// Tracing output options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    #[serde(default = "default_max_log_files")]
    pub max_log_files: usize,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            max_log_files: default_max_log_files(),
        }
    }
}

impl AppSettings {
    /// Replace blank or out-of-range values with defaults.
    pub fn normalized(mut self) -> Self {
        if self.drop.highlight_class.trim().is_empty() {
            self.drop.highlight_class = default_highlight_class();
        }
        if self.drop.data_key.trim().is_empty() {
            self.drop.data_key = default_data_key();
        }
        self.drop
            .layered_image_extensions
            .retain(|ext| !ext.trim_start_matches('.').trim().is_empty());
        if self.logging.filter.trim().is_empty() {
            self.logging.filter = default_log_filter();
        }
        self.logging.max_log_files = self.logging.max_log_files.max(1);
        self
    }
}

/// Errors that may occur while loading or saving settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config directory unavailable: {0}")]
    Directory(#[from] crate::app_dirs::AppDirError),
    #[error("Unable to create config directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid config at {path}: {source}")]
    ParseToml {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Failed to serialize config to TOML at {path}: {source}")]
    SerializeToml {
        path: PathBuf,
        source: toml::ser::Error,
    },
}

fn default_layered_image_extensions() -> Vec<String> {
    vec!["psd".to_string(), "psb".to_string()]
}

fn default_highlight_class() -> String {
    "sprite-library-editor__drag-over-add".to_string()
}

fn default_data_key() -> String {
    "sprite-library-drop".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

fn default_max_log_files() -> usize {
    10
}
