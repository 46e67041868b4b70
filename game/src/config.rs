use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use backend::system::WindowSettings;

pub const DEFAULT_CONFIG_FILE: &str = "confetti.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("can't read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("can't parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Startup settings. Every field may be omitted from the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub vsync: bool,
    pub shader_dir: PathBuf,
    pub font_path: PathBuf,
    pub font_size: f32,
    /// `env_logger` filter string, e.g. "debug" or "confetti=trace"
    pub log_filter: Option<String>,
    /// fixed confetti seed; OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            title: "confetti".to_string(),
            width: 800,
            height: 600,
            vsync: true,
            shader_dir: PathBuf::from("res/shaders"),
            font_path: PathBuf::from("res/fonts/font.ttf"),
            font_size: 24.0,
            log_filter: None,
            seed: None,
        }
    }
}

impl Config {
    pub fn from_toml(text: &str, origin: &Path) -> Result<Config, ConfigError> {
        let config: Config = toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Config, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// An explicit path must exist; otherwise `confetti.toml` is used when
    /// present and the defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::from_file(path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.font_size > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "font_size must be positive, got {}",
                self.font_size
            )));
        }
        Ok(())
    }

    pub fn window_settings(&self) -> WindowSettings {
        WindowSettings {
            title: self.title.clone(),
            w: self.width as usize,
            h: self.height as usize,
            vsync: self.vsync,
        }
    }

    pub fn shader_path(&self, file: &str) -> PathBuf {
        self.shader_dir.join(file)
    }
}
