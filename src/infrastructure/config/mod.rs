use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::error::{AppError, Result};
use crate::domain::matrix::VisualizationConfig;

pub const DEFAULT_ENV_PREFIX: &str = "LLM_MATRIX_";

/// Layers defaults, an optional TOML file and the environment
pub struct ConfigService {
    file: Option<PathBuf>,
    env_prefix: String,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            file: None,
            env_prefix: DEFAULT_ENV_PREFIX.to_string(),
        }
    }

    pub fn with_file(mut self, path: &Path) -> Self {
        self.file = Some(path.to_path_buf());
        self
    }

    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.to_string();
        self
    }

    pub fn load(&self) -> Result<VisualizationConfig> {
        let mut figment = Figment::from(Serialized::defaults(VisualizationConfig::default()));

        if let Some(path) = &self.file {
            if !path.exists() {
                return Err(AppError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            tracing::debug!(path = %path.display(), "Merging config file");
            figment = figment.merge(Toml::file(path));
        }

        let config: VisualizationConfig = figment
            .merge(Env::prefixed(&self.env_prefix))
            .extract()?;

        config.validate().map_err(|e| {
            AppError::ValidationError(format!("Invalid visualization config: {}", e))
        })?;

        tracing::debug!(?config, "Visualization config loaded");
        Ok(config)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
