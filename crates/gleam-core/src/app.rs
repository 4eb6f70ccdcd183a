use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::config::{Config, ValidationResult};

/// Application state and lifecycle manager
pub struct App {
    config: Arc<Config>,
    validation: ValidationResult,
}

impl App {
    /// Create a new application instance from the default config location
    pub fn new() -> Result<Self> {
        Self::with_config_path(None)
    }

    /// Create a new application instance, optionally from an explicit config file
    pub fn with_config_path(path: Option<&Path>) -> Result<Self> {
        let (config, validation) = Config::load_validated(path)?;
        tracing::info!(
            config_dir = %config.config_dir.display(),
            warnings = validation.warnings.len(),
            "Configuration loaded"
        );

        Ok(Self {
            config: Arc::new(config),
            validation,
        })
    }

    /// Wrap an already-built configuration
    pub fn from_config(config: Config) -> Self {
        let validation = config.validate();
        Self {
            config: Arc::new(config),
            validation,
        }
    }

    /// Get reference to application config
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared handle to the config
    pub fn shared_config(&self) -> Arc<Config> {
        self.config.clone()
    }

    /// Warnings collected while loading the config
    pub fn validation(&self) -> &ValidationResult {
        &self.validation
    }

    /// Shutdown the application
    pub fn shutdown(&mut self) -> Result<()> {
        tracing::debug!("Shutting down application");
        Ok(())
    }
}
