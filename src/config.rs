//! Configuration management for the file tree shell
//!
//! Values come from built-in defaults, an optional `config.toml` in the
//! working directory and `FILE_TREE_*` environment variables, in that order.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

const CONFIG_FILE: &str = "config";
const ENV_PREFIX: &str = "FILE_TREE";

/// Complete shell configuration
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Prompt written before each command line
    pub prompt: String,

    /// Longest accepted command line, in bytes
    /// Environment: FILE_TREE_MAX_COMMAND_LENGTH
    pub max_command_length: usize,

    /// Run the demonstration script before the shell starts
    /// Environment: FILE_TREE_RUN_DEMO
    pub run_demo: bool,

    /// Read commands from stdin after the demo
    /// Environment: FILE_TREE_INTERACTIVE
    pub interactive: bool,

    /// Default `env_logger` filter; `RUST_LOG` wins when set
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            max_command_length: 512,
            run_demo: false,
            interactive: true,
            log_filter: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, config.toml and environment overrides
    pub fn load() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let settings = Config::builder()
            .set_default("prompt", defaults.prompt)?
            .set_default("max_command_length", defaults.max_command_length as i64)?
            .set_default("run_demo", defaults.run_demo)?
            .set_default("interactive", defaults.interactive)?
            .set_default("log_filter", defaults.log_filter)?
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?;

        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_command_length == 0 {
            return Err(ConfigError::Message(
                "max_command_length must be greater than 0".into(),
            ));
        }

        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Message("log_filter cannot be empty".into()));
        }

        if !self.run_demo && !self.interactive {
            return Err(ConfigError::Message(
                "Nothing to do: enable run_demo or interactive".into(),
            ));
        }

        Ok(())
    }
}
