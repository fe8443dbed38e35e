//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use crate::config::schema::SinkConfig;

/// A semantic constraint violation in an otherwise well-formed config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// `listener.read_buffer_bytes` is zero; the relay needs room for at
    /// least one byte.
    ZeroReadBuffer,
    /// `listener.backlog` is zero; the OS needs room for at least the one
    /// connection this listener accepts.
    ZeroBacklog,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::ZeroReadBuffer => {
                write!(f, "listener.read_buffer_bytes must be at least 1")
            }
            ValidationError::ZeroBacklog => write!(f, "listener.backlog must be at least 1"),
        }
    }
}

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Check the semantic constraints the schema cannot express.
pub fn validate_config(config: &SinkConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.read_buffer_bytes == 0 {
        errors.push(ValidationError::ZeroReadBuffer);
    }
    if config.listener.backlog == 0 {
        errors.push(ValidationError::ZeroBacklog);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SinkConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SinkConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
