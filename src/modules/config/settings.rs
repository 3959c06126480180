use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;
use std::time::Duration;

use crate::{DEFAULT_HASH_ITERATIONS, DEFAULT_PAUSE_MILLIS};

/// Error raised while loading configuration
#[derive(Debug)]
pub enum ConfigError {
    IoError(io::Error),
    ParseError(serde_json::Error),
    Invalid(String),
}

impl From<io::Error> for ConfigError {
    fn from(error: io::Error) -> Self {
        ConfigError::IoError(error)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(error: serde_json::Error) -> Self {
        ConfigError::ParseError(error)
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "Failed to read configuration: {}", e),
            ConfigError::ParseError(e) => write!(f, "Malformed configuration: {}", e),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runtime settings; every field has a default so an empty JSON object is valid
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AdvisorConfig {
    pub pause_millis: u64,     // Delay after each decision procedure, 0 disables it
    pub hash_iterations: u32,  // PBKDF2 rounds for password digests
    pub hide_password: bool,   // Read passwords without echo
    pub log_file: Option<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            pause_millis: DEFAULT_PAUSE_MILLIS,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hide_password: true,
            log_file: None,
        }
    }
}

impl AdvisorConfig {
    /// Load and validate a JSON configuration file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path)?;
        let config: AdvisorConfig = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hash_iterations == 0 {
            return Err(ConfigError::Invalid(
                "hash_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn pause(&self) -> Duration {
        Duration::from_millis(self.pause_millis)
    }
}
