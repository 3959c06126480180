pub mod settings;

pub use settings::{AdvisorConfig, ConfigError};
