pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::{CliConfig, OutputFormat};

pub use config::{app_config, PublicConfig};
pub use crate::core::{env_or_default, EnvSource, ProcessEnv};
pub use utils::error::{ConfigError, Result};
