pub mod resolver;

pub use crate::domain::ports::{EnvSource, ProcessEnv};
pub use resolver::env_or_default;
