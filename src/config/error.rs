// src/config/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Yaml {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("initial_steps must be even and at least 2 (got {0})")]
    InvalidInitialSteps(usize),
    #[error("max_iterations must be at least 1")]
    ZeroIterationLimit,
    #[error("unknown log level: {0}")]
    InvalidLogLevel(String),
}
