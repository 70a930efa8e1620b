// src/utils/error.rs
use std::io;
use thiserror::Error;

/// Main error type for the ledger miner
///
/// Mining itself never fails: an unsuccessful nonce search is recorded as
/// data. These variants cover everything around the mining phase, such as
/// reading input, loading configuration and building the worker pool.
#[derive(Error, Debug)]
pub enum MinerError {
    /// Configuration file or parameter errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Standard I/O operation errors
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A transaction line in the input file could not be parsed
    #[error("Parse error on line {line}: {reason}")]
    ParseError {
        /// 1-based line number in the input
        line: usize,
        /// What was wrong with the line
        reason: String,
    },

    /// Invalid user input or parameter errors
    #[error("Invalid input: {0}")]
    InputError(String),

    /// The worker thread pool could not be created
    #[error("Thread pool error: {0}")]
    ThreadPoolError(#[from] rayon::ThreadPoolBuildError),

    /// A mining task finished without producing its result
    #[error("Task execution error: {0}")]
    TaskError(String),
}

/// Converts TOML deserialization errors into MinerError
///
/// Wraps the original error in a `ConfigError` variant with context.
impl From<toml::de::Error> for MinerError {
    fn from(e: toml::de::Error) -> Self {
        MinerError::ConfigError(format!("Invalid config format: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_names_the_line() {
        let err = MinerError::ParseError {
            line: 7,
            reason: "expected 4 fields, found 3".into(),
        };
        assert_eq!(
            err.to_string(),
            "Parse error on line 7: expected 4 fields, found 3"
        );
    }

    #[test]
    fn toml_errors_become_config_errors() {
        let err: MinerError = toml::from_str::<toml::Value>("worker_threads = ")
            .unwrap_err()
            .into();
        assert!(matches!(err, MinerError::ConfigError(_)));
    }
}
