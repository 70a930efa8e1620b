// src/types.rs
use crate::utils::error::MinerError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Width of a username field in the block encoding, including the
/// terminating zero byte.
pub const USERNAME_LEN: usize = 64;

/// A single transfer of funds between two users
///
/// Transactions are validated on construction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transaction {
    /// Creation time in seconds since the epoch
    pub timestamp: i64,
    /// Sending user
    pub sender: String,
    /// Receiving user
    pub recipient: String,
    /// Amount moved from sender to recipient
    pub amount: u64,
}

impl Transaction {
    /// Creates a new transaction, validating both usernames
    ///
    /// # Errors
    /// Returns `MinerError::InputError` if a username is empty, longer than
    /// `USERNAME_LEN - 1` bytes, or contains a comma or line break.
    pub fn new(
        timestamp: i64,
        sender: impl Into<String>,
        recipient: impl Into<String>,
        amount: u64,
    ) -> Result<Self, MinerError> {
        let sender = sender.into();
        let recipient = recipient.into();
        validate_username(&sender)?;
        validate_username(&recipient)?;

        Ok(Transaction {
            timestamp,
            sender,
            recipient,
            amount,
        })
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.timestamp, self.sender, self.recipient, self.amount
        )
    }
}

fn validate_username(name: &str) -> Result<(), MinerError> {
    if name.is_empty() {
        return Err(MinerError::InputError("username must not be empty".into()));
    }
    if name.len() >= USERNAME_LEN {
        return Err(MinerError::InputError(format!(
            "username '{}' exceeds {} bytes",
            name,
            USERNAME_LEN - 1
        )));
    }
    if name.contains([',', '\r', '\n']) {
        return Err(MinerError::InputError(format!(
            "username '{}' contains a separator character",
            name.escape_default()
        )));
    }
    Ok(())
}

/// Output formats for the mining report
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma separated lines, one record per line
    #[default]
    #[value(name = "csv")]
    Csv,

    /// A single pretty-printed JSON document
    #[value(name = "json")]
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
