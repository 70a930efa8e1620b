// src/cli/mod.rs
//! Command-line interface definitions

/// Argument parser and subcommands
pub mod commands;

pub use commands::{Action, BalanceOptions, Commands, ConfigOptions, MineOptions};
