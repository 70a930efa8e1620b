// src/cli/commands.rs
use crate::types::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Ledger Miner CLI - proof-of-work over a CSV of transactions
#[derive(Parser, Debug)]
#[command(name = "ledger-miner")]
#[command(version, about, long_about = None)]
pub struct Commands {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The action to perform (mine blocks, compute balances, or generate config)
    #[command(subcommand)]
    pub action: Action,
}

/// Top-level commands for the miner application
#[derive(Subcommand, Debug)]
pub enum Action {
    /// Mine a block for every transaction and report pending credit
    Mine(MineOptions),

    /// Replay transactions in time order and report account balances
    Balances(BalanceOptions),

    /// Generate configuration file template
    Config(ConfigOptions),
}

/// Options for a mining run
#[derive(Parser, Debug)]
pub struct MineOptions {
    /// CSV file in the format created_at,sender,recipient,amount
    pub file: PathBuf,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of worker threads to use (overrides config)
    #[arg(short, long)]
    pub workers: Option<usize>,

    /// Required leading zero bits per digest (overrides config)
    #[arg(short, long)]
    pub difficulty: Option<u32>,

    /// Output format (overrides config)
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Treat the first line of the file as a transaction
    #[arg(long)]
    pub no_header: bool,

    /// Leave the first transaction out of the pending credit report
    #[arg(long)]
    pub skip_leading_row: bool,
}

/// Options for the balance report
#[derive(Parser, Debug)]
pub struct BalanceOptions {
    /// CSV file in the format created_at,sender,recipient,amount
    pub file: PathBuf,

    /// Treat the first line of the file as a transaction
    #[arg(long)]
    pub no_header: bool,

    /// Output format
    #[arg(short, long, default_value_t = OutputFormat::Csv)]
    pub format: OutputFormat,
}

/// Options for generating configuration files
#[derive(Parser, Debug)]
pub struct ConfigOptions {
    /// Output file path
    #[arg(short, long, default_value = "ledger-miner.toml")]
    pub output: PathBuf,
}
