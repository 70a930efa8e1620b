// src/main.rs
use clap::Parser;
use ledger_miner_rs::{self, *};
use std::io::{self, BufWriter, Write};

/// Main entry point for the ledger miner
///
/// # Flow
/// 1. Parses command line arguments
/// 2. Delegates to appropriate subcommand handler
/// 3. Propagates any errors upward
fn main() -> Result<(), MinerError> {
    let cli = cli::Commands::parse();
    utils::init_logging(cli.verbose);

    match cli.action {
        cli::Action::Mine(opts) => run_mining(opts),
        cli::Action::Balances(opts) => run_balances(opts),
        cli::Action::Config(opts) => generate_config(opts),
    }
}

/// Mines every transaction in the input file and prints the report
///
/// # Operations
/// 1. Loads configuration and applies CLI overrides
/// 2. Reads the transaction file
/// 3. Mines all blocks and aggregates pending credit
/// 4. Writes the report to stdout
fn run_mining(opts: cli::MineOptions) -> Result<(), MinerError> {
    let mut config = match &opts.config {
        Some(path) => config::load(path)?,
        None => Config::default(),
    };
    // Apply CLI overrides
    if let Some(workers) = opts.workers {
        config.worker_threads = workers;
    }
    if let Some(bits) = opts.difficulty {
        config.difficulty_bits = bits;
    }
    if let Some(format) = opts.format {
        config.format = format;
    }
    if opts.no_header {
        config.has_header = false;
    }
    if opts.skip_leading_row {
        config.skip_leading_row = true;
    }
    config.validate()?;
    log::debug!("Effective configuration: {:?}", config);

    let transactions = input::read_transactions(&opts.file, config.has_header)?;
    let report = pipeline::mine_and_report(&transactions, &config)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report.write(&mut out, config.format)?;
    out.flush()?;
    Ok(())
}

/// Replays the input file in time order and prints account balances
fn run_balances(opts: cli::BalanceOptions) -> Result<(), MinerError> {
    let transactions = input::read_transactions(&opts.file, !opts.no_header)?;
    let sheet = ledger::compute_balances(&transactions);
    if sheet.rejected > 0 {
        log::info!("{} transfers rejected for insufficient funds", sheet.rejected);
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    report::write_balances(&sheet, &mut out, opts.format)?;
    out.flush()?;
    Ok(())
}

/// Generates configuration template file
fn generate_config(opts: cli::ConfigOptions) -> Result<(), MinerError> {
    let template = config::generate_template();
    std::fs::write(&opts.output, template)?;
    log::info!("Wrote configuration template to {}", opts.output.display());
    Ok(())
}
