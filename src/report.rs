// src/report.rs
//! Report rendering
//!
//! Turns mining results, pending credit and balance sheets into the lines
//! printed by the command-line tool.

use crate::ledger::{BalanceSheet, CreditEntry};
use crate::miner::MiningResult;
use crate::types::{OutputFormat, Transaction};
use crate::utils::error::MinerError;
use serde::Serialize;
use std::io::Write;

/// Header of the mined block section
pub const BLOCK_HEADER: &str = "created_at,sender,recipient,amount,proof,digest";

/// Header of the pending credit section
pub const CREDIT_HEADER: &str = "username,pending_credit";

/// Header of the sorted transaction section of a balance report
pub const TRANSACTION_HEADER: &str = "created_at,sender,recipient,amount";

/// Header of the balance section of a balance report
pub const BALANCE_HEADER: &str = "username,balance";

/// Everything produced by a mining run
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// One result per input transaction, in input order
    pub results: Vec<MiningResult>,
    /// Pending credit per recipient
    pub credits: Vec<CreditEntry>,
}

#[derive(Serialize)]
struct BlockRecord<'a> {
    status: &'static str,
    #[serde(flatten)]
    transaction: &'a Transaction,
    #[serde(skip_serializing_if = "Option::is_none")]
    nonce: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    digest: Option<String>,
}

impl<'a> From<&'a MiningResult> for BlockRecord<'a> {
    fn from(result: &'a MiningResult) -> Self {
        match result {
            MiningResult::Success {
                nonce,
                digest,
                transaction,
            } => BlockRecord {
                status: "mined",
                transaction,
                nonce: Some(*nonce),
                digest: Some(hex::encode(digest)),
            },
            MiningResult::Exhausted { transaction } => BlockRecord {
                status: "exhausted",
                transaction,
                nonce: None,
                digest: None,
            },
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    blocks: Vec<BlockRecord<'a>>,
    pending_credit: &'a [CreditEntry],
}

impl Report {
    /// Writes the report in the requested format
    pub fn write<W: Write>(&self, out: &mut W, format: OutputFormat) -> Result<(), MinerError> {
        match format {
            OutputFormat::Csv => self.write_csv(out),
            OutputFormat::Json => self.write_json(out),
        }
    }

    /// Writes blocks then pending credit as comma separated lines
    pub fn write_csv<W: Write>(&self, out: &mut W) -> Result<(), MinerError> {
        writeln!(out, "{}", BLOCK_HEADER)?;
        for result in &self.results {
            writeln!(out, "{}", result)?;
        }

        writeln!(out, "{}", CREDIT_HEADER)?;
        for entry in &self.credits {
            writeln!(out, "{},{}", entry.username, entry.pending_credit)?;
        }
        Ok(())
    }

    /// Writes the report as a single JSON document
    pub fn write_json<W: Write>(&self, out: &mut W) -> Result<(), MinerError> {
        let doc = JsonReport {
            blocks: self.results.iter().map(BlockRecord::from).collect(),
            pending_credit: &self.credits,
        };
        serde_json::to_writer_pretty(&mut *out, &doc)?;
        writeln!(out)?;
        Ok(())
    }
}

/// Writes a balance sheet in the requested format
pub fn write_balances<W: Write>(
    sheet: &BalanceSheet,
    out: &mut W,
    format: OutputFormat,
) -> Result<(), MinerError> {
    match format {
        OutputFormat::Csv => {
            writeln!(out, "{}", TRANSACTION_HEADER)?;
            for tx in &sheet.transactions {
                writeln!(out, "{}", tx)?;
            }
            writeln!(out, "{}", BALANCE_HEADER)?;
            for balance in &sheet.balances {
                writeln!(out, "{},{}", balance.username, balance.amount)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, sheet)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
