// src/ledger/mod.rs
//! Ledger computations over the transaction list
//!
//! Both ledgers run single-threaded, after mining has finished:
//! - [`credit`]: running sum of credit pending per recipient
//! - [`balance`]: timestamp-ordered replay with solvency checks

/// Pending credit per recipient
pub mod credit;

/// Sequential balance sheet
pub mod balance;

pub use balance::{Balance, BalanceSheet, compute_balances};
pub use credit::{CreditEntry, CreditLedger, LeadingRow, calculate_pending_credit};
