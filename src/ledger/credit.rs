// src/ledger/credit.rs
//! Pending credit aggregation
//!
//! Sums, per recipient, every amount a user is owed. No solvency checks are
//! made; see [`crate::ledger::balance`] for the balance sheet.

use crate::types::Transaction;
use serde::Serialize;
use std::collections::HashMap;

/// How the first transaction of a list is treated by the credit scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeadingRow {
    /// Index 0 is a header or sentinel row and contributes no credit
    Skip,
    /// Index 0 is an ordinary transaction
    #[default]
    Include,
}

impl LeadingRow {
    /// Index the credit scan starts at
    pub fn start_index(self) -> usize {
        match self {
            LeadingRow::Skip => 1,
            LeadingRow::Include => 0,
        }
    }
}

/// Credit owed to a single user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreditEntry {
    /// Recipient username (unique within a ledger)
    pub username: String,
    /// Sum of all amounts received
    pub pending_credit: u64,
}

/// Recipient → pending credit, one entry per username
///
/// Entries keep the order in which users were first credited.
#[derive(Debug, Default, Clone)]
pub struct CreditLedger {
    /// Position of each username in `entries`
    index: HashMap<String, usize>,
    entries: Vec<CreditEntry>,
}

impl CreditLedger {
    /// Creates an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `amount` to the pending credit of `username`
    ///
    /// The sum saturates at `u64::MAX`.
    pub fn credit(&mut self, username: &str, amount: u64) {
        match self.index.get(username) {
            Some(&pos) => {
                let entry = &mut self.entries[pos];
                entry.pending_credit = entry.pending_credit.saturating_add(amount);
            }
            None => {
                self.index.insert(username.to_string(), self.entries.len());
                self.entries.push(CreditEntry {
                    username: username.to_string(),
                    pending_credit: amount,
                });
            }
        }
    }

    /// Credits the recipient of every transaction from `leading`'s start index
    pub fn accumulate(&mut self, transactions: &[Transaction], leading: LeadingRow) {
        for tx in transactions.iter().skip(leading.start_index()) {
            self.credit(&tx.recipient, tx.amount);
        }
    }

    /// Pending credit of `username`, if it has received anything
    pub fn get(&self, username: &str) -> Option<u64> {
        self.index
            .get(username)
            .map(|&pos| self.entries[pos].pending_credit)
    }

    /// Number of distinct recipients
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no credit has been recorded
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in first-credited order
    pub fn iter(&self) -> impl Iterator<Item = &CreditEntry> {
        self.entries.iter()
    }

    /// Consumes the ledger, yielding every entry exactly once
    pub fn drain(self) -> Vec<CreditEntry> {
        self.entries
    }
}

/// Accumulates pending credit for `transactions` into a caller-owned ledger
///
/// The ledger is passed in and handed back so callers can merge several
/// transaction lists into one report.
pub fn calculate_pending_credit(
    transactions: &[Transaction],
    mut ledger: CreditLedger,
    leading: LeadingRow,
) -> CreditLedger {
    ledger.accumulate(transactions, leading);
    log::debug!(
        "Pending credit computed for {} recipients ({:?} leading row)",
        ledger.len(),
        leading
    );
    ledger
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(timestamp: i64, sender: &str, recipient: &str, amount: u64) -> Transaction {
        Transaction::new(timestamp, sender, recipient, amount).unwrap()
    }

    fn sample() -> Vec<Transaction> {
        vec![
            tx(1, "A", "B", 10),
            tx(2, "B", "C", 5),
            tx(3, "C", "B", 7),
            tx(4, "A", "D", 1),
            tx(5, "D", "C", 2),
        ]
    }

    #[test]
    fn sums_amounts_per_recipient() {
        let ledger = calculate_pending_credit(&sample(), CreditLedger::new(), LeadingRow::Include);

        assert_eq!(ledger.get("B"), Some(17));
        assert_eq!(ledger.get("C"), Some(7));
        assert_eq!(ledger.get("D"), Some(1));
        assert_eq!(ledger.get("A"), None);
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn skip_policy_ignores_first_transaction() {
        let ledger = calculate_pending_credit(&sample(), CreditLedger::new(), LeadingRow::Skip);

        // The leading row's 10 credited to B is excluded.
        assert_eq!(ledger.get("B"), Some(7));
        assert_eq!(ledger.get("C"), Some(7));
    }

    #[test]
    fn skip_policy_on_single_row_is_empty() {
        let ledger =
            calculate_pending_credit(&[tx(1, "A", "B", 10)], CreditLedger::new(), LeadingRow::Skip);
        assert!(ledger.is_empty());
    }

    #[test]
    fn drain_emits_each_user_once_in_first_seen_order() {
        let entries =
            calculate_pending_credit(&sample(), CreditLedger::new(), LeadingRow::Include).drain();

        let names: Vec<_> = entries.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "D"]);
    }

    #[test]
    fn caller_owned_ledger_accumulates_across_calls() {
        let ledger = calculate_pending_credit(&sample(), CreditLedger::new(), LeadingRow::Include);
        let ledger = calculate_pending_credit(&sample(), ledger, LeadingRow::Include);

        assert_eq!(ledger.get("B"), Some(34));
        assert_eq!(ledger.len(), 3);
    }

    #[test]
    fn totals_match_brute_force_sums() {
        let txs = sample();
        let ledger = calculate_pending_credit(&txs, CreditLedger::new(), LeadingRow::Include);

        for entry in ledger.iter() {
            let expected: u64 = txs
                .iter()
                .filter(|t| t.recipient == entry.username)
                .map(|t| t.amount)
                .sum();
            assert_eq!(entry.pending_credit, expected);
        }
    }

    #[test]
    fn credit_saturates() {
        let mut ledger = CreditLedger::new();
        ledger.credit("B", u64::MAX);
        ledger.credit("B", 1);
        assert_eq!(ledger.get("B"), Some(u64::MAX));
    }

    #[test]
    fn empty_input_empty_report() {
        let ledger = calculate_pending_credit(&[], CreditLedger::new(), LeadingRow::Skip);
        assert!(ledger.drain().is_empty());
    }
}
