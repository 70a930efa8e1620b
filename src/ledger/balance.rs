// src/ledger/balance.rs
//! Sequential balance sheet
//!
//! Replays transactions in timestamp order. Transfers from the mint account
//! create funds; every other transfer only applies when the sender can cover
//! it.

use crate::types::Transaction;
use serde::Serialize;
use std::collections::HashMap;

/// Sender name whose transfers create new funds
pub const MINT_ACCOUNT: &str = "system";

/// Final balance of one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Balance {
    /// Account holder
    pub username: String,
    /// Balance after all applied transfers
    pub amount: u64,
}

/// Result of replaying a transaction list
#[derive(Debug, Clone, Default, Serialize)]
pub struct BalanceSheet {
    /// Input transactions, stably sorted by timestamp
    pub transactions: Vec<Transaction>,
    /// Balances in order of first appearance
    pub balances: Vec<Balance>,
    /// Transfers skipped because the sender could not cover them
    pub rejected: usize,
}

/// Replays `transactions` and computes every account's balance
pub fn compute_balances(transactions: &[Transaction]) -> BalanceSheet {
    let mut sorted = transactions.to_vec();
    sorted.sort_by_key(|tx| tx.timestamp);

    let mut index: HashMap<String, usize> = HashMap::new();
    let mut balances: Vec<Balance> = Vec::new();
    let mut register = |name: &str| -> usize {
        *index.entry(name.to_string()).or_insert_with(|| {
            balances.push(Balance {
                username: name.to_string(),
                amount: 0,
            });
            balances.len() - 1
        })
    };

    let mut moves = Vec::with_capacity(sorted.len());
    for tx in &sorted {
        let from = (tx.sender != MINT_ACCOUNT).then(|| register(&tx.sender));
        let to = register(&tx.recipient);
        moves.push((from, to, tx));
    }

    let mut rejected = 0;
    for (from, to, tx) in moves {
        match from {
            None => {
                balances[to].amount = balances[to].amount.saturating_add(tx.amount);
            }
            Some(from) if balances[from].amount >= tx.amount => {
                balances[from].amount -= tx.amount;
                balances[to].amount = balances[to].amount.saturating_add(tx.amount);
            }
            Some(_) => {
                log::debug!("Rejected transfer {}: insufficient funds", tx);
                rejected += 1;
            }
        }
    }

    BalanceSheet {
        transactions: sorted,
        balances,
        rejected,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(timestamp: i64, sender: &str, recipient: &str, amount: u64) -> Transaction {
        Transaction::new(timestamp, sender, recipient, amount).unwrap()
    }

    fn balance_of(sheet: &BalanceSheet, name: &str) -> Option<u64> {
        sheet
            .balances
            .iter()
            .find(|b| b.username == name)
            .map(|b| b.amount)
    }

    #[test]
    fn mint_then_transfer() {
        let sheet = compute_balances(&[
            tx(1, MINT_ACCOUNT, "alice", 100),
            tx(2, "alice", "bob", 40),
        ]);

        assert_eq!(balance_of(&sheet, "alice"), Some(60));
        assert_eq!(balance_of(&sheet, "bob"), Some(40));
        assert_eq!(balance_of(&sheet, MINT_ACCOUNT), None);
        assert_eq!(sheet.rejected, 0);
    }

    #[test]
    fn replays_in_timestamp_order() {
        // The transfer is listed first but happens after the mint.
        let sheet = compute_balances(&[
            tx(5, "alice", "bob", 30),
            tx(1, MINT_ACCOUNT, "alice", 50),
        ]);

        assert_eq!(sheet.transactions[0].timestamp, 1);
        assert_eq!(balance_of(&sheet, "alice"), Some(20));
        assert_eq!(balance_of(&sheet, "bob"), Some(30));
    }

    #[test]
    fn insolvent_transfers_are_skipped() {
        let sheet = compute_balances(&[
            tx(1, MINT_ACCOUNT, "alice", 10),
            tx(2, "alice", "bob", 11),
            tx(3, "bob", "carol", 1),
        ]);

        assert_eq!(balance_of(&sheet, "alice"), Some(10));
        assert_eq!(balance_of(&sheet, "bob"), Some(0));
        assert_eq!(balance_of(&sheet, "carol"), Some(0));
        assert_eq!(sheet.rejected, 2);
    }

    #[test]
    fn accounts_listed_in_first_seen_order() {
        let sheet = compute_balances(&[
            tx(1, MINT_ACCOUNT, "dave", 5),
            tx(2, "carol", "bob", 0),
            tx(3, "dave", MINT_ACCOUNT, 5),
        ]);

        let names: Vec<_> = sheet.balances.iter().map(|b| b.username.as_str()).collect();
        assert_eq!(names, vec!["dave", "carol", "bob", MINT_ACCOUNT]);
    }

    #[test]
    fn equal_timestamps_keep_input_order() {
        let sheet = compute_balances(&[
            tx(1, MINT_ACCOUNT, "alice", 5),
            tx(1, "alice", "bob", 5),
        ]);
        assert_eq!(balance_of(&sheet, "bob"), Some(5));
    }
}
