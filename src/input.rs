// src/input.rs
//! Transaction file reader
//!
//! Reads `created_at,sender,recipient,amount` lines into [`Transaction`]s.
//! Blank lines are ignored and an optional header line is dropped. Every
//! other line must parse, or the whole read fails with the offending line
//! number.

use crate::types::Transaction;
use crate::utils::error::MinerError;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads all transactions from a CSV file
///
/// # Arguments
/// * `path` - Path to the CSV file
/// * `has_header` - Whether the first non-blank line is a header
pub fn read_transactions(path: &Path, has_header: bool) -> Result<Vec<Transaction>, MinerError> {
    let file = File::open(path).map_err(|e| {
        MinerError::InputError(format!(
            "Failed to open transactions at {}: {}",
            path.display(),
            e
        ))
    })?;

    let transactions = parse_transactions(BufReader::new(file), has_header)?;
    log::info!(
        "Read {} transactions from {}",
        transactions.len(),
        path.display()
    );
    Ok(transactions)
}

/// Parses transactions from any buffered reader
pub fn parse_transactions<R: BufRead>(
    reader: R,
    has_header: bool,
) -> Result<Vec<Transaction>, MinerError> {
    let mut transactions = Vec::new();
    let mut header_pending = has_header;

    for (idx, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let line = String::from_utf8(raw).map_err(|_| MinerError::ParseError {
            line: idx + 1,
            reason: "invalid UTF-8".into(),
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if header_pending {
            header_pending = false;
            log::debug!("Skipping header line: {}", line);
            continue;
        }

        let tx = parse_line(line).map_err(|reason| MinerError::ParseError {
            line: idx + 1,
            reason,
        })?;
        transactions.push(tx);
    }

    Ok(transactions)
}

fn parse_line(line: &str) -> Result<Transaction, String> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    let [created_at, sender, recipient, amount] = fields.as_slice() else {
        return Err(format!("expected 4 fields, found {}", fields.len()));
    };

    let timestamp = created_at
        .parse::<i64>()
        .map_err(|e| format!("invalid created_at '{}': {}", created_at, e))?;
    let amount = amount
        .parse::<u64>()
        .map_err(|e| format!("invalid amount '{}': {}", amount, e))?;

    Transaction::new(timestamp, *sender, *recipient, amount).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str, has_header: bool) -> Result<Vec<Transaction>, MinerError> {
        parse_transactions(Cursor::new(text), has_header)
    }

    #[test]
    fn parses_rows_after_header() {
        let txs = parse(
            "created_at,sender,recipient,amount\n1,A,B,10\n2,B,C,5\n",
            true,
        )
        .unwrap();

        assert_eq!(
            txs,
            vec![
                Transaction::new(1, "A", "B", 10).unwrap(),
                Transaction::new(2, "B", "C", 5).unwrap(),
            ]
        );
    }

    #[test]
    fn headerless_input_keeps_first_row() {
        let txs = parse("1,A,B,10\n", false).unwrap();
        assert_eq!(txs.len(), 1);
    }

    #[test]
    fn tolerates_crlf_and_blank_lines() {
        let txs = parse("h\r\n\r\n1, A ,B,10\r\n\n", true).unwrap();
        assert_eq!(txs, vec![Transaction::new(1, "A", "B", 10).unwrap()]);
    }

    #[test]
    fn reports_line_of_bad_row() {
        let err = parse("created_at,sender,recipient,amount\n1,A,B,10\n2,B,C\n", true).unwrap_err();
        assert!(matches!(err, MinerError::ParseError { line: 3, .. }));
    }

    #[test]
    fn invalid_utf8_is_a_parse_error_on_its_line() {
        let input: &[u8] = b"created_at,sender,recipient,amount\n1,A,B,10\n2,Jos\xe9,C,5\n";
        let err = parse_transactions(Cursor::new(input), true).unwrap_err();
        match err {
            MinerError::ParseError { line, reason } => {
                assert_eq!(line, 3);
                assert_eq!(reason, "invalid UTF-8");
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn rejects_negative_amount() {
        let err = parse("1,A,B,-4\n", false).unwrap_err();
        match err {
            MinerError::ParseError { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("amount"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn header_only_is_empty() {
        assert!(parse("created_at,sender,recipient,amount\n", true).unwrap().is_empty());
        assert!(parse("", true).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = read_transactions(Path::new("/nonexistent/transactions.csv"), true).unwrap_err();
        assert!(matches!(err, MinerError::InputError(_)));
    }
}
