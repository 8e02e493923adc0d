//! Transaction history of a contract

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One transaction sent to a contract, as listed by the block explorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub block_number: u64,
    #[serde(rename = "timeStamp")]
    pub timestamp: u64,
    pub hash: String,
    pub from: String,
    pub to: String,
}

/// How much a contract is used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TransactionSummary {
    /// Number of transactions
    pub count: usize,

    /// Number of distinct senders
    pub unique: usize,
}

impl TransactionSummary {
    /// Summarize a transaction list
    ///
    /// Senders are compared as the explorer spells them.
    pub fn from_transactions(transactions: &[Transaction]) -> Self {
        let senders: HashSet<&str> = transactions.iter().map(|tx| tx.from.as_str()).collect();

        TransactionSummary {
            count: transactions.len(),
            unique: senders.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(from: &str, block_number: u64) -> Transaction {
        Transaction {
            block_number,
            timestamp: 1_700_000_000 + block_number,
            hash: format!("0x{block_number:064x}"),
            from: from.to_string(),
            to: "0x1111111111111111111111111111111111111111".to_string(),
        }
    }

    #[test]
    fn test_empty_history() {
        assert_eq!(TransactionSummary::from_transactions(&[]), TransactionSummary::default());
    }

    #[test]
    fn test_decodes_explorer_fields() {
        let raw = r#"{
            "blockNumber": 14923678,
            "timeStamp": 1654646411,
            "hash": "0xabc",
            "from": "0xaaa",
            "to": "0x1111111111111111111111111111111111111111"
        }"#;
        let tx: Transaction = serde_json::from_str(raw).unwrap();
        assert_eq!(tx.block_number, 14923678);
        assert_eq!(tx.timestamp, 1654646411);

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(json["blockNumber"], 14923678);
        assert_eq!(json["timeStamp"], 1654646411);
    }

    #[test]
    fn test_counts_distinct_senders() {
        let txs = vec![tx("0xaaa", 1), tx("0xbbb", 2), tx("0xaaa", 3), tx("0xccc", 4)];
        let summary = TransactionSummary::from_transactions(&txs);
        assert_eq!(summary.count, 4);
        assert_eq!(summary.unique, 3);
    }
}
