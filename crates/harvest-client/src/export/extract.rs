use serde_json::Value;

use crate::export::har::HarDocument;

/// JSON pointer into the GraphQL response body where the transaction
/// page lives. Every transactions-hub response uses this exact path.
const TRANSACTIONS_POINTER: &str = "/data/prime/transactionsHub/transactionPage/transactions";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum SkipReason {
    NoResponseBody,
    BodyNotJson,
    NoTransactionPath,
}

impl SkipReason {
    pub(crate) fn code(self) -> &'static str {
        match self {
            Self::NoResponseBody => "no_response_body",
            Self::BodyNotJson => "body_not_json",
            Self::NoTransactionPath => "no_transaction_path",
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct SkippedEntry {
    pub(crate) entry_index: i64,
    pub(crate) reason: SkipReason,
    pub(crate) detail: String,
}

#[derive(Debug, Clone)]
pub(crate) struct Extraction {
    pub(crate) transactions: Vec<Value>,
    pub(crate) skipped: Vec<SkippedEntry>,
    pub(crate) entries_scanned: i64,
    pub(crate) entries_with_transactions: i64,
}

/// Walks every captured entry in order and concatenates the transaction
/// arrays found in well-formed GraphQL bodies. Entries without a usable
/// body are recorded and skipped; one bad entry never aborts the run.
pub(crate) fn extract_transactions(document: &HarDocument) -> Extraction {
    let mut transactions = Vec::new();
    let mut skipped = Vec::new();
    let mut entries_with_transactions = 0_i64;

    for (index, entry) in document.log.entries.iter().enumerate() {
        let entry_index = index as i64;

        let Some(body) = entry.body_text() else {
            skipped.push(SkippedEntry {
                entry_index,
                reason: SkipReason::NoResponseBody,
                detail: "entry has no response body text".to_string(),
            });
            continue;
        };

        let parsed = match serde_json::from_str::<Value>(body) {
            Ok(value) => value,
            Err(error) => {
                skipped.push(SkippedEntry {
                    entry_index,
                    reason: SkipReason::BodyNotJson,
                    detail: error.to_string(),
                });
                continue;
            }
        };

        let Some(page) = parsed.pointer(TRANSACTIONS_POINTER).and_then(Value::as_array) else {
            skipped.push(SkippedEntry {
                entry_index,
                reason: SkipReason::NoTransactionPath,
                detail: format!("no array at `{TRANSACTIONS_POINTER}`"),
            });
            continue;
        };

        entries_with_transactions += 1;
        transactions.extend(page.iter().cloned());
    }

    Extraction {
        transactions,
        skipped,
        entries_scanned: document.log.entries.len() as i64,
        entries_with_transactions,
    }
}
