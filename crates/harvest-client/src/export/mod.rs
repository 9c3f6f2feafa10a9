pub(crate) mod extract;
pub(crate) mod filter;
pub(crate) mod har;
pub(crate) mod normalize;
pub(crate) mod schema;
pub(crate) mod write;

use std::path::Path;

use crate::ClientResult;
use crate::contracts::types::{ExportFile, ExportSummary, ExportWarning};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub(crate) enum TransactionType {
    Debit,
    Credit,
}

impl TransactionType {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::Debit => "debit",
            Self::Credit => "credit",
        }
    }
}

/// Flat, fully populated view of one source transaction. Every field
/// either output schema needs is present, possibly as an empty string.
/// The exported amount is always the magnitude; the sign survives only
/// through `transaction_type`.
#[derive(Debug, Clone)]
pub(crate) struct NormalizedTransaction {
    pub(crate) date: String,
    pub(crate) description: String,
    pub(crate) original_description: String,
    pub(crate) amount: f64,
    pub(crate) transaction_type: TransactionType,
    pub(crate) transaction_type_detail: String,
    pub(crate) category: String,
    pub(crate) account_name: String,
    pub(crate) account_provider_name: String,
    pub(crate) merchant: String,
    pub(crate) labels: String,
    pub(crate) notes: String,
}

#[derive(Debug, Clone)]
pub(crate) struct ExportExecutionResult {
    pub(crate) summary: ExportSummary,
    pub(crate) outputs: Vec<ExportFile>,
    pub(crate) warnings: Vec<ExportWarning>,
}

/// Runs the whole pipeline: load HAR, extract transaction pages,
/// normalize, keep the target year, render one CSV per export schema.
/// With `dry_run` the write stage is skipped and `outputs` stays empty.
pub(crate) fn execute(
    har_path: &Path,
    year: i32,
    out_dir: &Path,
    dry_run: bool,
) -> ClientResult<ExportExecutionResult> {
    let document = har::load_document(har_path)?;
    let extraction = extract::extract_transactions(&document);

    let mut normalized = Vec::with_capacity(extraction.transactions.len());
    for (index, record) in extraction.transactions.iter().enumerate() {
        normalized.push(normalize::normalize(record, index)?);
    }

    let transactions_extracted = normalized.len() as i64;
    let kept = filter::retain_year(normalized, year)?;
    let transactions_exported = kept.len() as i64;

    let mut outputs = Vec::new();
    if !dry_run {
        for export_schema in schema::EXPORT_SCHEMAS {
            outputs.push(write::write_csv(out_dir, export_schema, &kept, year)?);
        }
    }

    let warnings = extraction
        .skipped
        .iter()
        .map(|entry| ExportWarning {
            entry_index: entry.entry_index,
            code: entry.reason.code().to_string(),
            detail: entry.detail.clone(),
        })
        .collect::<Vec<ExportWarning>>();

    Ok(ExportExecutionResult {
        summary: ExportSummary {
            entries_scanned: extraction.entries_scanned,
            entries_with_transactions: extraction.entries_with_transactions,
            entries_skipped: extraction.skipped.len() as i64,
            transactions_extracted,
            transactions_exported,
        },
        outputs,
        warnings,
    })
}
