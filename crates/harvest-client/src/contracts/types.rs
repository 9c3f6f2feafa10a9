use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ExportData {
    pub year: i32,
    pub har_path: String,
    pub dry_run: bool,
    pub message: String,
    pub summary: ExportSummary,
    pub outputs: Vec<ExportFile>,
    pub warnings: Vec<ExportWarning>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportSummary {
    pub entries_scanned: i64,
    pub entries_with_transactions: i64,
    pub entries_skipped: i64,
    pub transactions_extracted: i64,
    pub transactions_exported: i64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportFile {
    pub schema: String,
    pub path: String,
    pub rows: i64,
}

/// One HAR entry the extractor could not pull transactions from.
/// These are diagnostics, never a reason to abort the run.
#[derive(Debug, Clone, Serialize)]
pub struct ExportWarning {
    pub entry_index: i64,
    pub code: String,
    pub detail: String,
}
