use std::path::{Path, PathBuf};

use crate::contracts::envelope::{SuccessEnvelope, success};
use crate::contracts::types::ExportData;
use crate::export;
use crate::ClientResult;

#[derive(Debug, Default)]
pub struct ExportRunOptions<'a> {
    pub har_path: String,
    pub year: i32,
    pub out_dir: Option<&'a Path>,
    pub dry_run: bool,
}

pub fn run(har_path: String, year: i32, out_dir: Option<String>, dry_run: bool) -> ClientResult<SuccessEnvelope> {
    let out_dir = out_dir.map(PathBuf::from);
    run_with_options(ExportRunOptions {
        har_path,
        year,
        out_dir: out_dir.as_deref(),
        dry_run,
    })
}

pub fn run_with_options(options: ExportRunOptions<'_>) -> ClientResult<SuccessEnvelope> {
    let har_path = PathBuf::from(&options.har_path);
    let out_dir = options
        .out_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));

    let execution = export::execute(&har_path, options.year, &out_dir, options.dry_run)?;

    let message = if options.dry_run {
        format!(
            "Dry run: {} transactions would be exported for {}. No files were written.",
            execution.summary.transactions_exported, options.year
        )
    } else {
        format!(
            "Exported {} transactions for {}.",
            execution.summary.transactions_exported, options.year
        )
    };

    let data = ExportData {
        year: options.year,
        har_path: options.har_path,
        dry_run: options.dry_run,
        message,
        summary: execution.summary,
        outputs: execution.outputs,
        warnings: execution.warnings,
    };

    success("export", data)
}
