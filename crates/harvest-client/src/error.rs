use std::path::Path;

use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ClientError {
    pub code: String,
    pub message: String,
    pub recovery_steps: Vec<String>,
    pub data: Option<Value>,
}

impl ClientError {
    pub fn new(code: &str, message: &str, recovery_steps: Vec<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.to_string(),
            recovery_steps,
            data: None,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }

    pub fn invalid_argument(message: &str) -> Self {
        Self::invalid_argument_for_command(message, None)
    }

    pub fn invalid_argument_for_command(message: &str, command: Option<&str>) -> Self {
        let help_hint = match command {
            Some(cmd) => format!("Run `harvest {cmd} --help` for usage."),
            None => "Run `harvest --help` for usage.".to_string(),
        };
        let error = Self::new("invalid_argument", message, vec![help_hint]);
        if let Some(cmd) = command {
            return error.with_data(json!({
                "command_hint": cmd,
            }));
        }
        error
    }

    pub fn har_file_not_found(path: &Path) -> Self {
        let location = path.display().to_string();
        Self::new(
            "har_file_not_found",
            &format!("File `{location}` not found."),
            vec![
                "Check the path to the captured .har file.".to_string(),
                "Rerun `harvest export <har-path> <year>`.".to_string(),
            ],
        )
        .with_data(json!({
            "har_path": location,
        }))
    }

    pub fn har_unreadable(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "har_unreadable",
            &format!("Could not read HAR file `{location}`: {detail}"),
            vec![
                "Verify the file is readable by the current user.".to_string(),
                "Rerun `harvest export <har-path> <year>`.".to_string(),
            ],
        )
    }

    pub fn har_malformed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "har_malformed",
            &format!("HAR file `{location}` is not a valid HAR document: {detail}"),
            vec![
                "Re-export the capture from your browser's network tab (Save all as HAR)."
                    .to_string(),
                "Confirm the file is JSON with a top-level `log.entries` array.".to_string(),
            ],
        )
    }

    pub fn transaction_schema_mismatch(record_index: usize, detail: &str) -> Self {
        Self::new(
            "transaction_schema_mismatch",
            &format!(
                "Transaction record {record_index} does not match the expected shape: {detail}"
            ),
            vec![
                "Capture a fresh HAR from the transactions page and retry.".to_string(),
                "If the provider changed its response shape, this tool needs an update."
                    .to_string(),
            ],
        )
        .with_data(json!({
            "record_index": record_index,
        }))
    }

    pub fn date_parse_failed(record_index: usize, value: &str) -> Self {
        Self::new(
            "date_parse_failed",
            &format!("Transaction record {record_index} has an unparseable date `{value}`."),
            vec![
                "Dates must be YYYY-MM-DD or an RFC 3339 timestamp.".to_string(),
                "Capture a fresh HAR from the transactions page and retry.".to_string(),
            ],
        )
        .with_data(json!({
            "record_index": record_index,
            "date": value,
        }))
    }

    pub fn export_write_failed(path: &Path, detail: &str) -> Self {
        let location = path.display().to_string();
        Self::new(
            "export_write_failed",
            &format!("Could not write export file `{location}`: {detail}"),
            vec![format!(
                "Grant write access to `{location}` or pass a writable directory via --out-dir."
            )],
        )
    }

    pub fn internal_serialization(message: &str) -> Self {
        Self::new("internal_serialization_error", message, Vec::new())
    }
}

pub type ClientResult<T> = Result<T, ClientError>;
