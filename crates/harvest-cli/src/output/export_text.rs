use serde_json::Value;

use super::format::key_value_rows;

pub fn render_export(data: &Value) -> String {
    let message = data
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("Export finished.");

    let mut lines = vec![message.to_string(), String::new()];

    let outputs = data
        .get("outputs")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if !outputs.is_empty() {
        lines.push("Files written:".to_string());
        let file_entries = outputs
            .iter()
            .map(|output| {
                let path = output.get("path").and_then(Value::as_str).unwrap_or("?");
                let rows = output.get("rows").and_then(Value::as_i64).unwrap_or(0);
                (path, format!("({rows} rows)"))
            })
            .collect::<Vec<(&str, String)>>();
        lines.extend(key_value_rows(&file_entries, 2));
        lines.push(String::new());
    }

    let summary = data.get("summary").cloned().unwrap_or_default();
    let scanned = summary
        .get("entries_scanned")
        .and_then(Value::as_i64)
        .unwrap_or(0);
    let skipped = summary
        .get("entries_skipped")
        .and_then(Value::as_i64)
        .unwrap_or(0);
    let extracted = summary
        .get("transactions_extracted")
        .and_then(Value::as_i64)
        .unwrap_or(0);
    lines.push("Summary:".to_string());
    lines.extend(key_value_rows(
        &[
            ("Entries scanned", scanned.to_string()),
            ("Entries skipped", skipped.to_string()),
            ("Transactions found", extracted.to_string()),
        ],
        2,
    ));

    let warnings = data
        .get("warnings")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default();
    if !warnings.is_empty() {
        lines.push(String::new());
        lines.push("Skipped entries (no transaction data found):".to_string());
        for warning in &warnings {
            let entry_index = warning
                .get("entry_index")
                .and_then(Value::as_i64)
                .unwrap_or(-1);
            let code = warning.get("code").and_then(Value::as_str).unwrap_or("?");
            lines.push(format!("  entry {entry_index}: {code}"));
        }
    }

    lines.join("\n")
}
