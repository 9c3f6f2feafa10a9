use std::path::{Path, PathBuf};

use crate::contracts::types::ExportFile;
use crate::export::NormalizedTransaction;
use crate::export::schema::ExportSchema;
use crate::{ClientError, ClientResult};

/// Renders one schema's view of the filtered rows into
/// `<out_dir>/<prefix>_<year>.csv`: header of display names, one row
/// per transaction, no index column.
pub(crate) fn write_csv(
    out_dir: &Path,
    schema: &ExportSchema,
    rows: &[NormalizedTransaction],
    year: i32,
) -> ClientResult<ExportFile> {
    let path: PathBuf = out_dir.join(schema.file_name(year));

    let mut writer = csv::Writer::from_path(&path)
        .map_err(|error| ClientError::export_write_failed(&path, &error.to_string()))?;

    let header = schema
        .columns
        .iter()
        .map(|column| column.display_name())
        .collect::<Vec<String>>();
    writer
        .write_record(&header)
        .map_err(|error| ClientError::export_write_failed(&path, &error.to_string()))?;

    for row in rows {
        let record = schema
            .columns
            .iter()
            .map(|column| column.value(row))
            .collect::<Vec<String>>();
        writer
            .write_record(&record)
            .map_err(|error| ClientError::export_write_failed(&path, &error.to_string()))?;
    }

    writer
        .flush()
        .map_err(|error| ClientError::export_write_failed(&path, &error.to_string()))?;

    Ok(ExportFile {
        schema: schema.name.to_string(),
        path: path.display().to_string(),
        rows: rows.len() as i64,
    })
}
