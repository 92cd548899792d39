use crate::errors::{AppError, AppResult};
use crate::export::document::ExportDocument;
use crate::export::model::LoggedActionRow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Full-state JSON document, pretty-printed.
pub(crate) fn export_json(doc: &ExportDocument, path: &Path) -> AppResult<()> {
    let json_data = doc.to_json()?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

/// History CSV (header row comes from serde).
pub(crate) fn export_csv(rows: &[LoggedActionRow], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in rows {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;
    Ok(())
}
