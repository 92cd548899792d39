use crate::core::action_log::LogLogic;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::document::ExportDocument;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::LoggedActionRow;
use crate::export::range::parse_range;
use crate::models::AppState;
use chrono::NaiveDate;
use std::fs;
use std::path::Path;
use tracing::info;

pub struct ExportLogic;

impl ExportLogic {
    /// Write `state` to `path`.
    ///
    /// - `Json`: the full versioned document (range is not allowed)
    /// - `Csv`: logged actions, optionally limited to a period, oldest first
    ///
    /// Returns the number of logged actions written.
    pub fn export(
        state: &AppState,
        format: ExportFormat,
        path: &Path,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<usize> {
        let bounds: Option<(NaiveDate, NaiveDate)> = match range {
            None => None,
            Some(r) if r.eq_ignore_ascii_case("all") => None,
            Some(r) => Some(parse_range(r)?),
        };

        ensure_writable(path, force)?;

        let written = match format {
            ExportFormat::Json => {
                if bounds.is_some() {
                    return Err(AppError::Export(
                        "--range only applies to CSV exports; JSON always holds the full state"
                            .into(),
                    ));
                }
                let doc = ExportDocument::from_state(state);
                export_json(&doc, path)?;
                doc.logged_actions.len()
            }
            ExportFormat::Csv => {
                let (start, end) = match bounds {
                    Some((s, e)) => (Some(s), Some(e)),
                    None => (None, None),
                };
                let rows: Vec<LoggedActionRow> = LogLogic::between(state, start, end)
                    .into_iter()
                    .map(LoggedActionRow::from)
                    .collect();
                export_csv(&rows, path)?;
                rows.len()
            }
        };

        info!(format = format.as_str(), path = %path.display(), rows = written, "export written");
        Ok(written)
    }
}

pub struct ImportLogic;

impl ImportLogic {
    /// Read and validate an export document, returning the state it holds.
    pub fn read(path: &Path) -> AppResult<AppState> {
        let text = fs::read_to_string(path)
            .map_err(|e| AppError::Import(format!("cannot read {}: {e}", path.display())))?;
        let doc = ExportDocument::parse(&text)?;

        info!(
            path = %path.display(),
            exported_at = %doc.exported_at,
            actions = doc.logged_actions.len(),
            "import document accepted"
        );
        Ok(doc.into_state())
    }
}
