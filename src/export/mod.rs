pub mod document;
pub(crate) mod fs_utils;
mod json_csv;
pub mod logic;
mod model;
pub mod range;

pub use document::{ExportDocument, FORMAT_VERSION};
pub use logic::{ExportLogic, ImportLogic};
pub use model::LoggedActionRow;

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
