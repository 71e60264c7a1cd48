//! Monthly report export (PDF, CSV, JSON).

mod fs_utils;
mod model;
mod pdf;
pub mod report;

pub use model::SessionExport;
pub use report::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Common completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Pdf,
    Csv,
    Json,
}
