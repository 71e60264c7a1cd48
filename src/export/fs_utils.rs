use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use crate::ui::prompt::confirm;
use std::path::Path;

/// Fails unless `path` is free, `force` is set, or the user agrees to
/// overwrite it.
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if force || !path.exists() {
        return Ok(());
    }

    let existing = format!("'{}' already exists.", path.display());
    if confirm(&existing, "Overwrite?")? {
        info("Existing file will be overwritten.");
        return Ok(());
    }

    Err(AppError::Export(
        "export cancelled: existing file not overwritten".into(),
    ))
}
