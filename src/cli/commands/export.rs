use crate::cli::commands::{open_service, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::validation::is_valid_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let month = resolve_month(month.as_deref());
        if !is_valid_month(&month) {
            return Err(AppError::InvalidMonth(month));
        }

        let service = open_service(cfg)?;
        ExportLogic::export(&service, *format, file, &month, *force)?;
    }
    Ok(())
}
