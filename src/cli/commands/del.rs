use crate::cli::commands::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirm;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Del { date: raw, yes } = cmd else {
        return Ok(());
    };

    let day = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.clone()))?;

    if !*yes
        && !confirm(
            &format!("The session of {day} will be removed permanently."),
            "Delete it?",
        )?
    {
        info("Operation cancelled.");
        return Ok(());
    }

    open_service(cfg)?.delete(day)?;
    success(format!("Session of {day} has been deleted."));
    Ok(())
}
