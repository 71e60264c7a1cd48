use crate::cli::commands::{describe, open_service};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Manual registration or revision of a day.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date: date_str,
        start,
        end,
    } = cmd
    {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let service = open_service(cfg)?;
        let s = service.register_manual(d, start, end.as_deref())?;

        success(format!("Manual entry saved for {}.", d));
        println!("{}", describe(&s));
    }

    Ok(())
}
