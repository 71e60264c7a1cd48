use crate::cli::commands::{describe, open_service, resolve_date};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::time::{format_time, now_hhmm};

/// `in` and `out`: live clock actions on a day's session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (date, at, clocking_in) = match cmd {
        Commands::In { date, at } => (date, at, true),
        Commands::Out { date, at } => (date, at, false),
        _ => return Ok(()),
    };

    let d = resolve_date(date.as_deref())?;
    let time = at.clone().unwrap_or_else(|| format_time(&now_hhmm()));

    let service = open_service(cfg)?;

    if clocking_in {
        let s = service.clock_in(d, &time)?;
        success(format!("Clocked in at {}.", time));
        println!("{}", describe(&s));
    } else {
        let s = service.clock_out(d, &time)?;
        success(format!("Clocked out at {}.", time));
        println!("{}", describe(&s));
    }

    Ok(())
}
