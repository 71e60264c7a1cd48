use crate::cli::commands::{describe, open_service};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::date::today;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let service = open_service(cfg)?;
    let d = today();

    match service.session_for(d)? {
        Some(s) => println!("{}", describe(&s)),
        None => info(format!("No session recorded today ({}).", d)),
    }

    Ok(())
}
