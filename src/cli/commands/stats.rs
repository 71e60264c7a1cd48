use crate::cli::commands::{open_service, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::date::month_title;
use crate::utils::formatting::{hours2readable, percent};
use crate::utils::validation::is_valid_month;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats { month } = cmd {
        let month = resolve_month(month.as_deref());
        if !is_valid_month(&month) {
            return Err(AppError::InvalidMonth(month));
        }

        let service = open_service(cfg)?;
        let report = service.month_report(&month)?;
        let summary = &report.summary;
        let st = &summary.statistics;

        header(format!("Statistics for {}", month_title(&month)));
        println!("{CYAN}• Total worked:{RESET}     {}", hours2readable(st.total_hours));
        println!(
            "{CYAN}• Average per day:{RESET}  {}",
            hours2readable(st.average_hours_per_day)
        );
        println!("{CYAN}• Days recorded:{RESET}    {}", st.total_days);
        println!("{CYAN}• Complete:{RESET}         {}", st.complete_days);
        println!("{CYAN}• Incomplete:{RESET}       {}", st.incomplete_days);
        println!("{CYAN}• Working days:{RESET}     {}", summary.working_days);
        println!(
            "{CYAN}• Completion rate:{RESET}  {}",
            percent(summary.completion_rate)
        );
    }
    Ok(())
}
