use crate::cli::commands::{open_service, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryQuery;
use crate::errors::AppResult;
use crate::models::stats::HistoryPage;
use crate::ui::messages::{header, info};
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::date::{month_title, weekday_short};
use crate::utils::formatting::worked_or_dash;
use crate::utils::table::Table;
use crate::utils::time::format_optional_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        month,
        page,
        per_page,
    } = cmd
    {
        let month = resolve_month(month.as_deref());
        let query = HistoryQuery::new(&month, *page, per_page.unwrap_or(cfg.page_size))?;

        let service = open_service(cfg)?;
        let result = service.month_page(query)?;

        header(month_title(&month));

        if result.items.is_empty() {
            info(format!("No sessions for {} (page {}).", month, result.page));
            return Ok(());
        }

        print!("{}", render_page(&result));
        println!(
            "Page {}/{} · {} session(s)",
            result.page, result.total_pages, result.total
        );
    }
    Ok(())
}

fn render_page(page: &HistoryPage) -> String {
    let mut table = Table::new(&["Date", "Day", "In", "Out", "Worked", "Status", ""]);

    for s in &page.items {
        table.add_row(vec![
            s.date_str(),
            weekday_short(&s.date),
            colorize_optional(&format_optional_time(s.start_time.as_ref())),
            colorize_optional(&format_optional_time(s.end_time.as_ref())),
            colorize_optional(&worked_or_dash(s.worked_time_real)),
            colorize_status(s.status),
            if s.manual_edit { "manual" } else { "" }.to_string(),
        ]);
    }

    table.render()
}
