use crate::core::service::WorkSessionService;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::ensure_writable;
use crate::export::model::{SessionExport, get_headers, sessions_to_table, summary_lines};
use crate::export::pdf::PdfReport;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::stats::MonthlyReport;
use crate::ui::messages::{info, warning};
use crate::utils::date::month_title;
use crate::utils::path::expand_tilde;
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// High-level export of a month's report.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        service: &WorkSessionService,
        format: ExportFormat,
        file: &str,
        month: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(&path, force)?;

        let report = service.month_report(month)?;

        if report.sessions.is_empty() {
            warning(format!("No sessions recorded in {}.", month_title(month)));
        }

        match format {
            ExportFormat::Pdf => export_pdf(&report, &path)?,
            ExportFormat::Csv => export_csv(&report, &path)?,
            ExportFormat::Json => export_json(&report, &path)?,
        }

        Ok(())
    }
}

pub fn build_pdf_title(month: &str) -> String {
    format!("Work sessions for {}", month_title(month))
}

fn export_rows(report: &MonthlyReport) -> Vec<SessionExport> {
    report.sessions.iter().map(SessionExport::from).collect()
}

/// PDF with the monthly summary on top of the session table.
pub fn export_pdf(report: &MonthlyReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let rows = sessions_to_table(&export_rows(report));
    let mut pdf = PdfReport::new();
    pdf.write_report(
        &build_pdf_title(&report.summary.month),
        &summary_lines(&report.summary),
        &get_headers(),
        &rows,
    );

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}

/// CSV, one row per session (header included thanks to serde).
pub fn export_csv(report: &MonthlyReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in export_rows(report) {
        wtr.serialize(&item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    month: &'a str,
    start_date: String,
    end_date: String,
    summary: &'a crate::models::stats::MonthlySummary,
    sessions: &'a [crate::models::session::WorkSession],
}

/// JSON pretty-printed: range, summary and the full session records.
pub fn export_json(report: &MonthlyReport, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let doc = JsonReport {
        month: &report.summary.month,
        start_date: report.range.start_date.to_string(),
        end_date: report.range.end_date.to_string(),
        summary: &report.summary,
        sessions: &report.sessions,
    };

    let json_data = serde_json::to_string_pretty(&doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}
