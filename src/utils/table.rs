//! Table rendering utilities for CLI outputs.

use crate::utils::colors::{CYAN, RESET};

/// Visible width of a cell, ignoring ANSI escape sequences.
fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut in_escape = false;
    for c in s.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, _) => len += 1,
        }
    }
    len
}

pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| visible_len(h)).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate().take(widths.len()) {
                widths[i] = widths[i].max(visible_len(cell));
            }
        }
        widths
    }

    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        // Header
        for (h, w) in self.headers.iter().zip(&widths) {
            out.push_str(&format!("{CYAN}{:<width$}{RESET}  ", h, width = *w));
        }
        out.push('\n');

        let total: usize = widths.iter().map(|w| w + 2).sum();
        out.push_str(&"-".repeat(total));
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                let pad = w.saturating_sub(visible_len(cell));
                out.push_str(cell);
                out.push_str(&" ".repeat(pad + 2));
            }
            out.push('\n');
        }

        out
    }
}
