//! Terminal rendering of the contact table and notifications.

use std::io::Write;

use client_core::ContactView;
use shared::domain::{ContactRow, FormMode, Toast, ToastLevel, TABLE_HEADERS};

pub struct TerminalView<W: Write, E: Write> {
    out: W,
    err: E,
    confirmation_open: bool,
}

impl<W: Write, E: Write> TerminalView<W, E> {
    pub fn new(out: W, err: E) -> Self {
        Self {
            out,
            err,
            confirmation_open: false,
        }
    }

    pub fn confirmation_open(&self) -> bool {
        self.confirmation_open
    }

    #[cfg(test)]
    pub fn into_parts(self) -> (W, E) {
        (self.out, self.err)
    }
}

pub fn format_table(rows: &[ContactRow]) -> String {
    let cells: Vec<[String; 5]> = rows.iter().map(ContactRow::cells).collect();
    let mut widths = TABLE_HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut table = String::new();
    let header: Vec<String> = TABLE_HEADERS.iter().map(|h| h.to_string()).collect();
    push_line(&mut table, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut table, &rule, &widths);
    for row in &cells {
        push_line(&mut table, row, &widths);
    }
    if cells.is_empty() {
        table.push_str("(no contacts)\n");
    }
    table
}

fn push_line(table: &mut String, cells: &[String], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    table.push_str(line.trim_end());
    table.push('\n');
}

impl<W: Write, E: Write> ContactView for TerminalView<W, E> {
    fn render(&mut self, rows: Vec<ContactRow>) {
        if let Err(err) = self.out.write_all(format_table(&rows).as_bytes()) {
            tracing::warn!("failed to write table: {err}");
        }
    }

    fn notify(&mut self, toast: Toast) {
        let written = match toast.level {
            ToastLevel::Success => writeln!(self.out, "[{}] {}", toast.title, toast.message),
            ToastLevel::Error => writeln!(self.err, "[{}] {}", toast.title, toast.message),
        };
        if let Err(err) = written {
            tracing::warn!("failed to write notification: {err}");
        }
    }

    fn set_confirmation_open(&mut self, open: bool) {
        self.confirmation_open = open;
    }

    fn set_form_mode(&mut self, mode: FormMode) {
        tracing::debug!(mode = mode.label(), "form mode ignored in terminal");
    }
}
