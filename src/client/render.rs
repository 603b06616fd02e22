//! # Text Rendering
//!
//! Plain-text table, summary and notification output for the terminal.

use std::fmt::Write;

use crate::records::Student;

use super::notification::Notification;
use super::summary::Summary;

/// Reported while the list is being fetched
pub const LOADING_MESSAGE: &str = "Loading students...";

/// Shown in place of rows when there is nothing to list
pub const EMPTY_TABLE_MESSAGE: &str = "No students found.";

const EMPTY_TABLE_HINT: &str = "Try adding a student or check if the backend is running.";

const HEADERS: [&str; 6] = ["ID", "Name", "Age", "Grade", "Email", "Actions"];

/// Render the record table. Each row carries edit and delete actions keyed
/// by the record id.
pub fn render_table(students: &[Student]) -> String {
    let rows: Vec<[String; 6]> = students
        .iter()
        .map(|s| {
            [
                s.id.to_string(),
                s.name.clone(),
                s.age.to_string(),
                s.grade.clone(),
                s.email.clone(),
                format!("edit {} | delete {}", s.id, s.id),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("-+-"));

    if rows.is_empty() {
        let _ = writeln!(out, "{}", EMPTY_TABLE_MESSAGE);
        let _ = writeln!(out, "{}", EMPTY_TABLE_HINT);
        return out;
    }

    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths.iter())
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect();
    let _ = writeln!(out, "{}", padded.join(" | ").trim_end());
}

/// Render the summary cards on one line
pub fn render_summary(summary: &Summary) -> String {
    format!(
        "Total students: {}   Grade A: {}   Average age: {}",
        summary.total, summary.grade_a, summary.avg_age
    )
}

/// Render a notification with an error/success marker
pub fn render_notification(notification: &Notification) -> String {
    let marker = if notification.is_error() { "error" } else { "ok" };
    format!("[{}] {}", marker, notification.message)
}
