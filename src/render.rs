//! Text and JSON rendering of schedule reports.
//!
//! The text layout has three parts: a title banner, the Gantt chart (process
//! ids in 8-wide cells above the start tick of each interval) and the timing
//! table with averages and throughput in the footer.
//!
//! ```text
//! ----------------------------------------------
//!             First-come, first-serve
//! ----------------------------------------------
//! Gantt schedule
//! |   1   |   2   |   3   |
//! 0       24      27      30
//! ```

use std::io::{self, Write};

use crate::models::ScheduleReport;

const GANTT_CELL: usize = 8;
const HEADERS: [&str; 7] = ["ID", "Priority", "Burst", "Arrival", "Wait", "Turnaround", "Exit"];

/// Title banner: a rule twice the title width above and below.
pub fn render_title(title: &str) -> String {
    let width = title.chars().count();
    let rule = "-".repeat(width * 2);
    format!("{rule}\n{} {title}\n{rule}\n", " ".repeat(width / 2))
}

/// Gantt chart for a report.
pub fn render_gantt(report: &ScheduleReport) -> String {
    let mut out = String::from("Gantt schedule\n");
    if report.intervals.is_empty() {
        out.push_str("(no data)\n\n");
        return out;
    }

    out.push('|');
    for interval in &report.intervals {
        let pid = interval.process_id.to_string();
        let padding = " ".repeat(GANTT_CELL.saturating_sub(pid.len()) / 2);
        out.push_str(&format!("{padding}{pid}{padding}|"));
    }
    out.push('\n');

    let ticks: Vec<String> = report.intervals.iter().map(|i| i.start.to_string()).collect();
    out.push_str(&ticks.join("\t"));
    if let Some(last) = report.intervals.last() {
        out.push_str(&format!("\t{}", last.stop));
    }
    out.push_str("\n\n");
    out
}

/// Timing table with averages in the footer.
pub fn render_table(report: &ScheduleReport) -> String {
    let body: Vec<Vec<String>> = report
        .rows
        .iter()
        .map(|r| {
            [r.id, r.priority, r.burst, r.arrival, r.wait, r.turnaround, r.completion]
                .iter()
                .map(i64::to_string)
                .collect()
        })
        .collect();

    let footer: Vec<Vec<String>> = match &report.averages {
        Some(avg) => vec![
            footer_row("Average", "Average", "Throughput"),
            footer_row(
                &format!("{:.2}", avg.wait),
                &format!("{:.2}", avg.turnaround),
                &format!("{:.2}/t", avg.throughput),
            ),
        ],
        None => vec![footer_row("no data", "no data", "no data")],
    };

    let headers: Vec<String> = HEADERS.iter().map(|h| h.to_uppercase()).collect();
    let mut widths: Vec<usize> = headers.iter().map(String::len).collect();
    for row in body.iter().chain(&footer) {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let rule = table_rule(&widths);
    let mut out = String::from("Schedule table\n");
    out.push_str(&rule);
    out.push_str(&table_line(&headers, &widths));
    out.push_str(&rule);
    for row in &body {
        out.push_str(&table_line(row, &widths));
    }
    out.push_str(&rule);
    for row in &footer {
        out.push_str(&table_line(row, &widths));
    }
    out.push_str(&rule);
    out
}

/// Full text rendering of one report.
pub fn render_report(report: &ScheduleReport) -> String {
    let mut out = render_title(&report.title);
    out.push_str(&render_gantt(report));
    out.push_str(&render_table(report));
    out
}

/// Writes the text rendering of each report to `w`.
pub fn write_reports<W: Write>(w: &mut W, reports: &[ScheduleReport]) -> io::Result<()> {
    for report in reports {
        writeln!(w, "{}", render_report(report))?;
    }
    Ok(())
}

/// Pretty-printed JSON array of reports.
pub fn render_json(reports: &[ScheduleReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}

fn footer_row(wait: &str, turnaround: &str, throughput: &str) -> Vec<String> {
    let mut row = vec![String::new(); 4];
    row.extend([wait, turnaround, throughput].map(String::from));
    row
}

fn table_rule(widths: &[usize]) -> String {
    let cells: Vec<String> = widths.iter().map(|w| "-".repeat(w + 2)).collect();
    format!("+{}+\n", cells.join("+"))
}

fn table_line(cells: &[String], widths: &[usize]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(c, &w)| format!(" {c:>w$} "))
        .collect();
    format!("|{}|\n", cells.join("|"))
}
