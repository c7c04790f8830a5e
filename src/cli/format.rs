//! Output formatting for CLI display.

use std::fmt::Write;

use jiff::tz::TimeZone;

use wagmi::calendar;
use wagmi::model::{Application, Status};
use wagmi::query::{SortMode, StatusFilter};

const HEADERS: [&str; 6] = ["ID", "INTERNSHIP", "COMPANY", "STATUS", "ADDED", "OA DUE"];

/// Shown in place of the table whenever no rows are visible.
const EMPTY_LIST: &str = "No applications yet. Add your first one above.";

/// The `list` view: the table (or the empty message) and the row count.
pub(super) fn format_list(rows: &[&Application], tz: &TimeZone) -> String {
    let mut out = if rows.is_empty() {
        format!("{EMPTY_LIST}\n")
    } else {
        format_table(rows, tz)
    };
    out.push_str(&format_count(rows.len()));
    out.push('\n');
    out
}

/// The status filters and sort modes `list` accepts, one kind per line.
pub(super) fn format_options() -> String {
    let filters: Vec<String> = StatusFilter::options().map(|f| f.to_string()).collect();
    let sorts: Vec<&str> = SortMode::ALL.iter().map(|s| s.label()).collect();
    format!(
        "Status filters: {}\nSort modes: {}\n",
        filters.join(", "),
        sorts.join(", ")
    )
}

/// `N item(s)` line shown under the table.
fn format_count(count: usize) -> String {
    if count == 1 {
        "1 item".to_string()
    } else {
        format!("{count} items")
    }
}

/// Calendar date of an epoch-millisecond timestamp, or `?` if out of range.
pub(super) fn format_date(millis: i64, tz: &TimeZone) -> String {
    calendar::date_of_millis(millis, tz).map_or_else(|| "?".to_string(), |d| d.to_string())
}

/// The OA due date, shown only while the application is in OA.
fn format_due(app: &Application, tz: &TimeZone) -> String {
    match app.deadline {
        Some(ms) if app.status == Status::Oa => format_date(ms, tz),
        _ => String::new(),
    }
}

/// Render rows as a left-aligned, space-padded table with a header line.
fn format_table(rows: &[&Application], tz: &TimeZone) -> String {
    let cells: Vec<[String; 6]> = rows
        .iter()
        .map(|app| {
            [
                app.short_id(),
                app.role.clone(),
                app.company.clone(),
                app.status.to_string(),
                format_date(app.created_at, tz),
                format_due(app, tz),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_line(&mut out, &HEADERS, &widths);
    for row in &cells {
        push_line(&mut out, row, &widths);
    }
    out
}

fn push_line<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize]) {
    let mut line = String::new();
    for (cell, &width) in cells.iter().zip(widths) {
        let _ = write!(line, "{:<width$}  ", cell.as_ref());
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Every field of one application, one per line.
pub(super) fn format_details(app: &Application, tz: &TimeZone) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "id:       {}", app.id);
    let _ = writeln!(out, "role:     {}", app.role);
    let _ = writeln!(out, "company:  {}", app.company);
    let _ = writeln!(out, "status:   {}", app.status);
    let _ = writeln!(out, "added:    {}", format_date(app.created_at, tz));
    if let Some(ms) = app.deadline {
        let _ = writeln!(out, "OA due:   {}", format_date(ms, tz));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    use uuid::Uuid;

    fn app(role: &str, company: &str, status: Status, deadline: Option<i64>) -> Application {
        Application {
            id: Uuid::parse_str("3f2b8f0d-2a11-4c7a-9a57-0b5c1c1e8f4e").unwrap(),
            role: role.into(),
            company: company.into(),
            status,
            created_at: 1_717_200_000_000,
            deadline,
        }
    }

    #[test]
    fn count_pluralizes() {
        assert_eq!(format_count(0), "0 items");
        assert_eq!(format_count(1), "1 item");
        assert_eq!(format_count(2), "2 items");
    }

    #[test]
    fn date_in_zone() {
        assert_eq!(format_date(1_748_736_000_000, &TimeZone::UTC), "2025-06-01");
    }

    #[test]
    fn table_aligns_columns() {
        let a = app("SWE Intern", "Acme", Status::Applied, None);
        let b = app("Data", "Zeta Industries", Status::Oa, Some(1_748_736_000_000));

        let table = format_table(&[&a, &b], &TimeZone::UTC);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID"));
        let company_col = lines[0].find("COMPANY").unwrap();
        assert_eq!(lines[1].find("Acme"), Some(company_col));
        assert_eq!(lines[2].find("Zeta Industries"), Some(company_col));
        assert!(lines[1].starts_with("3f2b8f0d"));
        assert!(lines[2].ends_with("2025-06-01"));
        assert!(!lines[1].ends_with(' '));
    }

    #[test]
    fn due_date_hidden_outside_oa() {
        let stale = app("SWE Intern", "Acme", Status::Interviewing, Some(1_748_736_000_000));
        assert_eq!(format_due(&stale, &TimeZone::UTC), "");
    }

    #[test]
    fn empty_list_prompts_for_first_application() {
        assert_eq!(
            format_list(&[], &TimeZone::UTC),
            "No applications yet. Add your first one above.\n0 items\n"
        );
    }

    #[test]
    fn list_ends_with_count() {
        let a = app("SWE Intern", "Acme", Status::Applied, None);
        let b = app("Data", "Zeta", Status::Offer, None);

        let one = format_list(&[&a], &TimeZone::UTC);
        let two = format_list(&[&a, &b], &TimeZone::UTC);

        assert!(one.starts_with("ID"));
        assert_eq!(one.lines().last(), Some("1 item"));
        assert_eq!(two.lines().count(), 4);
        assert_eq!(two.lines().last(), Some("2 items"));
        assert!(!two.contains("No applications yet"));
    }

    #[test]
    fn options_list_filters_and_sorts() {
        let out = format_options();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(
            lines,
            [
                "Status filters: All, Applied, OA, OA Submitted, Interviewing, Offer, Rejected, Ghosted",
                "Sort modes: Newest, Oldest, Company, Status",
            ]
        );
    }

    #[test]
    fn details_include_deadline_when_set() {
        let with = app("SWE Intern", "Acme", Status::Oa, Some(1_748_736_000_000));
        let without = app("SWE Intern", "Acme", Status::Applied, None);

        assert!(format_details(&with, &TimeZone::UTC).contains("OA due:   2025-06-01"));
        assert!(!format_details(&without, &TimeZone::UTC).contains("OA due"));
    }
}
