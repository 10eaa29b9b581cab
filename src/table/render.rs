//! Plain-text rendering of the two tables

use std::fmt::Write;

use crate::models::{GroupCount, YearSummary};
use crate::table::page::Page;
use crate::table::sort::{GroupColumn, YearColumn};

/// Title of the year summary table
pub const SUMMARY_TITLE: &str = "Job Titles";

/// Title of the drill-down table for a year
#[must_use]
pub fn drill_down_title(year: i32) -> String {
    format!("Job Titles in {year}")
}

/// Render the year summary table
#[must_use]
pub fn render_year_summaries(rows: &[YearSummary]) -> String {
    let headers = [
        YearColumn::Year.header(),
        YearColumn::TotalJobs.header(),
        YearColumn::AverageSalary.header(),
    ];
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            vec![
                row.year.to_string(),
                row.count.to_string(),
                row.average.to_string(),
            ]
        })
        .collect();
    render_table(SUMMARY_TITLE, &headers, &cells)
}

/// Render one page of the drill-down table
#[must_use]
pub fn render_group_counts(year: i32, page: &Page<GroupCount>) -> String {
    let headers = [GroupColumn::JobTitle.header(), GroupColumn::NumberOfJobs.header()];
    let cells: Vec<Vec<String>> = page
        .rows
        .iter()
        .map(|row| vec![row.category.clone(), row.count.to_string()])
        .collect();

    let mut out = render_table(&drill_down_title(year), &headers, &cells);
    let _ = writeln!(
        out,
        "Page {} of {} ({} job titles)",
        page.index + 1,
        page.total_pages,
        page.total_rows
    );
    out
}

fn render_table(title: &str, headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let _ = writeln!(out, "{title}");
    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    write_row(&mut out, &header_cells, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(&mut out, &rule, &widths);
    for row in rows {
        write_row(&mut out, row, &widths);
    }
    out
}

fn write_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join(" | ");
    let _ = writeln!(out, "{}", line.trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_year_summaries() {
        let text = render_year_summaries(&[YearSummary {
            year: 2023,
            count: 3,
            average: 117,
        }]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Job Titles");
        assert_eq!(lines[1], "Year | Total Jobs | Avg Salary (in USD)");
        assert_eq!(lines[3], "2023 | 3          | 117");
    }
}
