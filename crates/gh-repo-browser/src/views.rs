//! Table rendering
//!
//! Aligned plain-text tables for the `list` and `info` commands.

use crate::domain_models::Repository;
use std::io::{self, Write};

/// Descriptions longer than this are cut in table cells
pub const DESCRIPTION_MAX_CHARS: usize = 50;

const HEADERS: [&str; 5] = ["Name", "Description", "Language", "URL", "# of Open Issues"];
const COLUMN_PADDING: usize = 2;

/// Display form of an optional text field
///
/// Absent values render empty, double quotes become single quotes, and
/// `max_chars` (when non-zero) truncates the result.
pub fn display_text(value: Option<&str>, max_chars: usize) -> String {
    let Some(value) = value else {
        return String::new();
    };

    let replaced = value.replace('"', "'");
    if max_chars > 0 && replaced.chars().count() > max_chars {
        replaced.chars().take(max_chars).collect()
    } else {
        replaced
    }
}

fn row(repo: &Repository) -> [String; 5] {
    [
        repo.name.clone(),
        display_text(repo.description.as_deref(), DESCRIPTION_MAX_CHARS),
        display_text(repo.language.as_deref(), 0),
        repo.html_url.clone(),
        repo.open_issues_count.to_string(),
    ]
}

/// Render repositories as an aligned table followed by a blank line
pub fn render_table<'a, W, I>(out: &mut W, repositories: I) -> io::Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = &'a Repository>,
{
    let rows: Vec<[String; 5]> = repositories.into_iter().map(row).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let headers = HEADERS.map(str::to_string);
    write_row(out, &headers, &widths)?;
    for cells in &rows {
        write_row(out, cells, &widths)?;
    }
    writeln!(out)
}

fn write_row<W: Write + ?Sized>(
    out: &mut W,
    cells: &[String; 5],
    widths: &[usize; 5],
) -> io::Result<()> {
    let last = cells.len() - 1;
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        line.push_str(cell);
        if i < last {
            let pad = width - cell.chars().count() + COLUMN_PADDING;
            line.extend(std::iter::repeat(' ').take(pad));
        }
    }
    writeln!(out, "{}", line)
}
