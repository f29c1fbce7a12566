//! Plain-text rendering of a user table view.

use tabula_lib::View;
use tabula_lib::model::Record;
use tabula_lib::page::PageEntry;
use tabula_lib::sample::User;
use tabula_lib::sort::SortDirection;

const COLUMN_GAP: &str = "  ";

/// Header label with a sort arrow when the column is the sort key.
fn header(view: &View<'_, User>, field: &str) -> String {
    let label = match field {
        "id" => "ID",
        "name" => "Name",
        "email" => "Email",
        "role" => "Role",
        "status" => "Status",
        other => other,
    };
    match &view.sort {
        Some(sort) if sort.field == field => {
            let arrow = match sort.direction {
                SortDirection::Ascending => '▲',
                SortDirection::Descending => '▼',
            };
            format!("{} {}", label, arrow)
        }
        _ => label.to_string(),
    }
}

/// Renders the page rows, the entry range label and the pagination bar.
pub fn render_table(view: &View<'_, User>) -> String {
    let headers: Vec<String> = User::FIELDS.iter().map(|f| header(view, f)).collect();
    let rows: Vec<Vec<String>> = view
        .page_records
        .iter()
        .map(|user| {
            User::FIELDS
                .iter()
                .map(|f| user.field_or_null(f).to_string())
                .collect()
        })
        .collect();

    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(h.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &headers, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);
    if rows.is_empty() {
        out.push_str("(no records)\n");
    }
    for row in &rows {
        push_line(&mut out, row, &widths);
    }

    out.push('\n');
    out.push_str(&view.entry_range_label());
    out.push('\n');
    out.push_str(&render_pagination(view));
    out.push('\n');
    out
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let pad = width.saturating_sub(cell.chars().count());
            format!("{}{}", cell, " ".repeat(pad))
        })
        .collect();
    out.push_str(line.join(COLUMN_GAP).trim_end());
    out.push('\n');
}

/// Renders the pagination bar, e.g. `‹ 1 … [3] … 5 ›`.
///
/// The current page is bracketed; a disabled arrow is drawn as a space.
pub fn render_pagination<R>(view: &View<'_, R>) -> String {
    let mut bar = String::new();
    bar.push(if view.has_previous() { '‹' } else { ' ' });
    for entry in &view.page_window {
        bar.push(' ');
        match entry {
            PageEntry::Page(n) if view.is_current(*n) => bar.push_str(&format!("[{}]", n)),
            entry => bar.push_str(&entry.to_string()),
        }
    }
    bar.push(' ');
    bar.push(if view.has_next() { '›' } else { ' ' });
    bar
}
