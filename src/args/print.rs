//! Headless table printing (`--print`): one page of a table as plain text.

use unicode_width::UnicodeWidthStr;

use crate::args::Args;
use crate::error::{DashError, Result};
use crate::logic::DateRange;
use crate::logic::pagination::PageNav;
use crate::sources::Dataset;
use crate::state::{Page, PageTable, SortSpec, TableOps, Tabular};
use crate::theme::Settings;
use crate::util::{parse_date, truncate_to_width};

/// Gap between printed columns.
const COLUMN_GAP: &str = "  ";

/// What: Render the page requested by `--print` as text.
///
/// Inputs:
/// - `args`: Parsed arguments (`print` must be set)
/// - `settings`: Effective settings (page size)
/// - `data`: Loaded records
///
/// Output:
/// - Header line, one line per row, then the range label and page counter
///
/// Details:
/// - Filters are applied in the same order as the interactive view: search,
///   status, date range, sort, then pagination.
/// - `DashError::InvalidField` for an unknown page, status, sort or date.
pub fn render_print(args: &Args, settings: &Settings, data: Dataset) -> Result<String> {
    let raw = args.print.as_deref().unwrap_or_default();
    let page = Page::from_config_key(raw)
        .ok_or_else(|| DashError::invalid("--print", format!("unknown page `{raw}`")))?;
    tracing::info!(page = ?page, "printing table");
    let per_page = settings.items_per_page;
    match page {
        Page::Users => render_table(PageTable::new(data.users, per_page), args),
        Page::Collections => render_table(PageTable::new(data.collections, per_page), args),
        Page::Reviews => render_table(PageTable::new(data.reviews, per_page), args),
        Page::Transactions => render_table(PageTable::new(data.transactions, per_page), args),
    }
}

/// Apply the filter flags to `table` and format its current page.
fn render_table<R: Tabular>(mut table: PageTable<R>, args: &Args) -> Result<String> {
    apply_filters(&mut table, args)?;
    let snap = table.snapshot();

    let widths: Vec<usize> = snap
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            snap.rows
                .iter()
                .map(|r| r.cells.get(i).map_or(0, |c| c.width()))
                .chain(std::iter::once(col.header.width()))
                .max()
                .unwrap_or(0)
                .min(usize::from(col.width).max(col.header.width()))
        })
        .collect();

    let mut out = String::new();
    let header: Vec<&str> = snap.columns.iter().map(|c| c.header).collect();
    push_line(&mut out, header.iter().copied(), &widths);
    if snap.rows.is_empty() {
        out.push_str("No records found\n");
    }
    for row in &snap.rows {
        push_line(&mut out, row.cells.iter().map(String::as_str), &widths);
    }
    out.push('\n');
    out.push_str(&snap.page.label());
    out.push_str(&format!(
        "  |  Page {} of {}\n",
        snap.page.current_page, snap.page.total_pages
    ));
    Ok(out)
}

/// What: Translate `--search/--status/--rating/--from/--to/--sort/--page` into view state.
///
/// Inputs:
/// - `table`: Freshly built table
/// - `args`: Parsed arguments
///
/// Output:
/// - `Ok(())`; `DashError::InvalidField` on a value the table cannot use
fn apply_filters<R: Tabular>(table: &mut PageTable<R>, args: &Args) -> Result<()> {
    let config = R::config();
    if let Some(q) = &args.search {
        table.view_mut().set_query(q.clone());
    }
    if let Some(status) = &args.status {
        apply_facet(table, "--status", "status", status)?;
    }
    if let Some(rating) = &args.rating {
        apply_facet(table, "--rating", "rating", rating)?;
    }
    match (&args.from, &args.to) {
        (Some(from), Some(to)) => {
            let from = parse_date(from)
                .ok_or_else(|| DashError::invalid("--from", format!("not a date: {from}")))?;
            let to = parse_date(to)
                .ok_or_else(|| DashError::invalid("--to", format!("not a date: {to}")))?;
            table.view_mut().set_date_range(Some(DateRange::new(from, to)));
        }
        (None, None) => {}
        _ => {
            return Err(DashError::invalid(
                "--from/--to",
                "both ends of the date range are required",
            ));
        }
    }
    if let Some(sort) = &args.sort {
        let spec = SortSpec::parse(sort)
            .ok_or_else(|| DashError::invalid("--sort", format!("cannot parse `{sort}`")))?;
        let known = config.columns.iter().any(|c| c.key == spec.key)
            || config.sort_presets.iter().any(|p| p.key == spec.key);
        if !known {
            return Err(DashError::invalid(
                "--sort",
                format!("unknown key `{}` for {}", spec.key, config.noun),
            ));
        }
        table.view_mut().set_sort(Some(spec));
    }
    if let Some(n) = args.page {
        table.navigate(PageNav::Goto(n));
    }
    Ok(())
}

/// What: Set the facet on `field` from a flag value.
///
/// Inputs:
/// - `table`: Table being printed
/// - `flag`: Flag name for error messages
/// - `field`: Facet field key
/// - `raw`: Value given on the command line (case-insensitive)
///
/// Output:
/// - `Ok(())`; `DashError::InvalidField` when the table has no such facet or
///   the value is not one of its values
fn apply_facet<R: Tabular>(
    table: &mut PageTable<R>,
    flag: &str,
    field: &str,
    raw: &str,
) -> Result<()> {
    let config = R::config();
    let facet = config.facet_for(field).ok_or_else(|| {
        DashError::invalid(flag, format!("{} have no {field} filter", config.noun))
    })?;
    let value = facet
        .values
        .iter()
        .find(|v| v.eq_ignore_ascii_case(raw))
        .ok_or_else(|| {
            DashError::invalid(flag, format!("expected one of: {}", facet.values.join(", ")))
        })?;
    table
        .view_mut()
        .set_facet_filter(facet, Some((*value).to_string()));
    Ok(())
}

/// Append one padded line; the last column is not padded.
fn push_line<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let mut parts = Vec::with_capacity(widths.len());
    for (cell, &w) in cells.zip(widths) {
        let text = truncate_to_width(cell, w);
        let pad = w.saturating_sub(text.width());
        parts.push(format!("{text}{}", " ".repeat(pad)));
    }
    out.push_str(parts.join(COLUMN_GAP).trim_end());
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::fixtures::demo_dataset;
    use clap::Parser;

    fn print(argv: &[&str]) -> Result<String> {
        let mut full = vec!["dashview"];
        full.extend_from_slice(argv);
        let args = Args::parse_from(full);
        render_print(&args, &Settings::default(), demo_dataset())
    }

    #[test]
    /// What: Default print of the users table
    ///
    /// - Input: `--print users` with default page size
    /// - Output: Header row, ten rows and the "Showing 1-10 of 27" label
    fn prints_first_page_with_label() {
        let out = print(&["--print", "users"]).expect("print");
        assert!(out.contains("Showing 1-10 of 27"));
        assert!(out.contains("Page 1 of 3"));
        assert!(out.lines().next().is_some_and(|l| l.contains("Name")));
    }

    #[test]
    /// What: Filters narrow the printed set; an empty result prints the placeholder
    ///
    /// - Input: status filter on transactions, then a search with no matches
    /// - Output: Only Failed rows; then "No records found" and "Showing 1-0 of 0"
    fn filters_apply_before_pagination() {
        let out = print(&["--print", "transactions", "--status", "failed"]).expect("print");
        let body: Vec<&str> = out.lines().skip(1).take_while(|l| !l.is_empty()).collect();
        assert!(!body.is_empty());
        assert!(body.iter().all(|l| l.contains("Failed")));

        let out = print(&["--print", "users", "--search", "zzzz-no-match"]).expect("print");
        assert!(out.contains("No records found"));
        assert!(out.contains("Showing 1-0 of 0"));
    }

    #[test]
    /// What: Bad flag values are reported, not ignored
    ///
    /// - Input: unknown page, unknown status, unknown sort key
    /// - Output: `InvalidField` errors
    fn rejects_unknown_values() {
        assert!(matches!(
            print(&["--print", "orders"]),
            Err(DashError::InvalidField { .. })
        ));
        assert!(matches!(
            print(&["--print", "users", "--status", "archived"]),
            Err(DashError::InvalidField { .. })
        ));
        assert!(matches!(
            print(&["--print", "users", "--sort", "shoe_size:desc"]),
            Err(DashError::InvalidField { .. })
        ));
    }

    #[test]
    /// What: Rating and status facets combine on reviews
    ///
    /// - Input: `--print reviews --rating 5`, then with `--status published`;
    ///   `--rating` on users
    /// - Output: Only five-star rows, then five-star published rows; users rejected
    fn rating_facet_on_reviews() {
        let out = print(&["--print", "reviews", "--rating", "5"]).expect("print");
        assert!(out.contains("Showing 1-4 of 4"));
        let body: Vec<&str> = out.lines().skip(1).take_while(|l| !l.is_empty()).collect();
        assert!(body.iter().all(|l| l.contains("★★★★★")));

        let out = print(&["--print", "reviews", "--rating", "5", "--status", "published"])
            .expect("print");
        assert!(out.contains("Showing 1-2 of 2"));

        assert!(matches!(
            print(&["--print", "users", "--rating", "5"]),
            Err(DashError::InvalidField { .. })
        ));
    }

    #[test]
    /// What: Out-of-range page is clamped to the last page
    ///
    /// - Input: `--print users --page 99`
    /// - Output: "Page 3 of 3"
    fn page_is_clamped() {
        let out = print(&["--print", "users", "--page", "99"]).expect("print");
        assert!(out.contains("Page 3 of 3"));
        assert!(out.contains("Showing 21-27 of 27"));
    }
}
