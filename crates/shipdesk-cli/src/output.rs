//! Formatted output helpers for CLI commands.
//!
//! Fixed-width tables for the shipment list and label/value blocks for a
//! single shipment. Everything returns a `String` so commands stay testable.

use std::fmt::Write as _;

use shipdesk_common::types::{ListColumn, Shipment, SortOrder};
use shipdesk_core::table::{TablePage, TableQuery};

/// Column widths of the list table, in display order.
const LIST_WIDTHS: [usize; 6] = [10, 28, 6, 24, 20, 10];

/// Shortens `value` to at most `width` characters, marking cuts with `…`.
#[must_use]
pub fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let kept: String = value.chars().take(width.saturating_sub(1)).collect();
    format!("{kept}…")
}

/// Formats one page of the shipment list as a fixed-width table.
#[must_use]
pub fn format_list(page: &TablePage<'_>, query: &TableQuery) -> String {
    let mut out = String::new();

    let header: Vec<String> = ListColumn::ALL
        .iter()
        .map(|column| {
            let label = column.label().to_uppercase();
            if *column == query.order_by() {
                let arrow = match query.order() {
                    SortOrder::Asc => "▲",
                    SortOrder::Desc => "▼",
                };
                format!("{label} {arrow}")
            } else {
                label
            }
        })
        .collect();
    push_row(&mut out, header.iter().map(String::as_str));

    for item in &page.rows {
        push_row(&mut out, ListColumn::ALL.iter().map(|column| column.value(item)));
    }

    let _ = writeln!(
        out,
        "{}  (page {}/{})",
        page.range_label(),
        page.page + 1,
        query.page_count(page.filtered_count)
    );
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>) {
    let line: Vec<String> = cells
        .zip(LIST_WIDTHS)
        .map(|(cell, width)| format!("{:<width$}", truncate(cell, width)))
        .collect();
    let _ = writeln!(out, "{}", line.join(" ").trim_end());
}

/// Formats every detail field of a shipment, then its cargo and services.
#[must_use]
pub fn format_detail(shipment: &Shipment) -> String {
    let mut out = String::new();
    for (label, value) in shipment.detail_fields() {
        let _ = writeln!(out, "{label:<12} {value}");
    }

    let _ = writeln!(out, "\nCARGO");
    if shipment.cargo.is_empty() {
        let _ = writeln!(out, "  -");
    }
    for item in &shipment.cargo {
        let _ = writeln!(
            out,
            "  {:<12} {:<32} {}",
            item.kind, item.description, item.volume
        );
    }

    let _ = writeln!(out, "\nSERVICES");
    if shipment.services.is_empty() {
        let _ = writeln!(out, "  -");
    }
    for service in &shipment.services {
        let _ = writeln!(
            out,
            "  {:<12} {}",
            service.kind,
            service.value.as_deref().unwrap_or("-")
        );
    }
    out
}
