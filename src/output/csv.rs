//! CSV output formatting for subnet calculations.

use super::terminal::format_field;
use super::view::SubnetView;

/// Column header, printed once before the rows.
pub fn csv_header() -> String {
    [
        format_field("cnt", 5),
        format_field("input", 20),
        format_field("network", 17),
        format_field("broadcast", 17),
        format_field("mask", 17),
        format_field("first_usable", 17),
        format_field("last_usable", 17),
        format_field("total_hosts", 15),
        format_field("usable_hosts", 15),
        format_field("error", 20),
    ]
    .join(",")
}

/// A single CSV row; an error view keeps its placeholder fields.
///
/// # Arguments
/// * `j` - 1-based row counter
/// * `input` - The text the row was calculated from
/// * `view` - The rendered result
pub fn csv_row(j: usize, input: &str, view: &SubnetView) -> String {
    [
        format_field(j, 5),
        format_field(escape_csv_field(input.trim()), 20),
        format_field(&view.network_address, 17),
        format_field(&view.broadcast_address, 17),
        format_field(&view.subnet_mask, 17),
        format_field(&view.first_usable, 17),
        format_field(&view.last_usable, 17),
        format_field(&view.total_hosts, 15),
        format_field(&view.usable_hosts, 15),
        format_field(view.error.as_deref().unwrap_or(""), 20),
    ]
    .join(",")
}

/// Double any quote so the field survives the surrounding quotes.
fn escape_csv_field(input: &str) -> String {
    input.replace('"', "\"\"")
}
