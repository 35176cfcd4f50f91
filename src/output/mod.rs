//! Output formatting for subnet calculations.
//!
//! This module handles presenting a [`SubnetInfo`]:
//! - [`view`] - Renderer independent display strings, and the error reset
//! - [`terminal`] - Terminal output with colors
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON output

mod csv;
mod json;
mod terminal;
mod view;

pub use csv::{csv_header, csv_row};
pub use json::{json_line, JsonRecord};
pub use terminal::{format_field, render_text};
pub use view::{format_binary, group_thousands, SubnetView, PLACEHOLDER};

use crate::config::{Config, OutputFormat};
use crate::models::{FormatError, SubnetInfo};
use std::error::Error;

/// Render one calculation in the configured format.
///
/// `j` is the 1-based position of the input, used by the CSV row counter.
pub fn render(
    j: usize,
    input: &str,
    result: &Result<SubnetInfo, FormatError>,
    config: &Config,
) -> Result<String, Box<dyn Error>> {
    let view = match result {
        Ok(info) => SubnetView::new(info, config.separator),
        Err(e) => SubnetView::placeholder(&e.to_string()),
    };
    let rendered = match config.format {
        OutputFormat::Text => render_text(input, &view),
        OutputFormat::Csv => csv_row(j, input, &view),
        OutputFormat::Json => json_line(input, result)?,
    };
    Ok(rendered)
}
