//! Terminal output utilities.
//!
//! Renders a [`SubnetView`] as a coloured report. Colour is switched on or
//! off globally through `colored::control`.

use super::view::SubnetView;
use crate::models::MAX_LENGTH;
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
///
/// # Returns
/// A quoted, right-aligned string
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let value_str = value.to_string();
    let quoted = format!("\"{value_str}\"");
    let quoted_len = quoted.len();

    if quoted_len >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Render the full report for one input.
pub fn render_text(input: &str, view: &SubnetView) -> String {
    let mut out = String::new();
    out.push_str(&format!("{} {}\n", "Input:".bold(), input.trim()));

    if let Some(error) = &view.error {
        out.push_str(&format!("{} {}\n", "Error:".on_red(), error.red()));
    }

    let rows = [
        ("Network Address", &view.network_address),
        ("Broadcast Address", &view.broadcast_address),
        ("First Usable", &view.first_usable),
        ("Last Usable", &view.last_usable),
        ("Subnet Mask", &view.subnet_mask),
        ("Wildcard Mask", &view.wildcard_mask),
        ("Total Hosts", &view.total_hosts),
        ("Usable Hosts", &view.usable_hosts),
    ];
    for (label, value) in rows {
        out.push_str(&format!("  {label:<18} {}\n", value.cyan()));
    }

    out.push_str(&format!("{}\n", "Binary:".bold()));
    out.push_str(&format!("  {:<18} {}\n", "IP Address", view.ip_binary));
    out.push_str(&format!("  {:<18} {}\n", "Subnet Mask", view.mask_binary));
    out.push_str(&format!("  {:<18} {}\n", "Network", view.network_binary));

    out.push_str(&format!("{}\n", "Bits:".bold()));
    out.push_str(&format!("  {}\n", bit_bar(view)));
    out.push_str(&format!(
        "  Network Portion ({} bits, {:.1}%)  Host Portion ({} bits, {:.1}%)\n",
        view.network_bits, view.network_percent, view.host_bits, view.host_percent
    ));
    if let Some(label) = &view.network_bar_label {
        out.push_str(&format!("  {}", label.green()));
    }
    if let Some(label) = &view.host_bar_label {
        out.push_str(&format!("  {}", label.blue()));
    }
    if view.network_bar_label.is_some() || view.host_bar_label.is_some() {
        out.push('\n');
    }

    out
}

/// One column per address bit: network bits, then host bits.
///
/// An error view has no bits and renders an empty bar.
fn bit_bar(view: &SubnetView) -> String {
    if view.error.is_some() {
        return format!("[{}]", " ".repeat(MAX_LENGTH as usize));
    }
    let network = "#".repeat(view.network_bits as usize);
    let host = ".".repeat(view.host_bits as usize);
    format!("[{}{}]", network.green(), host.blue())
}
