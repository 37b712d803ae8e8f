//! Plain text rendering and terminal messages.
//!
//! The text table is what lands in `.txt` exports. The `print_*` helpers
//! write styled status lines to stderr so stdout stays machine-readable.

use crate::scanner::{PortResult, ScanReport};
use console::style;
use std::fmt::Write;

const HEADER_PORT: &str = "Port";
const HEADER_STATUS: &str = "Status";

/// Render results as a two-column, left-aligned table.
pub fn render_txt(results: &[PortResult]) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{:<6} {:<6}", HEADER_PORT, HEADER_STATUS);
    for result in results {
        let _ = writeln!(out, "{:<6} {:<6}", result.port.as_u16(), result.open);
    }
    out
}

/// Print a scan header before scanning begins.
pub fn print_scan_header(address: &str, mode: &str, ports: usize) {
    eprintln!(
        "{} {} v{}",
        style("Starting").cyan(),
        style("portsweep").cyan().bold(),
        env!("CARGO_PKG_VERSION")
    );
    eprintln!("{} Mode: {}", style("•").dim(), style(mode).yellow());
    eprintln!("{} Target: {}", style("•").dim(), style(address).white().bold());
    eprintln!(
        "{} Scanning {} ports...",
        style("•").dim(),
        style(ports).white().bold()
    );
}

/// Print a one-line summary once the scan finishes.
pub fn print_summary(report: &ScanReport) {
    let open = report.open_ports().count();
    eprintln!(
        "{} {} of {} ports open in {:.2}s",
        style("•").dim(),
        style(open).green().bold(),
        report.results.len(),
        report.duration.as_secs_f64()
    );
    if report.cancelled {
        print_warning("scan was interrupted; results are partial");
    }
}

/// Print an error message.
pub fn print_error(msg: &str) {
    eprintln!("{} {}", style("Error:").red().bold(), msg);
}

/// Print a warning message.
pub fn print_warning(msg: &str) {
    eprintln!("{} {}", style("Warning:").yellow().bold(), msg);
}
