//! CLI output formatting.
//!
//! # Output Format
//!
//! ## Build
//!
//! ```text
//! Wrote 6 items to images.json.
//! ```
//!
//! ## Check
//!
//! ```text
//! Images
//! 001 ICON
//!     Source: images/ICON.PNG
//! 002 (___.gif)
//!     Source: images/___.gif
//! 003 My Icon File
//!     Source: images/icons/my_icon-file.png
//!
//! 3 items would be written to images.json
//! ```
//!
//! Records with an empty title show their filename in parentheses instead,
//! since the filename is then the only identity they have.
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>` or `String`)
//! for testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure and do no I/O.

use crate::pipeline::BuildSummary;
use crate::types::ImageRecord;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format a record line: titled records show the title, untitled show the
/// filename in parens.
fn record_line(index: usize, record: &ImageRecord) -> String {
    if record.title.is_empty() {
        let filename = record.src.rsplit('/').next().unwrap_or(&record.src);
        format!("{} ({})", format_index(index), filename)
    } else {
        format!("{} {}", format_index(index), record.title)
    }
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Success line for a completed build.
pub fn format_build_summary(summary: &BuildSummary) -> String {
    format!(
        "Wrote {} items to {}.",
        summary.count,
        file_label(&summary.output)
    )
}

pub fn print_build_summary(summary: &BuildSummary) {
    println!("{}", format_build_summary(summary));
}

/// Listing of every record a build would write, in manifest order.
pub fn format_check_output(records: &[ImageRecord], output: &Path) -> Vec<String> {
    let mut lines = vec!["Images".to_string()];
    for (i, record) in records.iter().enumerate() {
        lines.push(record_line(i + 1, record));
        lines.push(format!("{}Source: {}", indent(1), record.src));
    }
    lines.push(String::new());
    lines.push(format!(
        "{} items would be written to {}",
        records.len(),
        file_label(output)
    ));
    lines
}

pub fn print_check_output(records: &[ImageRecord], output: &Path) {
    for line in format_check_output(records, output) {
        println!("{}", line);
    }
}
