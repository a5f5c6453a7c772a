//! Progress and summary output.
//!
//! Every printer has a `_to` variant taking a writer so output can be
//! captured in tests.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;

use super::commands::extract::ExtractSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Print the header line for a scanned file.
pub fn print_scanned_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(writer, "=== {}", path.display());
}

/// Print a newly added key.
pub fn print_added_to<W: Write>(key: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "Added:".green(), key);
}

/// Print the instruction shown when the frontend directory is missing.
pub fn print_missing_frontend_to<W: Write>(frontend_root: &Path, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Please run locale-harvest from the project root (no '{}' directory found)",
        frontend_root.display()
    );
}

/// Print the end-of-run summary.
pub fn print_summary_to<W: Write>(summary: &ExtractSummary, writer: &mut W) {
    let store_name = summary
        .store_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| summary.store_path.display().to_string());

    let count = summary.added.len();
    if count == 0 {
        let _ = writeln!(writer, "No changes to {}", store_name);
        return;
    }

    let _ = writeln!(writer, "Total changes: {}", count);
    if summary.written {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Updated {}", summary.store_path.display()).green()
        );
    } else {
        let _ = writeln!(
            writer,
            "Dry run: {} was not written (run without {} to apply)",
            store_name,
            "--dry-run".cyan()
        );
    }
}

/// Print a verbose note to stderr.
pub fn print_note(message: &str) {
    print_note_to(message, &mut io::stderr().lock());
}

pub fn print_note_to<W: Write>(message: &str, writer: &mut W) {
    let _ = writeln!(writer, "{} {}", "note:".bold().yellow(), message);
}
