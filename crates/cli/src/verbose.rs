// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Verbose scan summary.
//!
//! Writes scan statistics to stderr after the report. Enabled with
//! `--verbose`; independent of the `TODOS_LOG` tracing filter.

use std::io::Write;

use crate::scanner::{ScanOptions, ScanStats};

/// Writes the summary when enabled, otherwise does nothing.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Print the summary section to stderr.
    pub fn summary(&self, options: &ScanOptions, stats: &ScanStats) {
        if self.enabled {
            // stderr write failures are not worth failing the scan over
            let _ = write_summary(&mut std::io::stderr().lock(), options, stats);
        }
    }
}

/// Render the summary section.
pub fn write_summary(
    w: &mut dyn Write,
    options: &ScanOptions,
    stats: &ScanStats,
) -> std::io::Result<()> {
    let roots: Vec<String> = options.roots.iter().map(|r| r.display().to_string()).collect();

    writeln!(w, "\nScan:")?;
    writeln!(w, "  roots: {}", roots.join(", "))?;
    writeln!(w, "  passes: {}", stats.passes)?;
    writeln!(w, "  files scanned: {}", stats.files_scanned)?;
    if stats.files_skipped > 0 {
        writeln!(w, "  files skipped: {}", stats.files_skipped)?;
    }
    writeln!(w, "  matches: {}", stats.matches)
}

#[cfg(test)]
#[path = "verbose_tests.rs"]
mod tests;
