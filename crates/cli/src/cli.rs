// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::color::ColorMode;
use crate::defaults::SCAN_ROOTS;

/// Scan C sources for annotation comments (TODO, FIX, NOTE, ...) and list them
#[derive(Parser, Debug)]
#[command(name = "todos")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Directories to scan, in order [default: lib compiler lsp]
    #[arg(value_name = "ROOT")]
    pub roots: Vec<PathBuf>,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,

    /// Skip unreadable or non-UTF-8 files instead of aborting
    #[arg(long)]
    pub keep_going: bool,

    /// Print scan statistics to stderr
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    /// Scan roots, falling back to the conventional source directories.
    pub fn scan_roots(&self) -> Vec<PathBuf> {
        if self.roots.is_empty() {
            SCAN_ROOTS.iter().map(PathBuf::from).collect()
        } else {
            self.roots.clone()
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
