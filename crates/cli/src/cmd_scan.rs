// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Scan command implementation.
//!
//! Runs every tag pass over the scan roots, then prints the collected
//! records. Nothing is printed if a pass fails.

use termcolor::StandardStream;

use todos::cli::Cli;
use todos::color::{no_color_env, resolve_color};
use todos::error::ExitCode;
use todos::report::Reporter;
use todos::scanner::{ScanOptions, Scanner};
use todos::tags::default_tags;
use todos::verbose::VerboseLogger;

/// Run the scan described by `cli`.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let scanner = Scanner::new(ScanOptions {
        roots: cli.scan_roots(),
        keep_going: cli.keep_going,
        ..Default::default()
    });

    let tags = default_tags();
    let outcome = scanner.scan(&tags)?;

    let choice = resolve_color(cli.color, cli.no_color, no_color_env());
    let mut stdout = StandardStream::stdout(choice);
    Reporter.write_all(&mut stdout, &outcome.matches)?;

    VerboseLogger::new(cli.verbose).summary(scanner.options(), &outcome.stats);

    Ok(ExitCode::Success)
}
