// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_scan;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use todos::cli::Cli;
use todos::defaults::{LOG_DEFAULT, LOG_ENV};
use todos::error::ExitCode;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging();

    match cmd_scan::run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("todos: {:#}", e);
            ExitCode::Failure.into()
        }
    }
}

/// Log to stderr, filtered by `TODOS_LOG` (default: warnings only).
fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(LOG_DEFAULT));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}
