// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized compile-time defaults.
//!
//! There is no configuration file; everything not given on the command line
//! comes from here (and from [`crate::tags::default_tags`] for the tag table).

/// Default scan roots, relative to the working directory, in scan order:
/// library code, compiler code, language-server code.
pub const SCAN_ROOTS: &[&str] = &["lib", "compiler", "lsp"];

/// File name suffixes of candidate files (C sources and headers).
pub const SOURCE_SUFFIXES: &[&str] = &[".c", ".h"];

/// Files at or above this size are memory-mapped instead of read (64KB).
pub const MMAP_THRESHOLD: u64 = 64 * 1024;

/// Environment variable holding the log filter directive.
pub const LOG_ENV: &str = "TODOS_LOG";

/// Log filter used when [`LOG_ENV`] is unset.
pub const LOG_DEFAULT: &str = "warn";
