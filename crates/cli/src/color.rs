// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color output control.

use std::io::{self, Write};

use termcolor::ColorChoice;

/// Value of `--color`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color unless `NO_COLOR` is set to a non-empty value.
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the effective color choice.
///
/// `--no-color` wins over any `--color` value. `auto` does not look at `TERM`
/// or whether stdout is a terminal: only `NO_COLOR` (passed in as
/// `env_no_color`) turns it off.
pub fn resolve_color(mode: ColorMode, no_color: bool, env_no_color: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Auto if env_no_color => ColorChoice::Never,
        ColorMode::Auto => ColorChoice::AlwaysAnsi,
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
    }
}

/// Whether `NO_COLOR` is set to a non-empty value.
pub fn no_color_env() -> bool {
    std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty())
}

/// Write an SGR escape setting `code` as the current graphic rendition.
pub fn write_sgr<W: Write + ?Sized>(w: &mut W, code: u8) -> io::Result<()> {
    write!(w, "\x1b[{}m", code)
}

/// Write the SGR reset escape.
pub fn write_reset<W: Write + ?Sized>(w: &mut W) -> io::Result<()> {
    w.write_all(b"\x1b[0m")
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
