// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Console report output.
//!
//! One line per record:
//!
//! ```text
//! ESC[<color>m[<KEYWORD>] <path>:<line>ESC[0m <text>
//! ```
//!
//! The escapes are written only when the writer supports color; the rest of
//! the line is the same either way.


use termcolor::WriteColor;

use crate::color::{write_reset, write_sgr};
use crate::scanner::TagMatch;

/// Prints tag records.
pub struct Reporter;

impl Reporter {
    /// Write a single record line.
    pub fn write_match(&self, w: &mut dyn WriteColor, m: &TagMatch) -> std::io::Result<()> {
        let color = w.supports_color();
        if color {
            write_sgr(w, m.color)?;
        }
        write!(w, "[{}] {}:{}", m.keyword, m.path.display(), m.line)?;
        if color {
            write_reset(w)?;
        }
        writeln!(w, " {}", m.text)
    }

    /// Write every record, in order.
    pub fn write_all(&self, w: &mut dyn WriteColor, matches: &[TagMatch]) -> std::io::Result<()> {
        for m in matches {
            self.write_match(w, m)?;
        }
        w.flush()
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
