// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Annotation tags and their report colors.
//!
//! The table is ordered: each tag gets its own keyword pass, and passes run
//! in table order, so the order here is the order of the final report.

use regex::Regex;

use crate::error::ScanError;

/// An annotation keyword paired with its SGR foreground color code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    keyword: String,
    color: u8,
}

impl Tag {
    pub fn new(keyword: impl Into<String>, color: u8) -> Self {
        Self { keyword: keyword.into(), color }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn color(&self) -> u8 {
        self.color
    }

    /// Compile the search pattern for this tag.
    ///
    /// Matches a marker (`//`, `*`, `@` or `;`), optional spaces, the keyword,
    /// an optional colon and optional spaces, then captures the rest of the
    /// line. The match is not anchored, so it may start anywhere in the line.
    pub fn pattern(&self) -> Result<Regex, ScanError> {
        let source = format!(r"(//|\*|@|;) *{}:? *(.*)", regex::escape(&self.keyword));
        Regex::new(&source).map_err(|source| ScanError::Pattern {
            keyword: self.keyword.clone(),
            source,
        })
    }
}

/// SGR codes used by the default table.
pub mod colors {
    pub const RED: u8 = 31;
    pub const GREEN: u8 = 32;
    pub const YELLOW: u8 = 33;
    pub const MAGENTA: u8 = 35;
    pub const CYAN: u8 = 36;
    pub const WHITE: u8 = 37;
    pub const BRIGHT_BLACK: u8 = 90;
    pub const BRIGHT_RED: u8 = 91;
}

/// The default tag table, in pass order.
///
/// `TODO` appears twice on purpose: the lowercase variant gets its own pass.
pub fn default_tags() -> Vec<Tag> {
    use colors::*;

    [
        ("TODO", YELLOW),
        ("todo", YELLOW),
        ("OPTIMIZE", CYAN),
        ("UNIMPLEMENTED", MAGENTA),
        ("CRITICAL", RED),
        ("FIX", BRIGHT_RED),
        ("TEMPORARY", GREEN),
        ("NOTE", WHITE),
        ("FLIMSY", BRIGHT_BLACK),
    ]
    .into_iter()
    .map(|(keyword, color)| Tag::new(keyword, color))
    .collect()
}

#[cfg(test)]
#[path = "tags_tests.rs"]
mod tests;
