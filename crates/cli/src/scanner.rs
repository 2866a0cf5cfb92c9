// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tag scanning.
//!
//! Every tag gets its own full pass: the roots are re-walked and every
//! candidate file re-read once per tag. Results are concatenated in pass
//! order, so all `TODO` records come before all `todo` records, and so on.
//! Within a pass, records follow walk order and then line order.

use std::path::{Path, PathBuf};

use memchr::memmem;
use regex::Regex;

use crate::defaults::SCAN_ROOTS;
use crate::error::ScanError;
use crate::file_reader::FileContent;
use crate::tags::Tag;
use crate::walker::{FileWalker, WalkerConfig};

/// A single tag occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMatch {
    pub keyword: String,
    pub color: u8,
    pub path: PathBuf,
    /// Zero-based line index.
    pub line: usize,
    /// Rest of the line after the marker, keyword and optional colon.
    pub text: String,
}

/// Scanner options.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Roots to walk, in order.
    pub roots: Vec<PathBuf>,
    pub walker: WalkerConfig,
    /// Skip unreadable or non-UTF-8 files instead of aborting.
    pub keep_going: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            roots: SCAN_ROOTS.iter().map(PathBuf::from).collect(),
            walker: WalkerConfig::default(),
            keep_going: false,
        }
    }
}

/// Counters accumulated across all passes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanStats {
    pub passes: usize,
    /// Files read, counted once per pass.
    pub files_scanned: usize,
    /// Files skipped under `keep_going`, counted once per pass.
    pub files_skipped: usize,
    pub matches: usize,
}

/// Records from every pass, plus statistics.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub matches: Vec<TagMatch>,
    pub stats: ScanStats,
}

pub struct Scanner {
    options: ScanOptions,
    walker: FileWalker,
}

impl Scanner {
    pub fn new(options: ScanOptions) -> Self {
        let walker = FileWalker::new(options.walker.clone());
        Self { options, walker }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Run one pass per tag, in order, and concatenate the results.
    pub fn scan(&self, tags: &[Tag]) -> Result<ScanOutcome, ScanError> {
        let mut outcome = ScanOutcome::default();

        for tag in tags {
            let found = self.run_pass(tag, &mut outcome.stats)?;
            tracing::debug!("pass {}: {} matches", tag.keyword(), found.len());
            outcome.stats.passes += 1;
            outcome.stats.matches += found.len();
            outcome.matches.extend(found);
        }

        Ok(outcome)
    }

    /// Find every occurrence of one tag across all roots.
    pub fn find_tags(&self, tag: &Tag) -> Result<Vec<TagMatch>, ScanError> {
        self.run_pass(tag, &mut ScanStats::default())
    }

    fn run_pass(&self, tag: &Tag, stats: &mut ScanStats) -> Result<Vec<TagMatch>, ScanError> {
        let pattern = tag.pattern()?;
        let mut found = Vec::new();

        for root in &self.options.roots {
            for path in self.walker.walk(root)? {
                match scan_file(tag, &pattern, &path) {
                    Ok(matches) => {
                        stats.files_scanned += 1;
                        found.extend(matches);
                    }
                    Err(e) if self.options.keep_going && e.is_per_file() => {
                        tracing::warn!("skipping file: {}", e);
                        stats.files_skipped += 1;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        Ok(found)
    }
}

/// Read one file and search it for `tag`.
fn scan_file(tag: &Tag, pattern: &Regex, path: &Path) -> Result<Vec<TagMatch>, ScanError> {
    let content = FileContent::read(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = content
        .as_str()
        .ok_or_else(|| ScanError::Decode { path: path.to_path_buf() })?;

    Ok(find_in_content(tag, pattern, path, text))
}

/// Search `content` line by line, yielding at most one record per line.
pub fn find_in_content(tag: &Tag, pattern: &Regex, path: &Path, content: &str) -> Vec<TagMatch> {
    // Literal prefilter: most files never mention the keyword at all.
    if memmem::find(content.as_bytes(), tag.keyword().as_bytes()).is_none() {
        return Vec::new();
    }

    let mut matches = Vec::new();
    for (index, line) in text_lines(content).enumerate() {
        if let Some(caps) = pattern.captures(line) {
            matches.push(TagMatch {
                keyword: tag.keyword().to_string(),
                color: tag.color(),
                path: path.to_path_buf(),
                line: index,
                text: caps.get(2).map_or("", |m| m.as_str()).to_string(),
            });
        }
    }
    matches
}

/// Split `content` into lines on `\r\n`, `\r` or `\n`, without terminators.
///
/// A trailing terminator does not start an extra empty line.
pub fn text_lines(content: &str) -> TextLines<'_> {
    TextLines { rest: content }
}

/// Iterator returned by [`text_lines`].
pub struct TextLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for TextLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let rest = self.rest;
        if rest.is_empty() {
            return None;
        }

        let bytes = rest.as_bytes();
        let Some(end) = memchr::memchr2(b'\r', b'\n', bytes) else {
            self.rest = "";
            return Some(rest);
        };

        let crlf = bytes[end] == b'\r' && bytes.get(end + 1) == Some(&b'\n');
        self.rest = &rest[end + if crlf { 2 } else { 1 }..];
        Some(&rest[..end])
    }
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
