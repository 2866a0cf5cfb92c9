// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Candidate file discovery.
//!
//! Walks a scan root with the `ignore` crate's walker, with every filter
//! turned off: hidden files, `.gitignore` and friends are all visited, the
//! same as a bare recursive directory listing. Entries are sorted by file
//! name so repeated walks see files in the same order.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::defaults::SOURCE_SUFFIXES;
use crate::error::ScanError;

/// Configuration for the file walker.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// File name suffixes that make a file a candidate.
    pub suffixes: Vec<String>,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            suffixes: SOURCE_SUFFIXES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// Recursive walker yielding candidate files.
pub struct FileWalker {
    config: WalkerConfig,
}

impl FileWalker {
    pub fn new(config: WalkerConfig) -> Self {
        Self { config }
    }

    /// Collect every candidate file under `root`.
    ///
    /// A root that does not exist (or is not a directory) yields no files
    /// rather than an error.
    pub fn walk(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        if !root.is_dir() {
            tracing::debug!("scan root {} is not a directory, skipping", root.display());
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(root)
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|source| ScanError::Walk {
                root: root.to_path_buf(),
                source,
            })?;

            // Symlinks to files count as files, as in a plain directory listing.
            let is_file = entry
                .file_type()
                .is_some_and(|t| t.is_file() || (t.is_symlink() && entry.path().is_file()));
            if !is_file {
                continue;
            }

            if has_suffix(entry.path(), &self.config.suffixes) {
                files.push(entry.into_path());
            }
        }

        tracing::debug!("{}: {} candidate files", root.display(), files.len());
        Ok(files)
    }
}

/// Whether the file name of `path` ends with any of `suffixes`.
pub fn has_suffix(path: &Path, suffixes: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    suffixes.iter().any(|s| name.ends_with(s.as_str()))
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
