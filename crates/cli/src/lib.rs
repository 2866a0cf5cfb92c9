// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Annotation comment scanner.
//!
//! Walks a set of source roots, searches every C source and header for
//! annotation tags such as `// TODO:` or `/* NOTE */`, and prints a colored
//! listing of where they are.

pub mod cli;
pub mod color;
pub mod defaults;
pub mod error;
pub mod file_reader;
pub mod report;
pub mod scanner;
pub mod tags;
pub mod verbose;
pub mod walker;
