//! Behavioral specs for the report transcript.
//!
//! Tests that todos:
//! - Prints records in keyword-pass order, not file or line order
//! - Wraps the location in SGR color escapes keyed to the keyword
//! - Drops the escapes when color is disabled

#![allow(clippy::unwrap_used, clippy::expect_used)]

use similar_asserts::assert_eq;

use crate::prelude::*;

const COLORED: &str = "\
\x1b[33m[TODO] lib/alpha.c:2\x1b[0m handle overflow
\x1b[33m[TODO] compiler/beta.h:4\x1b[0m split header
\x1b[33m[todo] lib/alpha.c:8\x1b[0m rename
\x1b[36m[OPTIMIZE] compiler/beta.h:1\x1b[0m inline this
\x1b[35m[UNIMPLEMENTED] compiler/beta.h:6\x1b[0m \n\
\x1b[31m[CRITICAL] compiler/beta.h:2\x1b[0m must hold lock
\x1b[91m[FIX] lib/alpha.c:7\x1b[0m the allocator leak */
\x1b[32m[TEMPORARY] compiler/beta.h:3\x1b[0m until v2
\x1b[37m[NOTE] lib/alpha.c:4\x1b[0m no saturation
\x1b[90m[FLIMSY] compiler/beta.h:5\x1b[0m depends on layout
";

const PLAIN: &str = "\
[TODO] lib/alpha.c:2 handle overflow
[TODO] compiler/beta.h:4 split header
[todo] lib/alpha.c:8 rename
[OPTIMIZE] compiler/beta.h:1 inline this
[UNIMPLEMENTED] compiler/beta.h:6 \n\
[CRITICAL] compiler/beta.h:2 must hold lock
[FIX] lib/alpha.c:7 the allocator leak */
[TEMPORARY] compiler/beta.h:3 until v2
[NOTE] lib/alpha.c:4 no saturation
[FLIMSY] compiler/beta.h:5 depends on layout
";

/// > The full transcript of a two-file tree lists every keyword pass in
/// > table order.
#[test]
#[cfg(unix)]
fn two_file_transcript_with_color() {
    let stdout = stdout_in(&fixture("two-files"), &["--color=always"]);
    assert_eq!(stdout, COLORED);
}

/// > --no-color prints the same lines without escapes.
#[test]
#[cfg(unix)]
fn two_file_transcript_without_color() {
    let stdout = stdout_in(&fixture("two-files"), &["--no-color"]);
    assert_eq!(stdout, PLAIN);
}

/// > --no-color wins over --color=always.
#[test]
#[cfg(unix)]
fn no_color_overrides_color_always() {
    let stdout = stdout_in(&fixture("two-files"), &["--color=always", "--no-color"]);
    assert_eq!(stdout, PLAIN);
}

/// > With no flags, output is colored even when TERM is unset.
#[test]
#[cfg(unix)]
fn default_invocation_is_colored_without_term() {
    todos_cmd()
        .current_dir(fixture("two-files"))
        .env_remove("TERM")
        .assert()
        .success()
        .stdout(COLORED);
}

/// > With no flags, output is colored in an ordinary terminal environment.
#[test]
#[cfg(unix)]
fn default_invocation_is_colored_with_term() {
    todos_cmd()
        .current_dir(fixture("two-files"))
        .env("TERM", "xterm")
        .assert()
        .success()
        .stdout(COLORED);
}

/// > With no flags, a single TODO is wrapped in its SGR color.
#[test]
#[cfg(unix)]
fn default_invocation_colors_single_record() {
    let tmp = tempfile::TempDir::new().unwrap();
    create_tree(tmp.path(), &[("lib/x.c", "// TODO: fix this\n")]);

    todos_cmd()
        .current_dir(tmp.path())
        .env_remove("TERM")
        .assert()
        .success()
        .stdout("\x1b[33m[TODO] lib/x.c:0\x1b[0m fix this\n");
}

/// > An empty NO_COLOR does not disable color.
#[test]
#[cfg(unix)]
fn empty_no_color_env_keeps_color() {
    todos_cmd()
        .current_dir(fixture("two-files"))
        .env("NO_COLOR", "")
        .assert()
        .success()
        .stdout(COLORED);
}

/// > NO_COLOR disables escapes in auto mode.
#[test]
fn no_color_env_disables_auto_color() {
    todos_cmd()
        .current_dir(fixture("two-files"))
        .env("NO_COLOR", "1")
        .env("TERM", "xterm-256color")
        .assert()
        .success()
        .stdout(predicates::str::contains("\x1b[").not());
}

/// > Positional roots replace the default roots, in the order given.
#[test]
#[cfg(unix)]
fn explicit_roots_change_scan_order() {
    let stdout = stdout_in(&fixture("two-files"), &["--no-color", "compiler", "lib"]);
    let todo_lines: Vec<&str> = stdout.lines().filter(|l| l.starts_with("[TODO]")).collect();
    assert_eq!(
        todo_lines,
        vec!["[TODO] compiler/beta.h:4 split header", "[TODO] lib/alpha.c:2 handle overflow"]
    );
}

/// > --verbose writes a summary to stderr, leaving stdout unchanged.
#[test]
#[cfg(unix)]
fn verbose_summary_goes_to_stderr() {
    todos_cmd()
        .args(["--no-color", "--verbose"])
        .current_dir(fixture("two-files"))
        .assert()
        .success()
        .stdout(PLAIN)
        .stderr(predicates::str::contains("passes: 9"))
        .stderr(predicates::str::contains("files scanned: 18"))
        .stderr(predicates::str::contains("matches: 10"));
}
