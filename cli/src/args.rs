//! Command-line helpers shared by the binary: default-subcommand handling,
//! paired on/off flags and the `languages` listing.

use stylesheet::{CommentStyle, TargetLanguage};

use crate::destination::Target;

pub const SUBCOMMANDS: &[&str] = &["generate", "test", "languages", "help"];

/// Global switches that take no value.
const GLOBAL_FLAGS: &[&str] = &["--no-color", "-v", "--verbose"];

/// Global options that consume the following argument.
const GLOBAL_VALUE_OPTIONS: &[&str] = &["-c", "--config"];

/// Top-level flags clap answers itself.
const TOP_LEVEL_FLAGS: &[&str] = &["-h", "--help", "-V", "--version"];

/// `extract-css page.html` behaves like `extract-css generate page.html`.
///
/// Global options are skipped; `generate` goes in front of the first token
/// left over, flag or positional, unless it already names a subcommand.
pub fn inject_default_subcommand(mut args: Vec<String>) -> Vec<String> {
    let mut i = 1;
    while i < args.len() {
        let arg = args[i].as_str();
        if GLOBAL_FLAGS.contains(&arg) || arg.starts_with("--config=") {
            i += 1;
            continue;
        }
        if GLOBAL_VALUE_OPTIONS.contains(&arg) {
            i += 2;
            continue;
        }
        if !SUBCOMMANDS.contains(&arg) && !TOP_LEVEL_FLAGS.contains(&arg) {
            args.insert(i, "generate".to_string());
        }
        break;
    }
    args
}

/// Resolve a `--x` / `--no-x` pair into an override.
pub fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Ad-hoc `--classes` lists go to stdout unless a target was asked for.
pub fn effective_target(
    classes_given: bool,
    requested: Option<Target>,
    configured: Target,
) -> Target {
    match (classes_given, requested) {
        (_, Some(target)) => target,
        (true, None) => Target::Stdout,
        (false, None) => configured,
    }
}

/// One line per supported language, read from the dialect table.
pub fn languages_table() -> String {
    let mut lines = vec![format!(
        "{:<8} {:<8} {:<6} {:<8} COMMENTS",
        "ID", "NAME", "EXT", "BRACES"
    )];
    for language in TargetLanguage::ALL {
        let dialect = language.dialect();
        let comments = match dialect.comments {
            CommentStyle::Line => "// line",
            CommentStyle::Block => "/* block */",
        };
        lines.push(format!(
            "{:<8} {:<8} {:<6} {:<8} {}",
            dialect.id,
            dialect.name,
            dialect.extension,
            if dialect.braces { "yes" } else { "no" },
            comments,
        ));
    }
    lines.join("\n")
}
