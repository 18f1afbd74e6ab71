//! Runs markup fixtures with TOML frontmatter against the generator.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use bem::{ScanDiagnostic, scan_class_names};
use serde::Deserialize;

use crate::settings::Settings;

#[derive(Debug, Deserialize)]
pub struct ExpectedWarning {
    /// Substring that must appear in the warning message.
    pub contains: String,

    /// If set, the warning's span must start on this 1-based source line.
    #[serde(default)]
    pub line: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct FixtureConfig {
    #[serde(default)]
    pub description: Option<String>,

    /// Generation settings, applied over the defaults.
    #[serde(flatten)]
    pub settings: Settings,

    /// Expected stylesheet text (trimmed comparison).
    #[serde(default)]
    pub expect_output: Option<String>,

    /// Expected class names, in extraction order.
    #[serde(default)]
    pub expect_class_names: Option<Vec<String>>,

    /// Expected scanner warnings. If present (even empty), count and content are checked.
    #[serde(default)]
    pub expect_warnings: Option<Vec<ExpectedWarning>>,
}

/// Split a fixture into its TOML config and markup body.
pub fn parse_fixture(content: &str) -> Result<(FixtureConfig, &str), String> {
    let content = content.trim_start_matches('\u{feff}');

    if !content.starts_with("---") {
        return Err("missing opening --- frontmatter delimiter".into());
    }

    let after_open = &content[3..];
    let after_open = after_open
        .strip_prefix('\n')
        .or_else(|| after_open.strip_prefix("\r\n"))
        .unwrap_or(after_open);

    let close_pos = after_open
        .find("\n---")
        .ok_or("missing closing --- frontmatter delimiter")?;

    let toml_str = after_open[..close_pos].trim_end_matches('\r');
    let rest = &after_open[close_pos + 4..];
    let markup = rest
        .strip_prefix("\r\n")
        .or_else(|| rest.strip_prefix('\n'))
        .unwrap_or(rest);

    let config: FixtureConfig =
        toml::from_str(toml_str).map_err(|e| format!("TOML parse error: {}", e))?;

    Ok((config, markup))
}

#[derive(Debug, PartialEq, Eq)]
pub enum TestOutcome {
    Pass,
    Fail(String),
}

pub struct TestResult {
    pub path: PathBuf,
    pub description: Option<String>,
    pub outcome: TestOutcome,
}

impl TestResult {
    fn label(&self) -> &str {
        self.description.as_deref().unwrap_or_else(|| {
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("?")
        })
    }
}

pub fn run_single_test(path: &Path) -> TestResult {
    let result = |description: Option<String>, outcome| TestResult {
        path: path.to_path_buf(),
        description,
        outcome,
    };

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => return result(None, TestOutcome::Fail(format!("cannot read file: {}", e))),
    };

    let (config, markup) = match parse_fixture(&content) {
        Ok(pair) => pair,
        Err(e) => {
            return result(None, TestOutcome::Fail(format!("frontmatter error: {}", e)));
        }
    };

    let description = config.description.clone();
    let outcome = match check_fixture(&config, markup) {
        None => TestOutcome::Pass,
        Some(reason) => TestOutcome::Fail(reason),
    };
    result(description, outcome)
}

/// Returns `Some(reason)` on the first unmet expectation.
fn check_fixture(config: &FixtureConfig, markup: &str) -> Option<String> {
    let scan = scan_class_names(markup, 0);
    if let Some(error) = scan.diagnostics.iter().find(|d| !d.is_warning()) {
        return Some(format!("unexpected scan error: {}", error.message));
    }

    if let Some(expected) = &config.expect_class_names {
        if &scan.class_names != expected {
            return Some(format!(
                "class name mismatch\n  expected: {:?}\n  actual:   {:?}",
                expected, scan.class_names
            ));
        }
    }

    if let Some(expected_output) = &config.expect_output {
        let generation = match config.settings.to_config() {
            Ok(generation) => generation,
            Err(e) => return Some(format!("invalid settings: {}", e)),
        };
        let actual = stylesheet::generate(&generation, &scan.class_names);
        let actual_trimmed = actual.trim();
        let expected_trimmed = expected_output.trim();
        if actual_trimmed != expected_trimmed {
            return Some(format!(
                "output mismatch\n  expected:\n{}\n  actual:\n{}",
                indent(expected_trimmed),
                indent(actual_trimmed)
            ));
        }
    }

    if let Some(expected_warnings) = &config.expect_warnings {
        return check_warnings(markup, &scan.diagnostics, expected_warnings);
    }

    None
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("    |{}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert a byte offset in `source` to a 1-based line number.
fn byte_offset_to_line(source: &str, offset: usize) -> usize {
    source[..offset.min(source.len())]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
        + 1
}

fn check_warnings(
    source: &str,
    diagnostics: &[ScanDiagnostic],
    expected: &[ExpectedWarning],
) -> Option<String> {
    let actual: Vec<&ScanDiagnostic> = diagnostics.iter().filter(|d| d.is_warning()).collect();

    if actual.len() != expected.len() {
        let actual_msgs: Vec<String> = actual
            .iter()
            .map(|w| format!("  - {}", w.message))
            .collect();
        return Some(format!(
            "expected {} warning(s), got {}\n  actual warnings:\n{}",
            expected.len(),
            actual.len(),
            if actual_msgs.is_empty() {
                "    (none)".to_string()
            } else {
                actual_msgs.join("\n")
            }
        ));
    }

    for (i, (actual, expected)) in actual.iter().zip(expected.iter()).enumerate() {
        if !actual.message.contains(&expected.contains) {
            return Some(format!(
                "warning[{}]: expected message containing \"{}\", got: {}",
                i, expected.contains, actual.message
            ));
        }

        if let Some(expected_line) = expected.line {
            let actual_line = byte_offset_to_line(source, actual.span.start);
            if actual_line != expected_line {
                return Some(format!(
                    "warning[{}]: expected on line {}, but span is on line {}",
                    i, expected_line, actual_line
                ));
            }
        }
    }

    None
}

fn is_fixture(name: &str) -> bool {
    name.contains(".test.")
}

/// Fixtures grouped by the sub-directory they sit in, relative to the root
/// they were discovered from. Fixtures directly in the root have category "".
#[derive(Debug, Default)]
pub struct FixtureSet {
    categories: BTreeMap<String, Vec<PathBuf>>,
}

impl FixtureSet {
    pub fn single(path: &Path) -> Self {
        FixtureSet {
            categories: BTreeMap::from([(String::new(), vec![path.to_path_buf()])]),
        }
    }

    pub fn discover(root: &Path) -> Self {
        let mut categories: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let Ok(entries) = std::fs::read_dir(&dir) else {
                continue;
            };
            for path in entries.flatten().map(|entry| entry.path()) {
                if path.is_dir() {
                    pending.push(path);
                } else if path
                    .file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(is_fixture)
                {
                    categories
                        .entry(category_of(&dir, root))
                        .or_default()
                        .push(path);
                }
            }
        }

        categories.values_mut().for_each(|files| files.sort());
        FixtureSet { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &[PathBuf])> {
        self.categories
            .iter()
            .map(|(name, files)| (name.as_str(), files.as_slice()))
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.keys().map(|c| display_category(c)).collect()
    }

    /// Keep the requested categories and everything nested under them.
    /// Returns the requests that matched nothing.
    pub fn retain_requested(&mut self, requested: &[String]) -> Vec<String> {
        if requested.is_empty() {
            return Vec::new();
        }

        let wanted: Vec<&str> = requested.iter().map(|r| r.trim_matches('/')).collect();
        let missing = wanted
            .iter()
            .filter(|w| !self.categories.keys().any(|c| in_category(c, w)))
            .map(|w| w.to_string())
            .collect();
        self.categories
            .retain(|c, _| wanted.iter().any(|w| in_category(c, w)));
        missing
    }
}

fn in_category(category: &str, wanted: &str) -> bool {
    category
        .strip_prefix(wanted)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

fn category_of(dir: &Path, root: &Path) -> String {
    dir.strip_prefix(root)
        .map(|p| p.to_string_lossy().replace('\\', "/"))
        .unwrap_or_default()
}

fn display_category(category: &str) -> &str {
    if category.is_empty() { "(root)" } else { category }
}

pub fn list_categories(path: &Path) {
    if path.is_file() {
        eprintln!("(single file, no categories)");
        return;
    }

    let fixtures = FixtureSet::discover(path);
    if fixtures.is_empty() {
        eprintln!("no fixtures found in {}", path.display());
        return;
    }

    eprintln!("available categories:");
    for (category, files) in fixtures.categories() {
        eprintln!("  {} ({} fixtures)", display_category(category), files.len());
    }
}

fn paint(text: &str, code: &str, no_color: bool) -> String {
    if no_color {
        text.to_string()
    } else {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    }
}

fn print_failures(failures: &[TestResult]) {
    eprintln!();
    eprintln!("failures:");
    for f in failures {
        eprintln!();
        eprintln!("  --- {} ---", f.path.display());
        if let TestOutcome::Fail(reason) = &f.outcome {
            for line in reason.lines() {
                eprintln!("  {}", line);
            }
        }
    }
}

/// Run every fixture under `path` (or a single file).
/// Returns exit code: 0 = all pass, 1 = any failure.
pub fn run_tests(path: &Path, no_color: bool, categories: &[String]) -> i32 {
    let fixtures = if path.is_file() {
        FixtureSet::single(path)
    } else {
        let mut fixtures = FixtureSet::discover(path);
        if fixtures.is_empty() {
            eprintln!("no fixtures found in {}", path.display());
            return 1;
        }
        let available = fixtures.category_names().join(", ");
        for missing in fixtures.retain_requested(categories) {
            eprintln!(
                "warning: category '{}' not found (available: {})",
                missing, available
            );
        }
        fixtures
    };

    if fixtures.is_empty() {
        eprintln!("no matching categories found");
        return 1;
    }

    let mut passed = 0usize;
    let mut failures: Vec<TestResult> = Vec::new();

    for (category, files) in fixtures.categories() {
        if !path.is_file() {
            eprintln!();
            eprintln!("{}", paint(display_category(category), "1", no_color));
        }

        for file in files {
            let result = run_single_test(file);
            match &result.outcome {
                TestOutcome::Pass => {
                    passed += 1;
                    eprintln!("  {}  {}", paint("PASS", "32", no_color), result.label());
                }
                TestOutcome::Fail(_) => {
                    eprintln!("  {}  {}", paint("FAIL", "31", no_color), result.label());
                    failures.push(result);
                }
            }
        }
    }

    if !failures.is_empty() {
        print_failures(&failures);
    }

    eprintln!();
    if failures.is_empty() {
        eprintln!(
            "test result: {}. {} passed, 0 failed",
            paint("ok", "32", no_color),
            passed
        );
        0
    } else {
        let failed = failures.len();
        eprintln!(
            "test result: {}. {} passed, {} failed (of {})",
            paint("FAILED", "31", no_color),
            passed,
            failed,
            passed + failed
        );
        1
    }
}
