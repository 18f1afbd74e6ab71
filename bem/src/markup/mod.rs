//! Class-attribute scanning for HTML and JSX-like markup.
//!
//! This is deliberately not a markup parser: it looks for `class=` and
//! `className=` attributes and splits their literal values on whitespace.

mod diagnostic;

use indexmap::IndexSet;
use tracing::debug;

pub use diagnostic::ScanDiagnostic;

const ATTRIBUTE_NAMES: [&str; 2] = ["className", "class"];

/// Class names found in a markup source, with anything worth reporting.
#[derive(Debug, Clone, Default)]
pub struct ScanOutput {
    /// Unique class names in first-seen order. Never contains blank names.
    pub class_names: Vec<String>,
    pub diagnostics: Vec<ScanDiagnostic>,
}

impl ScanOutput {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| !d.is_warning())
    }
}

/// Collect the class names referenced by `class` and `className` attributes.
pub fn scan_class_names(source: &str, file_id: usize) -> ScanOutput {
    let mut scanner = Scanner::new(source, file_id);
    scanner.run();
    debug!(
        class_names = scanner.names.len(),
        diagnostics = scanner.diagnostics.len(),
        "scanned markup"
    );
    ScanOutput {
        class_names: scanner.names.into_iter().collect(),
        diagnostics: scanner.diagnostics,
    }
}

struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    file_id: usize,
    pos: usize,
    names: IndexSet<String>,
    diagnostics: Vec<ScanDiagnostic>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str, file_id: usize) -> Self {
        Scanner {
            source,
            bytes: source.as_bytes(),
            file_id,
            pos: 0,
            names: IndexSet::new(),
            diagnostics: Vec::new(),
        }
    }

    fn run(&mut self) {
        while let Some(offset) = self.source[self.pos..].find("class") {
            let start = self.pos + offset;
            match self.attribute_value_start(start) {
                Some(value_start) => {
                    if !self.read_value(value_start) {
                        return;
                    }
                }
                None => self.pos = start + "class".len(),
            }
        }
    }

    /// If an attribute name starts at `start`, return the position of its
    /// value (just past `=` and any whitespace).
    fn attribute_value_start(&self, start: usize) -> Option<usize> {
        if start == 0 || !self.bytes[start - 1].is_ascii_whitespace() {
            return None;
        }
        let name = ATTRIBUTE_NAMES
            .iter()
            .find(|name| self.source[start..].starts_with(*name))?;
        let name_end = start + name.len();
        if self.bytes.get(name_end).is_some_and(|&b| is_name_byte(b)) {
            return None;
        }

        let eq = self.skip_whitespace(name_end);
        if self.bytes.get(eq) != Some(&b'=') {
            return None;
        }
        Some(self.skip_whitespace(eq + 1))
    }

    /// Read the value at `start`. Returns false when scanning cannot continue.
    fn read_value(&mut self, start: usize) -> bool {
        match self.bytes.get(start) {
            Some(&quote @ (b'"' | b'\'')) => self.read_quoted(start, quote),
            Some(b'{') => self.skip_expression(start),
            Some(_) => {
                self.read_unquoted(start);
                true
            }
            None => {
                self.pos = start;
                false
            }
        }
    }

    fn read_quoted(&mut self, start: usize, quote: u8) -> bool {
        let body_start = start + 1;
        let Some(len) = self.bytes[body_start..].iter().position(|&b| b == quote) else {
            self.diagnostics.push(
                ScanDiagnostic::error(
                    "unterminated class attribute value",
                    start..self.source.len(),
                    self.file_id,
                )
                .with_note(format!("expected a closing {}", quote as char)),
            );
            self.pos = self.source.len();
            return false;
        };
        let body_end = body_start + len;
        let source = self.source;
        self.add_names(&source[body_start..body_end]);
        self.pos = body_end + 1;
        true
    }

    fn read_unquoted(&mut self, start: usize) {
        let mut end = start;
        while let Some(&b) = self.bytes.get(end) {
            if b.is_ascii_whitespace() || b == b'>' {
                break;
            }
            if b == b'/' && self.bytes.get(end + 1) == Some(&b'>') {
                break;
            }
            end += 1;
        }
        let source = self.source;
        self.add_names(&source[start..end]);
        self.pos = end.max(start + 1).min(self.source.len());
    }

    /// Skip a `{...}` expression container, which can only be resolved at
    /// runtime.
    fn skip_expression(&mut self, start: usize) -> bool {
        let mut depth = 0usize;
        let mut quote: Option<u8> = None;
        let mut escaped = false;
        let mut end = None;

        for (i, &b) in self.bytes[start..].iter().enumerate() {
            match quote {
                Some(_) if escaped => escaped = false,
                Some(_) if b == b'\\' => escaped = true,
                Some(q) if b == q => quote = None,
                Some(_) => {}
                None => match b {
                    b'"' | b'\'' | b'`' => quote = Some(b),
                    b'{' => depth += 1,
                    b'}' => {
                        depth -= 1;
                        if depth == 0 {
                            end = Some(start + i + 1);
                            break;
                        }
                    }
                    _ => {}
                },
            }
        }

        let span_end = end.unwrap_or(self.source.len());
        self.diagnostics.push(
            ScanDiagnostic::warning("dynamic class expression skipped", start..span_end, self.file_id)
                .with_note("only literal attribute values are extracted"),
        );
        self.pos = span_end;
        end.is_some()
    }

    fn add_names(&mut self, value: &str) {
        for token in value.split_ascii_whitespace() {
            if !self.names.contains(token) {
                self.names.insert(token.to_string());
            }
        }
    }

    fn skip_whitespace(&self, mut pos: usize) -> usize {
        while self.bytes.get(pos).is_some_and(|b| b.is_ascii_whitespace()) {
            pos += 1;
        }
        pos
    }
}

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b':' | b'.')
}
