//! Stylesheet text generation.
//!
//! Every rule renders to its own fragment and fragments are joined with
//! newlines, so each formatting rule can be checked in isolation.

use bem::{Block, BlockSet, Element, Parser};
use tracing::debug;

use crate::config::Config;
use crate::language::Dialect;

/// Parse `class_names` (when BEM nesting is on) and render the stylesheet.
pub fn generate<S: AsRef<str>>(config: &Config, class_names: &[S]) -> String {
    let blocks = if config.bem_enabled {
        Parser::new(config.separators.clone()).parse(class_names)
    } else {
        BlockSet::new()
    };
    render(&blocks, class_names, config)
}

/// Render already-parsed blocks, or the raw names when BEM nesting is off.
pub fn render<S: AsRef<str>>(blocks: &BlockSet, class_names: &[S], config: &Config) -> String {
    let renderer = Renderer::new(config);
    let output = if config.bem_enabled {
        renderer.nested(blocks)
    } else {
        renderer.flat(class_names)
    };
    debug!(
        language = %config.language,
        bem = config.bem_enabled,
        bytes = output.len(),
        "rendered stylesheet"
    );
    output
}

pub struct Renderer<'a> {
    config: &'a Config,
    dialect: &'static Dialect,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a Config) -> Self {
        Renderer {
            config,
            dialect: config.language.dialect(),
        }
    }

    /// One independent rule per class name, in input order.
    pub fn flat<S: AsRef<str>>(&self, class_names: &[S]) -> String {
        class_names
            .iter()
            .map(|name| format!(".{}{}", name.as_ref(), self.empty_body()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn nested(&self, blocks: &BlockSet) -> String {
        blocks
            .iter()
            .map(|block| self.block(block))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Block selector, its elements, then its own modifiers.
    pub fn block(&self, block: &Block) -> String {
        let mut lines = vec![format!(".{}{}", block.name, self.open_brace())];
        lines.extend(block.elements.values().map(|e| self.element(block, e)));
        lines.extend(
            block
                .modifiers
                .iter()
                .map(|m| self.modifier(&block.name, None, m)),
        );
        lines.join("\n") + &self.close_brace(block.is_empty(), "")
    }

    pub fn element(&self, block: &Block, element: &Element) -> String {
        let open = format!(
            " &{}{}{}",
            self.config.separators.element,
            element.name,
            self.open_brace()
        );
        let comment = self.comment(&block.name, Some(element.name.as_str()), None);
        let mut lines = vec![self.commented(comment, open)];
        lines.extend(
            element
                .modifiers
                .iter()
                .map(|m| self.modifier(&block.name, Some(element.name.as_str()), m)),
        );
        lines.join("\n") + &self.close_brace(element.is_empty(), " ")
    }

    /// A self-closing modifier rule. `element` is set for element modifiers,
    /// which sit one level deeper.
    pub fn modifier(&self, block: &str, element: Option<&str>, modifier: &str) -> String {
        let indent = if element.is_some() { "  " } else { " " };
        let line = format!(
            "{}&{}{}{}",
            indent,
            self.config.separators.modifier,
            modifier,
            self.empty_body()
        );
        self.commented(self.comment(block, element, Some(modifier)), line)
    }

    /// The full selector as a comment line, or `None` when comments are off.
    pub fn comment(
        &self,
        block: &str,
        element: Option<&str>,
        modifier: Option<&str>,
    ) -> Option<String> {
        if !self.config.bem_comments {
            return None;
        }
        let indent = if element.is_some() && modifier.is_some() {
            "  "
        } else {
            " "
        };
        let mut selector = format!(".{}", block);
        if let Some(element) = element {
            selector.push_str(&self.config.separators.element);
            selector.push_str(element);
        }
        if let Some(modifier) = modifier {
            selector.push_str(&self.config.separators.modifier);
            selector.push_str(modifier);
        }
        let style = self.dialect.comments;
        Some(format!("{}{}{}{}", indent, style.prefix(), selector, style.suffix()))
    }

    fn commented(&self, comment: Option<String>, line: String) -> String {
        match comment {
            Some(comment) => format!("{}\n{}", comment, line),
            None => line,
        }
    }

    fn open_brace(&self) -> &'static str {
        if self.dialect.braces { " {" } else { "" }
    }

    fn empty_body(&self) -> &'static str {
        if self.dialect.braces { " {}" } else { "" }
    }

    /// A non-empty rule closes on its own line at `indent`; an empty one
    /// closes right after its opening brace.
    fn close_brace(&self, empty: bool, indent: &str) -> String {
        match (self.dialect.braces, empty) {
            (false, _) => String::new(),
            (true, true) => "}".to_string(),
            (true, false) => format!("\n{}}}", indent),
        }
    }
}
