use bem::Separators;

use crate::language::TargetLanguage;

/// Options for one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub language: TargetLanguage,
    /// Nest elements and modifiers under their block. When off, every class
    /// name becomes its own flat rule.
    pub bem_enabled: bool,
    /// Precede each nested rule with a comment naming its full selector.
    pub bem_comments: bool,
    pub separators: Separators,
}

impl Config {
    pub fn new(language: TargetLanguage) -> Self {
        Config {
            language,
            ..Config::default()
        }
    }

    pub fn with_bem(mut self, enabled: bool) -> Self {
        self.bem_enabled = enabled;
        self
    }

    pub fn with_comments(mut self, enabled: bool) -> Self {
        self.bem_comments = enabled;
        self
    }

    pub fn with_separators(mut self, separators: Separators) -> Self {
        self.separators = separators;
        self
    }
}
