use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LanguageError {
    #[error("unknown target language '{0}' (expected one of css, sass, scss, less, stylus)")]
    Unknown(String),
}
