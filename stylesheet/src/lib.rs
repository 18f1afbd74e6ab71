pub mod config;
pub mod error;
pub mod language;
pub mod render;

pub use config::Config;
pub use error::LanguageError;
pub use language::{CommentStyle, Dialect, TargetLanguage};
pub use render::{Renderer, generate, render};
