use std::path::{Path, PathBuf};

use bem::Separators;
use serde::{Deserialize, Serialize};
use stylesheet::{Config, LanguageError, TargetLanguage};
use thiserror::Error;

use crate::destination::Target;

pub const DEFAULT_SETTINGS_FILE: &str = "extract-css.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse settings file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to write settings file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Language(#[from] LanguageError),
}

/// Persisted generation settings. Every field may be omitted from the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target language id: css, sass, scss, less or stylus.
    pub language: String,
    pub target: Target,
    pub bem: bool,
    pub bem_comments: bool,
    pub element_separator: String,
    pub modifier_separator: String,
    /// Where `scratch` output goes. Defaults to a directory under the
    /// system temp dir.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scratch_dir: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            language: TargetLanguage::Css.id().to_string(),
            target: Target::Scratch,
            bem: false,
            bem_comments: false,
            element_separator: "__".to_string(),
            modifier_separator: "_".to_string(),
            scratch_dir: None,
        }
    }
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub language: Option<TargetLanguage>,
    pub target: Option<Target>,
    pub bem: Option<bool>,
    pub bem_comments: Option<bool>,
    pub element_separator: Option<String>,
    pub modifier_separator: Option<String>,
    pub scratch_dir: Option<PathBuf>,
}

impl Settings {
    /// Load settings from `path`. A missing file is not an error.
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Option<Self>, SettingsError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let settings = Self::from_toml(&content).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Some(settings))
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), SettingsError> {
        let path = path.as_ref();
        let write_error = |source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(write_error)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(write_error)
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(language) = overrides.language {
            self.language = language.id().to_string();
        }
        if let Some(target) = overrides.target {
            self.target = target;
        }
        if let Some(bem) = overrides.bem {
            self.bem = bem;
        }
        if let Some(comments) = overrides.bem_comments {
            self.bem_comments = comments;
        }
        if let Some(separator) = &overrides.element_separator {
            self.element_separator = separator.clone();
        }
        if let Some(separator) = &overrides.modifier_separator {
            self.modifier_separator = separator.clone();
        }
        if let Some(dir) = &overrides.scratch_dir {
            self.scratch_dir = Some(dir.clone());
        }
    }

    pub fn language(&self) -> Result<TargetLanguage, SettingsError> {
        Ok(self.language.parse::<TargetLanguage>()?)
    }

    /// Validate the settings and build a generation config.
    pub fn to_config(&self) -> Result<Config, SettingsError> {
        let language = self.language()?;
        if self.element_separator.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "element_separator",
                message: "separator must not be empty".to_string(),
            });
        }
        if self.modifier_separator.is_empty() {
            return Err(SettingsError::InvalidValue {
                field: "modifier_separator",
                message: "separator must not be empty".to_string(),
            });
        }

        Ok(Config::new(language)
            .with_bem(self.bem)
            .with_comments(self.bem_comments)
            .with_separators(Separators::new(
                self.element_separator.as_str(),
                self.modifier_separator.as_str(),
            )))
    }

    pub fn scratch_dir(&self) -> PathBuf {
        self.scratch_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("extract-css"))
    }
}
