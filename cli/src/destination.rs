use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use stylesheet::TargetLanguage;
use thiserror::Error;
use tracing::info;

/// Where generated stylesheet text is delivered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// Next to the markup file it was extracted from.
    NewFile,
    /// Into the scratch directory.
    #[default]
    Scratch,
    /// Printed on standard output.
    Stdout,
}

#[derive(Debug, Error)]
pub enum DestinationError {
    #[error("failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write to stdout: {0}")]
    Stdout(std::io::Error),
}

/// The outcome of one delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Delivery {
    File(PathBuf),
    Stdout,
}

/// `<stem>.<extension>` for the generated stylesheet.
pub fn file_name_hint(stem: &str, language: TargetLanguage) -> String {
    format!("{}.{}", stem, language.extension())
}

/// The stem used for output named after `source`, or `stdin` when reading
/// from standard input.
pub fn source_stem(source: Option<&Path>) -> String {
    source
        .and_then(|p| p.file_stem())
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "stdin".to_string())
}

pub struct Destination {
    pub target: Target,
    pub scratch_dir: PathBuf,
}

impl Destination {
    pub fn new(target: Target, scratch_dir: PathBuf) -> Self {
        Destination {
            target,
            scratch_dir,
        }
    }

    /// Directory a file target writes into, or `None` for stdout.
    pub fn directory(&self, source: Option<&Path>) -> Option<PathBuf> {
        match self.target {
            Target::NewFile => Some(
                source
                    .and_then(|p| p.parent())
                    .filter(|p| !p.as_os_str().is_empty())
                    .map(Path::to_path_buf)
                    .unwrap_or_else(|| PathBuf::from(".")),
            ),
            Target::Scratch => Some(self.scratch_dir.clone()),
            Target::Stdout => None,
        }
    }

    pub fn deliver<W: Write>(
        &self,
        source: Option<&Path>,
        file_name: &str,
        text: &str,
        stdout: &mut W,
    ) -> Result<Delivery, DestinationError> {
        let Some(dir) = self.directory(source) else {
            writeln!(stdout, "{}", text).map_err(DestinationError::Stdout)?;
            return Ok(Delivery::Stdout);
        };

        std::fs::create_dir_all(&dir).map_err(|source| DestinationError::CreateDir {
            path: dir.clone(),
            source,
        })?;
        let path = dir.join(file_name);
        std::fs::write(&path, text).map_err(|source| DestinationError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote stylesheet");
        Ok(Delivery::File(path))
    }
}
