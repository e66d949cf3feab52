use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The dictionary source does not exist or is not a regular file.
    #[error("no such dictionary source '{}'", path.display())]
    Configuration { path: PathBuf },

    /// The word has no record in the loaded corpus.
    #[error("'{word}' not found in dictionary")]
    NotFound { word: String },

    /// The corpus could not be read during the lazy load.
    #[error("failed to read dictionary '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DictionaryError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, DictionaryError::NotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
