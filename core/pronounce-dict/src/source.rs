use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DictionaryError, Result};

/// Location of the CMU dictionary in this crate's source tree.
pub const BUNDLED_DICTIONARY: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/cmu-dict.txt");

/// File name the dictionary is installed under next to a binary.
pub const DICTIONARY_FILE_NAME: &str = "cmu-dict.txt";

/// A validated reference to a dictionary file. Nothing is read until the
/// owning dictionary performs its first lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySource {
    path: PathBuf,
}

impl DictionarySource {
    /// The copy under `assets/` of the source tree this crate was built from.
    ///
    /// The path is fixed at compile time. A binary moved away from that tree
    /// gets `Configuration` here; [`installed`](Self::installed) also looks
    /// beside the executable.
    pub fn bundled() -> Result<Self> {
        Self::from_path(BUNDLED_DICTIONARY)
    }

    /// First existing file among [`default_candidates`](Self::default_candidates).
    pub fn installed() -> Result<Self> {
        Self::first_existing(Self::default_candidates())
    }

    /// `<exe dir>/cmu-dict.txt`, `<exe dir>/../share/pronounce/cmu-dict.txt`,
    /// then [`BUNDLED_DICTIONARY`].
    pub fn default_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::with_capacity(3);
        if let Some(dir) = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf))
        {
            candidates.push(dir.join(DICTIONARY_FILE_NAME));
            candidates.push(dir.join("../share/pronounce").join(DICTIONARY_FILE_NAME));
        }
        candidates.push(PathBuf::from(BUNDLED_DICTIONARY));
        candidates
    }

    /// Fails with `Configuration` naming the last candidate when none exists.
    pub fn first_existing(candidates: impl IntoIterator<Item = PathBuf>) -> Result<Self> {
        let mut last = None;
        for path in candidates {
            match Self::from_path(path) {
                Ok(source) => {
                    debug!(path = %source.path.display(), "default dictionary located");
                    return Ok(source);
                }
                Err(e) => last = Some(e),
            }
        }
        Err(last.unwrap_or_else(|| DictionaryError::Configuration {
            path: PathBuf::from(BUNDLED_DICTIONARY),
        }))
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => Ok(Self { path }),
            _ => Err(DictionaryError::Configuration { path }),
        }
    }

    /// `None` selects the installed dictionary, falling back to the bundled one.
    pub fn resolve(path: Option<PathBuf>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::installed(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_bundled(&self) -> bool {
        self.path == Path::new(BUNDLED_DICTIONARY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_is_the_last_default_candidate() {
        let candidates = DictionarySource::default_candidates();
        assert_eq!(candidates.last().unwrap(), Path::new(BUNDLED_DICTIONARY));
    }

    #[test]
    fn test_installed_copy_beside_binary_wins() {
        let dir = tempfile::tempdir().unwrap();
        let installed = dir.path().join(DICTIONARY_FILE_NAME);
        fs::write(&installed, "ZOOBAR  Z UW1 B AA1 R\n").unwrap();

        let source = DictionarySource::first_existing(vec![
            dir.path().join("missing.txt"),
            installed.clone(),
            PathBuf::from(BUNDLED_DICTIONARY),
        ])
        .unwrap();
        assert_eq!(source.path(), installed);
        assert!(!source.is_bundled());
    }

    #[test]
    fn test_falls_back_to_bundled_when_nothing_is_installed() {
        let dir = tempfile::tempdir().unwrap();
        let source = DictionarySource::first_existing(vec![
            dir.path().join(DICTIONARY_FILE_NAME),
            PathBuf::from(BUNDLED_DICTIONARY),
        ])
        .unwrap();
        assert!(source.is_bundled());
    }

    #[test]
    fn test_no_candidate_is_configuration_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join(DICTIONARY_FILE_NAME);
        let err = DictionarySource::first_existing(vec![missing.clone()]).unwrap_err();
        assert!(matches!(err, DictionaryError::Configuration { ref path } if path == &missing));

        let err = DictionarySource::first_existing(Vec::new()).unwrap_err();
        assert!(matches!(err, DictionaryError::Configuration { .. }));
    }
}
