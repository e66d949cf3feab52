use std::collections::HashMap;
use std::fs;

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::error::{DictionaryError, Result};
use crate::source::DictionarySource;

/// One record per line: `KEY[(N)]  PHONEMES`. Capture 1 is the key without
/// its variant suffix, capture 2 the phoneme field. Comment and blank lines
/// never match.
static RECORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^(\S+?)(?:\([0-9]\))? +([ A-Z0-9]+?) *\r?$").expect("record pattern compiles")
});

/// The whole dictionary, indexed by key. Pronunciations keep file order.
#[derive(Debug, Default)]
pub struct Corpus {
    entries: HashMap<String, Vec<String>>,
    records: usize,
}

impl Corpus {
    pub fn load(source: &DictionarySource) -> Result<Self> {
        let path = source.path();
        debug!(path = %path.display(), "loading dictionary");

        let bytes = fs::read(path).map_err(|e| DictionaryError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        let corpus = Self::parse(&String::from_utf8_lossy(&bytes));

        debug!(
            path = %path.display(),
            records = corpus.record_count(),
            words = corpus.word_count(),
            "dictionary loaded"
        );
        Ok(corpus)
    }

    pub fn parse(text: &str) -> Self {
        let mut corpus = Self::default();

        for caps in RECORD.captures_iter(text) {
            let phonemes = caps[2].split_whitespace().collect::<Vec<_>>().join(" ");
            if phonemes.is_empty() {
                continue;
            }
            corpus
                .entries
                .entry(caps[1].to_string())
                .or_default()
                .push(phonemes);
            corpus.records += 1;
        }

        corpus
    }

    /// Exact key match; callers upper-case the word first.
    pub fn lookup(&self, key: &str) -> Option<&[String]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    pub fn record_count(&self) -> usize {
        self.records
    }

    pub fn word_count(&self) -> usize {
        self.entries.len()
    }
}
