//! CMU-format phonetic dictionary.
//!
//! Records look like `READ(1)  R IY1 D`: an upper-case key, an optional
//! one-digit variant index, and ARPABET phonemes where vowels carry a stress
//! digit (0 none, 1 primary, 2 secondary). The corpus is read once, on the
//! first lookup, and cached for the lifetime of the dictionary.

pub mod corpus;
pub mod error;
pub mod rhyme;
pub mod source;

use std::path::PathBuf;

use once_cell::sync::OnceCell;
use pronounce_protocol::count_stress_markers;
use tracing::trace;

use crate::corpus::Corpus;
pub use crate::error::{DictionaryError, Result};
pub use crate::rhyme::RhymeMatch;
pub use crate::source::{DictionarySource, BUNDLED_DICTIONARY};

#[derive(Debug)]
pub struct PhoneticDictionary {
    source: DictionarySource,
    corpus: OnceCell<Corpus>,
}

impl PhoneticDictionary {
    /// Binds to the default CMU dictionary: an installed copy beside the
    /// executable if there is one, else the bundled asset.
    pub fn new() -> Result<Self> {
        Self::with_source(None)
    }

    /// Binds to a dictionary file of the same format. Fails if it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_source(Some(path.into()))
    }

    pub fn with_source(path: Option<PathBuf>) -> Result<Self> {
        Ok(Self {
            source: DictionarySource::resolve(path)?,
            corpus: OnceCell::new(),
        })
    }

    pub fn source(&self) -> &DictionarySource {
        &self.source
    }

    /// Concurrent first callers block until a single load finishes. A failed
    /// load leaves the cell empty.
    fn corpus(&self) -> Result<&Corpus> {
        self.corpus.get_or_try_init(|| Corpus::load(&self.source))
    }

    /// All pronunciations of `word` (any case), in dictionary order.
    pub fn pronunciations(&self, word: &str) -> Result<&[String]> {
        let corpus = self.corpus()?;
        let key = word.to_uppercase();
        trace!(word = %key, "lookup");

        corpus
            .lookup(&key)
            .ok_or(DictionaryError::NotFound { word: key })
    }

    /// Number of syllables in a pronunciation, i.e. its stress digits.
    pub fn syllable_count(pronunciation: &str) -> usize {
        count_stress_markers(pronunciation)
    }

    /// `NotFound` becomes `false`; any other failure is returned.
    pub fn has_word(&self, word: &str) -> Result<bool> {
        match self.pronunciations(word) {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(e),
        }
    }

    pub fn words_do_rhyme(&self, word1: &str, word2: &str) -> Result<bool> {
        Ok(self.rhyme_match(word1, word2)?.is_some())
    }

    /// Like [`words_do_rhyme`](Self::words_do_rhyme), reporting the first
    /// matching pronunciation pair. A word never rhymes with itself.
    pub fn rhyme_match(&self, word1: &str, word2: &str) -> Result<Option<RhymeMatch>> {
        if word1.to_uppercase() == word2.to_uppercase() {
            return Ok(None);
        }

        let first = self.pronunciations(word1)?;
        let second = self.pronunciations(word2)?;
        Ok(rhyme::find_rhyme(first, second))
    }
}
