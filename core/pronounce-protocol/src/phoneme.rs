use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use nom::{
    bytes::complete::take_while1,
    character::complete::anychar,
    combinator::{all_consuming, map_opt, opt},
    sequence::pair,
    IResult,
};

#[cfg(feature = "serde")]
use serde::{Deserialize as SerdeDeserialize, Serialize as SerdeSerialize};

/// CMU lexical stress marker carried by vowel phonemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
#[repr(u8)]
pub enum Stress {
    Unstressed = 0,
    Primary = 1,
    Secondary = 2,
}

impl Stress {
    pub const fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(Stress::Unstressed),
            '1' => Some(Stress::Primary),
            '2' => Some(Stress::Secondary),
            _ => None,
        }
    }

    pub const fn digit(self) -> char {
        match self {
            Stress::Unstressed => '0',
            Stress::Primary => '1',
            Stress::Secondary => '2',
        }
    }

    /// True for the three digits the dictionary uses as stress markers.
    pub const fn is_marker(c: char) -> bool {
        matches!(c, '0'..='2')
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhonemeError {
    Malformed(String),
}

impl fmt::Display for PhonemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhonemeError::Malformed(token) => write!(f, "Malformed phoneme token: '{}'", token),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for PhonemeError {}

/// A single ARPABET symbol, e.g. `AH0`, `T`, `UW1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(SerdeDeserialize, SerdeSerialize))]
pub struct Phoneme {
    pub root: String,
    pub stress: Option<Stress>,
}

impl Phoneme {
    pub fn parse(token: &str) -> Result<Self, PhonemeError> {
        let (root, stress) = split_token(token)?;
        Ok(Self {
            root: String::from(root),
            stress,
        })
    }

    /// Only vowels carry a stress digit.
    pub fn is_vowel(&self) -> bool {
        self.stress.is_some()
    }
}

impl fmt::Display for Phoneme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.root)?;
        if let Some(stress) = self.stress {
            write!(f, "{}", stress.digit())?;
        }
        Ok(())
    }
}

fn phoneme(input: &str) -> IResult<&str, (&str, Option<Stress>)> {
    pair(
        take_while1(|c: char| c.is_ascii_uppercase()),
        opt(map_opt(anychar, Stress::from_digit)),
    )(input)
}

/// Splits a token into its root code and stress without allocating.
pub fn split_token(token: &str) -> Result<(&str, Option<Stress>), PhonemeError> {
    all_consuming(phoneme)(token)
        .map(|(_, parts)| parts)
        .map_err(|_| PhonemeError::Malformed(String::from(token)))
}

/// Stress of a well-formed vowel token; `None` for consonants and malformed tokens.
pub fn stress_of(token: &str) -> Option<Stress> {
    split_token(token).ok().and_then(|(_, stress)| stress)
}

/// Parses a space separated phoneme sequence such as `F UW1 B AA1 R`.
pub fn parse_pronunciation(pronunciation: &str) -> Result<Vec<Phoneme>, PhonemeError> {
    pronunciation.split_whitespace().map(Phoneme::parse).collect()
}

/// Number of stress digits in a pronunciation. Every vowel carries exactly
/// one, so this is the syllable count.
pub fn count_stress_markers(pronunciation: &str) -> usize {
    pronunciation
        .chars()
        .filter(|c| Stress::is_marker(*c))
        .count()
}
