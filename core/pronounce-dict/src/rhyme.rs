use pronounce_protocol::{stress_of, Stress};
use tracing::trace;

/// The first pronunciation pair, in search order, whose rimes agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RhymeMatch {
    pub first: String,
    pub second: String,
    pub rime: String,
}

/// Stress marker a rime is anchored on. Words with no primary stress
/// (e.g. "a" -> `AH0`) fall back to the unstressed marker.
pub fn anchor_stress(pronunciation: &str) -> Stress {
    if pronunciation.contains(Stress::Primary.digit()) {
        Stress::Primary
    } else {
        Stress::Unstressed
    }
}

/// Suffix starting at the first vowel carrying `stress`.
pub fn rime(pronunciation: &str, stress: Stress) -> Option<&str> {
    let mut offset = 0;
    for token in pronunciation.split(' ') {
        if stress_of(token) == Some(stress) {
            return Some(&pronunciation[offset..]);
        }
        offset += token.len() + 1;
    }
    None
}

/// Outer loop over `first`, inner over `second`. The anchor is derived from
/// the outer pronunciation only and reused for every inner one.
pub fn find_rhyme(first: &[String], second: &[String]) -> Option<RhymeMatch> {
    for p1 in first {
        let stress = anchor_stress(p1);
        let Some(rime1) = rime(p1, stress) else {
            continue;
        };

        for p2 in second {
            if rime(p2, stress) == Some(rime1) {
                trace!(first = %p1, second = %p2, rime = %rime1, "rhyme found");
                return Some(RhymeMatch {
                    first: p1.clone(),
                    second: p2.clone(),
                    rime: rime1.to_string(),
                });
            }
        }
    }
    None
}
