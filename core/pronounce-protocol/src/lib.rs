#![cfg_attr(not(test), no_std)] // Keeps the vocabulary usable from embedded/WASM front ends

extern crate alloc;

// Enable std if the feature is active (tools). Tests link std already.
#[cfg(all(feature = "std", not(test)))]
extern crate std;

pub mod phoneme;

pub use phoneme::{
    count_stress_markers, parse_pronunciation, split_token, stress_of, Phoneme, PhonemeError,
    Stress,
};
