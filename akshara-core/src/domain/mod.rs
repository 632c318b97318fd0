//! Domain layer for akshara segmentation
//!
//! Pure, allocation-light logic: classify each codepoint, then merge
//! classified codepoints into syllables with a single linear scan.

mod builder;
mod classifier;
mod syllable;

pub use builder::{
    extract_syllables, extract_syllables_from_chars, extract_syllables_with, has_inherent_vowel,
    SyllableBuilder,
};
pub use classifier::{
    classify, CharacterClass, CharacterClassifier, TeluguClassifier, CONSONANT_RANGE, VIRAMA,
    VOWEL_RANGE, VOWEL_SIGN_RANGE,
};
pub use syllable::Syllable;

#[cfg(test)]
mod tests;
