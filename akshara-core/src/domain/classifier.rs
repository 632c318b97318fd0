//! Character classification for Telugu syllable segmentation

use std::ops::RangeInclusive;

/// Independent vowel letters (అ .. ఔ)
pub const VOWEL_RANGE: RangeInclusive<char> = '\u{0C05}'..='\u{0C14}';

/// Consonant letters (క .. హ)
pub const CONSONANT_RANGE: RangeInclusive<char> = '\u{0C15}'..='\u{0C39}';

/// Dependent vowel signs (matras)
pub const VOWEL_SIGN_RANGE: RangeInclusive<char> = '\u{0C3E}'..='\u{0C4C}';

/// Telugu virama (halant)
pub const VIRAMA: char = '\u{0C4D}';

/// Classification of a codepoint for syllable building
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    /// Consonant letter carrying an inherent vowel
    Consonant,
    /// Independent vowel letter
    Vowel,
    /// Dependent vowel sign attached to a preceding consonant
    VowelSign,
    /// Vowel-suppressing mark joining consonants into a conjunct
    Virama,
    /// Anything else: digits, punctuation, whitespace, other scripts
    Other,
}

impl CharacterClass {
    /// Whether this class is one of the Telugu letter or mark classes
    pub fn is_telugu(self) -> bool {
        !matches!(self, CharacterClass::Other)
    }
}

/// Pure character classification logic
pub trait CharacterClassifier: Send + Sync {
    /// Classify a character
    fn classify(&self, ch: char) -> CharacterClass;

    /// Check if character is a consonant
    fn is_consonant(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterClass::Consonant)
    }

    /// Check if character is an independent vowel
    fn is_vowel(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterClass::Vowel)
    }

    /// Check if character is a dependent vowel sign
    fn is_vowel_sign(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterClass::VowelSign)
    }

    /// Check if character is a virama
    fn is_virama(&self, ch: char) -> bool {
        matches!(self.classify(ch), CharacterClass::Virama)
    }
}

impl<C: CharacterClassifier + ?Sized> CharacterClassifier for &C {
    fn classify(&self, ch: char) -> CharacterClass {
        (**self).classify(ch)
    }
}

/// Range-based classifier for the Telugu Unicode block
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TeluguClassifier;

impl TeluguClassifier {
    /// Create a new classifier
    pub const fn new() -> Self {
        Self
    }
}

impl CharacterClassifier for TeluguClassifier {
    fn classify(&self, ch: char) -> CharacterClass {
        if CONSONANT_RANGE.contains(&ch) {
            CharacterClass::Consonant
        } else if VOWEL_RANGE.contains(&ch) {
            CharacterClass::Vowel
        } else if VOWEL_SIGN_RANGE.contains(&ch) {
            CharacterClass::VowelSign
        } else if ch == VIRAMA {
            CharacterClass::Virama
        } else {
            CharacterClass::Other
        }
    }
}

/// Classify a single codepoint with the Telugu ranges
pub fn classify(ch: char) -> CharacterClass {
    TeluguClassifier.classify(ch)
}
