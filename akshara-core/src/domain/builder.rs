//! Linear-scan syllable builder
//!
//! Consumes classified codepoints left to right with one codepoint of
//! lookahead and groups them into aksharas:
//!
//! - a consonant opens a new syllable unless the open one ends in a virama,
//!   in which case it joins the conjunct;
//! - vowel signs and viramas attach to the open syllable;
//! - an independent vowel is always a syllable of its own;
//! - any other codepoint closes the open syllable and stands alone, except
//!   whitespace, which is dropped.

use super::classifier::{CharacterClass, CharacterClassifier, TeluguClassifier};
use super::syllable::{Syllable, SyllableChars};

/// Whether a consonant followed by `next` keeps its inherent vowel
///
/// True at end of word or when `next` is neither a vowel sign nor a virama.
/// The builder evaluates this for every consonant but does not close the
/// syllable on it: the syllable stays open until the next boundary event.
pub fn has_inherent_vowel<C: CharacterClassifier>(classifier: &C, next: Option<char>) -> bool {
    match next {
        None => true,
        Some(ch) => !matches!(
            classifier.classify(ch),
            CharacterClass::VowelSign | CharacterClass::Virama
        ),
    }
}

/// Per-call segmentation state
#[derive(Debug)]
pub struct SyllableBuilder<C: CharacterClassifier = TeluguClassifier> {
    classifier: C,
    current: SyllableChars,
    output: Vec<Syllable>,
}

impl SyllableBuilder<TeluguClassifier> {
    /// Create a builder using the Telugu ranges
    pub fn new() -> Self {
        Self::with_classifier(TeluguClassifier)
    }
}

impl Default for SyllableBuilder<TeluguClassifier> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: CharacterClassifier> SyllableBuilder<C> {
    /// Create a builder with a custom classifier
    pub fn with_classifier(classifier: C) -> Self {
        Self {
            classifier,
            current: SyllableChars::new(),
            output: Vec::new(),
        }
    }

    /// Feed one codepoint together with its successor (`None` at end of word)
    pub fn push(&mut self, ch: char, next: Option<char>) {
        match self.classifier.classify(ch) {
            CharacterClass::Consonant => {
                if self.current.last().is_some_and(|&last| !self.classifier.is_virama(last)) {
                    self.flush();
                }
                self.current.push(ch);

                // Not acted on: a later vowel sign or virama must still attach.
                let _inherent_vowel = has_inherent_vowel(&self.classifier, next);
            }
            CharacterClass::Vowel => {
                self.flush();
                self.output.push(Syllable::singleton(ch));
            }
            CharacterClass::VowelSign | CharacterClass::Virama => {
                self.current.push(ch);
            }
            CharacterClass::Other => {
                self.flush();
                if !ch.is_whitespace() {
                    self.output.push(Syllable::singleton(ch));
                }
            }
        }
    }

    /// Syllables emitted so far, not counting the open one
    pub fn emitted(&self) -> &[Syllable] {
        &self.output
    }

    /// Codepoints of the syllable still being built
    pub fn pending(&self) -> &[char] {
        &self.current
    }

    /// Flush the open syllable and return the full sequence
    pub fn finish(mut self) -> Vec<Syllable> {
        self.flush();
        self.output
    }

    fn flush(&mut self) {
        if !self.current.is_empty() {
            self.output.push(Syllable::take(&mut self.current));
        }
    }
}

/// Segment a word into syllables using the Telugu ranges
pub fn extract_syllables(word: &str) -> Vec<Syllable> {
    let chars: Vec<char> = word.chars().collect();
    extract_syllables_from_chars(&chars)
}

/// Segment an already-decoded codepoint sequence
pub fn extract_syllables_from_chars(chars: &[char]) -> Vec<Syllable> {
    extract_syllables_with(TeluguClassifier, chars)
}

/// Segment with a caller-supplied classifier
pub fn extract_syllables_with<C: CharacterClassifier>(classifier: C, chars: &[char]) -> Vec<Syllable> {
    let mut builder = SyllableBuilder::with_classifier(classifier);
    for (i, &ch) in chars.iter().enumerate() {
        builder.push(ch, chars.get(i + 1).copied());
    }
    builder.finish()
}
