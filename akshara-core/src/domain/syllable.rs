//! Syllable value type

use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// Inline storage for a syllable's codepoints
pub(crate) type SyllableChars = SmallVec<[char; 4]>;

/// One orthographic unit (akshara): a non-empty run of codepoints
///
/// Two syllables are equal when they hold the same codepoint sequence,
/// which makes them usable directly as frequency-table keys.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Syllable {
    chars: SyllableChars,
}

impl Syllable {
    /// Build a syllable from codepoints, `None` if empty
    pub fn from_chars(chars: impl IntoIterator<Item = char>) -> Option<Self> {
        let chars: SyllableChars = chars.into_iter().collect();
        if chars.is_empty() {
            None
        } else {
            Some(Self { chars })
        }
    }

    /// Single-codepoint syllable
    pub(crate) fn singleton(ch: char) -> Self {
        let mut chars = SyllableChars::new();
        chars.push(ch);
        Self { chars }
    }

    /// Takes the buffered codepoints, leaving the buffer empty
    ///
    /// Callers guarantee the buffer is non-empty.
    pub(crate) fn take(buffer: &mut SyllableChars) -> Self {
        debug_assert!(!buffer.is_empty());
        Self {
            chars: std::mem::take(buffer),
        }
    }

    /// Codepoints in order
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Codepoints as a slice
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }

    /// Number of codepoints (always at least one)
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// First codepoint
    pub fn first(&self) -> char {
        self.chars[0]
    }

    /// Last codepoint
    pub fn last(&self) -> char {
        self.chars[self.chars.len() - 1]
    }
}

impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for ch in &self.chars {
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Syllable({:?})", self.to_string())
    }
}

impl AsRef<[char]> for Syllable {
    fn as_ref(&self) -> &[char] {
        &self.chars
    }
}

impl Serialize for Syllable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
