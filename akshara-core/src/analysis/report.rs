//! Syllable statistics over a word list

use super::frequency::{SyllableFrequency, Tally};
use crate::config::{defaults, AnalysisConfig};
use crate::domain::{classify, extract_syllables, CharacterClass, Syllable};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Punctuation counted when deciding whether a word is a plausible entry
const WORD_PUNCTUATION: &[char] = &['।', '॥', ',', '.', '!', '?', ';'];

/// One row of a ranked table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedItem {
    /// Syllable or codepoint, rendered as text
    pub item: String,
    /// Occurrences
    pub count: usize,
    /// Share of the table's total, in percent
    pub percentage: f64,
}

/// Number of words having a given syllable count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordLengthBucket {
    /// Syllables per word
    pub syllables: usize,
    /// Words with that many syllables
    pub words: usize,
    /// Share of all words, in percent
    pub percentage: f64,
}

/// Number of words having a given character count
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharLengthBucket {
    /// Characters (codepoints) per word
    pub characters: usize,
    /// Words with that many characters
    pub words: usize,
    /// Share of all words, in percent
    pub percentage: f64,
}

/// A word together with its length in characters
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordExtent {
    /// The word
    pub word: String,
    /// Characters (codepoints)
    pub length: usize,
}

/// Summary produced by [`Analyzer::report`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Words analysed
    pub total_words: usize,
    /// Characters across all analysed words
    pub total_characters: usize,
    /// Distinct characters across all analysed words
    pub unique_characters: usize,
    /// Mean characters per word
    pub average_word_length: f64,
    /// Longest plausible word, first one wins ties
    pub longest_word: Option<WordExtent>,
    /// Shortest plausible word, first one wins ties
    pub shortest_word: Option<WordExtent>,
    /// Syllable occurrences counted
    pub total_syllables: usize,
    /// Distinct syllables counted
    pub unique_syllables: usize,
    /// Mean syllables per word
    pub average_syllables_per_word: f64,
    /// Most frequent syllables
    pub top_syllables: Vec<RankedItem>,
    /// Most frequent syllable-initial consonants
    pub top_consonants: Vec<RankedItem>,
    /// Most frequent multi-codepoint syllables led by a consonant
    pub consonant_combinations: Vec<RankedItem>,
    /// Most frequent vowels and vowel signs inside syllables
    pub vowel_usage: Vec<RankedItem>,
    /// Most frequent two-character word beginnings, share of all words
    pub word_beginnings: Vec<RankedItem>,
    /// Distribution of syllable counts per word, ascending
    pub syllables_per_word: Vec<WordLengthBucket>,
    /// Distribution of character counts per word, ascending
    pub word_lengths: Vec<CharLengthBucket>,
}

/// Accumulates syllable and word statistics word by word
///
/// A word is analysed when it contains at least one counted syllable. With
/// `count_other_syllables` disabled, words made only of digits or
/// punctuation are therefore skipped entirely and do not dilute the
/// per-word averages.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: AnalysisConfig,
    words: usize,
    characters: usize,
    unique_characters: HashSet<char>,
    longest: Option<WordExtent>,
    shortest: Option<WordExtent>,
    syllables: SyllableFrequency,
    consonants: Tally<char>,
    combinations: SyllableFrequency,
    vowels: Tally<char>,
    beginnings: Tally<String>,
    syllable_counts: BTreeMap<usize, usize>,
    char_counts: BTreeMap<usize, usize>,
}

impl Analyzer {
    /// Create an analyzer with default limits
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer with the given configuration
    pub fn with_config(config: AnalysisConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Segment and tally a single word
    ///
    /// Blank words, and words left without syllables once non-Telugu
    /// singletons are filtered out, are ignored.
    pub fn add_word(&mut self, word: &str) {
        if word.trim().is_empty() {
            return;
        }

        let syllables: Vec<Syllable> = extract_syllables(word)
            .into_iter()
            .filter(|s| self.config.count_other_syllables || !is_other_singleton(s))
            .collect();
        if syllables.is_empty() {
            return;
        }

        self.record_word(word);
        *self.syllable_counts.entry(syllables.len()).or_insert(0) += 1;

        for syllable in &syllables {
            self.syllables.record(syllable);

            let first = syllable.first();
            if classify(first) == CharacterClass::Consonant {
                self.consonants.record(&first);
                if syllable.len() >= 2 {
                    self.combinations.record(syllable);
                }
            }
            for ch in syllable.chars() {
                if matches!(classify(ch), CharacterClass::Vowel | CharacterClass::VowelSign) {
                    self.vowels.record(&ch);
                }
            }
        }
    }

    fn record_word(&mut self, word: &str) {
        let length = word.chars().count();

        self.words += 1;
        self.characters += length;
        self.unique_characters.extend(word.chars());
        *self.char_counts.entry(length).or_insert(0) += 1;

        if length >= 2 {
            let beginning: String = word.chars().take(2).collect();
            self.beginnings.record(&beginning);
        }

        if is_plausible_word(word, length) {
            let extent = || WordExtent {
                word: word.to_string(),
                length,
            };
            if self.longest.as_ref().map_or(true, |w| length > w.length) {
                self.longest = Some(extent());
            }
            if self.shortest.as_ref().map_or(true, |w| length < w.length) {
                self.shortest = Some(extent());
            }
        }
    }

    /// Tally every word yielded by `words`
    pub fn add_words<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.add_word(word.as_ref());
        }
    }

    /// Split `text` on whitespace and tally each word
    pub fn add_text(&mut self, text: &str) {
        self.add_words(text.split_whitespace());
    }

    /// Words analysed so far
    pub fn word_count(&self) -> usize {
        self.words
    }

    /// Raw syllable counts
    pub fn frequency(&self) -> &SyllableFrequency {
        &self.syllables
    }

    /// Configuration in use
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Build the report for everything tallied so far
    pub fn report(&self) -> AnalysisReport {
        let total_syllables = self.syllables.total();

        AnalysisReport {
            total_words: self.words,
            total_characters: self.characters,
            unique_characters: self.unique_characters.len(),
            average_word_length: average(self.characters, self.words),
            longest_word: self.longest.clone(),
            shortest_word: self.shortest.clone(),
            total_syllables,
            unique_syllables: self.syllables.unique(),
            average_syllables_per_word: average(total_syllables, self.words),
            top_syllables: top(&self.syllables, self.config.top_syllables, total_syllables),
            top_consonants: top(
                &self.consonants,
                self.config.top_consonants,
                self.consonants.total(),
            ),
            consonant_combinations: top(
                &self.combinations,
                self.config.top_combinations,
                self.combinations.total(),
            ),
            vowel_usage: top(&self.vowels, self.config.top_vowels, self.vowels.total()),
            word_beginnings: top(&self.beginnings, self.config.top_beginnings, self.words),
            syllables_per_word: self
                .syllable_counts
                .iter()
                .map(|(&syllables, &words)| WordLengthBucket {
                    syllables,
                    words,
                    percentage: percentage(words, self.words),
                })
                .collect(),
            word_lengths: self
                .char_counts
                .iter()
                .map(|(&characters, &words)| CharLengthBucket {
                    characters,
                    words,
                    percentage: percentage(words, self.words),
                })
                .collect(),
        }
    }
}

fn is_other_singleton(syllable: &Syllable) -> bool {
    syllable.len() == 1 && classify(syllable.first()) == CharacterClass::Other
}

/// Dictionary-like entry: bounded length, no spaces, at most one punctuation mark
fn is_plausible_word(word: &str, length: usize) -> bool {
    length <= defaults::MAX_WORD_LENGTH
        && !word.contains(' ')
        && word.chars().filter(|c| WORD_PUNCTUATION.contains(c)).count() <= 1
}

fn top<K>(tally: &Tally<K>, limit: usize, whole: usize) -> Vec<RankedItem>
where
    K: Clone + Eq + std::hash::Hash + ToString,
{
    tally
        .ranked()
        .into_iter()
        .take(limit)
        .map(|(key, count)| RankedItem {
            item: key.to_string(),
            count,
            percentage: percentage(count, whole),
        })
        .collect()
}

fn average(total: usize, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        round2(total as f64 / count as f64)
    }
}

fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        round2(part as f64 * 100.0 / whole as f64)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(rows: &[RankedItem]) -> Vec<(&str, usize)> {
        rows.iter().map(|r| (r.item.as_str(), r.count)).collect()
    }

    #[test]
    fn test_empty_report() {
        let report = Analyzer::new().report();
        assert_eq!(report.total_words, 0);
        assert_eq!(report.total_syllables, 0);
        assert_eq!(report.average_syllables_per_word, 0.0);
        assert_eq!(report.average_word_length, 0.0);
        assert!(report.longest_word.is_none());
        assert!(report.shortest_word.is_none());
        assert!(report.top_syllables.is_empty());
        assert!(report.syllables_per_word.is_empty());
        assert!(report.word_lengths.is_empty());
    }

    #[test]
    fn test_blank_words_are_ignored() {
        let mut analyzer = Analyzer::new();
        analyzer.add_words(["", "   ", "\t"]);
        assert_eq!(analyzer.word_count(), 0);
    }

    #[test]
    fn test_counts_and_percentages() {
        let mut analyzer = Analyzer::new();
        analyzer.add_words(["అమ్మ", "అమ్మ", "కమలం"]);
        let report = analyzer.report();

        // అ మ్మ | అ మ్మ | క మ ల ం
        assert_eq!(report.total_words, 3);
        assert_eq!(report.total_syllables, 8);
        assert_eq!(report.unique_syllables, 6);
        assert_eq!(report.average_syllables_per_word, 2.67);

        assert_eq!(report.top_syllables[0].item, "అ");
        assert_eq!(report.top_syllables[0].count, 2);
        assert_eq!(report.top_syllables[0].percentage, 25.0);
        assert_eq!(report.top_syllables[1].item, "మ్మ");
    }

    #[test]
    fn test_frequency_and_config_accessors() {
        let config = AnalysisConfig::builder().top_vowels(3).build().unwrap();
        let mut analyzer = Analyzer::with_config(config.clone());
        analyzer.add_words(["అమ్మ", "మమ్మ"]);

        assert_eq!(analyzer.config(), &config);
        let frequency = analyzer.frequency();
        assert_eq!(frequency.total(), 4);
        assert_eq!(frequency.ranked()[0].0.to_string(), "మ్మ");
        assert_eq!(frequency.ranked()[0].1, 2);
    }

    #[test]
    fn test_leading_consonants_and_vowels() {
        let mut analyzer = Analyzer::new();
        analyzer.add_word("మనిషి");
        let report = analyzer.report();

        let consonants: Vec<&str> = report.top_consonants.iter().map(|r| r.item.as_str()).collect();
        assert_eq!(consonants, vec!["మ", "న", "ష"]);
        assert_eq!(report.vowel_usage.len(), 1);
        assert_eq!(report.vowel_usage[0].item, "ి");
        assert_eq!(report.vowel_usage[0].count, 2);
        assert_eq!(report.vowel_usage[0].percentage, 100.0);
    }

    #[test]
    fn test_consonant_combinations() {
        let mut analyzer = Analyzer::new();
        analyzer.add_words(["అమ్మ", "అమ్మ", "మనిషి", "కమలం"]);
        let report = analyzer.report();

        // Bare consonants, vowels and anusvara are not combinations
        assert_eq!(
            items(&report.consonant_combinations),
            vec![("మ్మ", 2), ("ని", 1), ("షి", 1)]
        );
        assert_eq!(report.consonant_combinations[0].percentage, 50.0);
    }

    #[test]
    fn test_word_character_statistics() {
        let mut analyzer = Analyzer::new();
        analyzer.add_words(["అమ్మ", "అమ్మ", "కమలం"]);
        let report = analyzer.report();

        assert_eq!(report.total_characters, 12);
        assert_eq!(report.average_word_length, 4.0);
        // అ మ ్ క ల ం
        assert_eq!(report.unique_characters, 6);
        assert_eq!(
            report.word_lengths,
            vec![CharLengthBucket { characters: 4, words: 3, percentage: 100.0 }]
        );
    }

    #[test]
    fn test_longest_and_shortest_words() {
        let mut analyzer = Analyzer::new();
        analyzer.add_words(["ప్రేమ", "అమ్మ", "సంస్కృతి", "కమలం", "ఆ,."]);
        let report = analyzer.report();

        assert_eq!(
            report.longest_word,
            Some(WordExtent { word: "సంస్కృతి".to_string(), length: 8 })
        );
        // అమ్మ and కమలం tie at four characters; the earlier word is kept.
        // ఆ,. is shorter but carries too much punctuation to qualify.
        assert_eq!(
            report.shortest_word,
            Some(WordExtent { word: "అమ్మ".to_string(), length: 4 })
        );
    }

    #[test]
    fn test_overlong_word_is_not_longest() {
        let long_word = "క".repeat(defaults::MAX_WORD_LENGTH + 1);
        let mut analyzer = Analyzer::new();
        analyzer.add_words([long_word.as_str(), "అమ్మ"]);
        let report = analyzer.report();

        assert_eq!(report.total_words, 2);
        assert_eq!(report.longest_word.unwrap().word, "అమ్మ");
    }

    #[test]
    fn test_two_character_beginnings() {
        let mut analyzer = Analyzer::new();
        analyzer.add_words(["అమ్మ", "అమల", "కమలం", "ఆ"]);
        let report = analyzer.report();

        // Single-character words have no two-character beginning
        assert_eq!(items(&report.word_beginnings), vec![("అమ", 2), ("కమ", 1)]);
        assert_eq!(report.word_beginnings[0].percentage, 50.0);
    }

    #[test]
    fn test_syllables_per_word_distribution() {
        let mut analyzer = Analyzer::new();
        analyzer.add_text("అమ్మ మనిషి ప్రేమ");
        let report = analyzer.report();

        assert_eq!(
            report.syllables_per_word,
            vec![
                WordLengthBucket { syllables: 2, words: 2, percentage: 66.67 },
                WordLengthBucket { syllables: 3, words: 1, percentage: 33.33 },
            ]
        );
    }

    #[test]
    fn test_limits_truncate_tables() {
        let config = AnalysisConfig::builder()
            .top_syllables(2)
            .top_beginnings(1)
            .build()
            .unwrap();
        let mut analyzer = Analyzer::with_config(config);
        analyzer.add_words(["ప్రకృతి", "అమ్మ"]);
        let report = analyzer.report();

        assert_eq!(report.unique_syllables, 5);
        assert_eq!(report.top_syllables.len(), 2);
        assert_eq!(report.word_beginnings.len(), 1);
    }

    #[test]
    fn test_other_syllables_can_be_skipped() {
        let config = AnalysisConfig::builder()
            .count_other_syllables(false)
            .build()
            .unwrap();
        let mut analyzer = Analyzer::with_config(config);
        analyzer.add_words(["కమలం", "42"]);
        let report = analyzer.report();

        // Anusvara and digits are Other singletons
        assert!(report.top_syllables.iter().all(|r| r.item != "ం"));
        assert_eq!(report.total_syllables, 3);

        // "42" has nothing left to count, so it is not analysed at all
        assert_eq!(report.total_words, 1);
        assert_eq!(report.average_syllables_per_word, 3.0);
        assert_eq!(
            report.syllables_per_word,
            vec![WordLengthBucket { syllables: 3, words: 1, percentage: 100.0 }]
        );
        assert_eq!(report.total_characters, 4);
    }

    #[test]
    fn test_other_only_words_count_by_default() {
        let mut analyzer = Analyzer::new();
        analyzer.add_words(["కమలం", "42"]);
        let report = analyzer.report();

        assert_eq!(report.total_words, 2);
        assert_eq!(report.total_syllables, 6);
    }
}
