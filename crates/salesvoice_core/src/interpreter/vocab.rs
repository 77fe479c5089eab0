//! Static English vocabularies for spoken commands.
//!
//! # Invariants
//! - Tables are immutable and built once per process.
//! - Keys are lowercase; lookups lowercase their input.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Number words replaced by digits before pattern matching.
pub const NUMBER_WORDS: &[(&str, u32)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
    ("hundred", 100),
];

/// English month names in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

static NUMBER_LOOKUP: Lazy<HashMap<&'static str, u32>> =
    Lazy::new(|| NUMBER_WORDS.iter().copied().collect());

static MONTH_LOOKUP: Lazy<HashMap<&'static str, u32>> = Lazy::new(|| {
    MONTH_NAMES
        .iter()
        .zip(1u32..)
        .map(|(name, number)| (*name, number))
        .collect()
});

/// Maps a number word to its value, case-insensitively.
pub fn number_word_value(word: &str) -> Option<u32> {
    NUMBER_LOOKUP.get(word.to_lowercase().as_str()).copied()
}

/// Maps a month name to 1-12, case-insensitively.
///
/// Unknown tokens return `None`; callers treat that as an absent month.
pub fn month_number(name: &str) -> Option<u32> {
    MONTH_LOOKUP.get(name.to_lowercase().as_str()).copied()
}

/// Regex alternation over all month names, e.g. `january|february|...`.
pub(crate) fn month_alternation() -> String {
    MONTH_NAMES.join("|")
}

/// Regex alternation over all number words, longest first.
///
/// Longest-first keeps `seventeen` from being tried as `seven` + suffix.
pub(crate) fn number_word_alternation() -> String {
    let mut words = NUMBER_WORDS.iter().map(|(word, _)| *word).collect::<Vec<_>>();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    words.join("|")
}

#[cfg(test)]
mod tests {
    use super::{month_number, number_word_alternation, number_word_value, MONTH_NAMES};

    #[test]
    fn month_number_is_case_insensitive() {
        assert_eq!(month_number("March"), Some(3));
        assert_eq!(month_number("DECEMBER"), Some(12));
        assert_eq!(month_number("smarch"), None);
    }

    #[test]
    fn every_month_maps_to_its_position() {
        for (index, name) in MONTH_NAMES.iter().enumerate() {
            assert_eq!(month_number(name), Some(index as u32 + 1));
        }
    }

    #[test]
    fn number_word_value_covers_tens_and_hundred() {
        assert_eq!(number_word_value("Zero"), Some(0));
        assert_eq!(number_word_value("seventeen"), Some(17));
        assert_eq!(number_word_value("ninety"), Some(90));
        assert_eq!(number_word_value("hundred"), Some(100));
        assert_eq!(number_word_value("thousand"), None);
    }

    #[test]
    fn number_alternation_lists_longer_words_first() {
        let alternation = number_word_alternation();
        let seventeen = alternation.find("seventeen").unwrap();
        let seven = alternation.find("|seven|").unwrap();
        assert!(seventeen < seven);
    }
}
