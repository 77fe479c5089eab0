//! Text normalization applied before pattern matching.

use crate::interpreter::vocab::{number_word_alternation, number_word_value};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static NUMBER_WORD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)\b(?:{})\b", number_word_alternation()))
        .expect("valid number word regex")
});

/// Lowercases `text` and replaces standalone number words with digits.
///
/// Only whole words are replaced: `three` becomes `3`, while `threesome`
/// and `someone` are left untouched.
pub fn normalize_command(text: &str) -> String {
    replace_number_words(&text.to_lowercase())
}

/// Replaces standalone number words with their digit strings.
pub fn replace_number_words(text: &str) -> String {
    NUMBER_WORD_RE
        .replace_all(text, |caps: &Captures<'_>| {
            let word = &caps[0];
            number_word_value(word)
                .map(|value| value.to_string())
                .unwrap_or_else(|| word.to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::{normalize_command, replace_number_words};

    #[test]
    fn replaces_whole_words_only() {
        assert_eq!(replace_number_words("top three"), "top 3");
        assert_eq!(replace_number_words("someone tenth"), "someone tenth");
        assert_eq!(replace_number_words("seventeen seven"), "17 7");
    }

    #[test]
    fn replacement_is_case_insensitive() {
        assert_eq!(replace_number_words("Top FIVE"), "Top 5");
    }

    #[test]
    fn normalize_lowercases_before_replacing() {
        assert_eq!(
            normalize_command("Bottom Twenty in MARCH 2024"),
            "bottom 20 in march 2024"
        );
    }

    #[test]
    fn compound_words_are_replaced_individually() {
        assert_eq!(replace_number_words("twenty five"), "20 5");
        assert_eq!(replace_number_words("one hundred"), "1 100");
    }
}
