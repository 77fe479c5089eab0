//! Ordered command matchers.
//!
//! # Responsibility
//! - Recognize one command shape each and extract its fields.
//! - Never fail: a shape that does not fit returns `None`.
//!
//! # Invariants
//! - Input is already lowercased and number-normalized.
//! - Every returned query passes `NormalizedQuery::validate()`.

use crate::interpreter::vocab::{month_alternation, month_number};
use crate::model::query::{NormalizedQuery, QueryKind};
use once_cell::sync::Lazy;
use regex::Regex;

static RANKED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\b(top|bottom)\b.*?([0-9]+)").expect("valid ranked regex"));
static ALL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\ball\b").expect("valid all regex"));
static RANKING_KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:top|bottom)\b").expect("valid ranking keyword regex"));
static KEYWORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:top|bottom|all)\b").expect("valid keyword regex"));
static MONTH_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"\b({})\b", month_alternation())).expect("valid month regex")
});
static YEAR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b([0-9]{4})\b").expect("valid year regex"));
static MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    let months = month_alternation();
    Regex::new(&format!(
        r"\b(?:(?P<m1>{months})[\s,]+(?P<y1>[0-9]{{4}})|(?P<y2>[0-9]{{4}})[\s,]+(?P<m2>{months}))\b"
    ))
    .expect("valid month/year regex")
});

/// One recognizable command shape.
pub trait CommandMatcher: Sync {
    /// Short label used in diagnostics.
    fn name(&self) -> &'static str;

    /// Returns the structured query when `text` has this matcher's shape.
    fn try_match(&self, text: &str) -> Option<NormalizedQuery>;
}

/// `top N ...` / `bottom N ...`, with optional trailing month and year.
pub struct RankedMatcher;

/// `all ...` with an optional month and a required year.
pub struct AllMatcher;

/// Bare `march 2024` / `2024 march` with no ranking or `all` keyword.
pub struct MonthYearMatcher;

impl CommandMatcher for RankedMatcher {
    fn name(&self) -> &'static str {
        "ranked"
    }

    fn try_match(&self, text: &str) -> Option<NormalizedQuery> {
        let caps = RANKED_RE.captures(text)?;
        let kind = match &caps[1] {
            "top" => QueryKind::Top,
            _ => QueryKind::Bottom,
        };
        let count = parse_count(&caps[2])?;
        let tail_start = caps.get(0).map_or(text.len(), |whole| whole.end());
        let (month, year) = find_month_and_year(&text[tail_start..]);

        Some(match kind {
            QueryKind::Top => NormalizedQuery::top(count, month, year),
            _ => NormalizedQuery::bottom(count, month, year),
        })
    }
}

impl CommandMatcher for AllMatcher {
    fn name(&self) -> &'static str {
        "all"
    }

    fn try_match(&self, text: &str) -> Option<NormalizedQuery> {
        // A ranking keyword belongs to the ranked shape even when its count
        // was unusable; `top 0 of all 2024` is not an `all` filter.
        if RANKING_KEYWORD_RE.is_match(text) {
            return None;
        }
        let keyword = ALL_RE.find(text)?;
        let (month, year) = find_month_and_year(&text[keyword.end()..]);
        // A month without a year is not an accepted filter here; bare `all`
        // falls through to the reset listing instead.
        let year = year?;
        Some(NormalizedQuery::all(month, Some(year)))
    }
}

impl CommandMatcher for MonthYearMatcher {
    fn name(&self) -> &'static str {
        "month_year"
    }

    fn try_match(&self, text: &str) -> Option<NormalizedQuery> {
        if KEYWORD_RE.is_match(text) {
            return None;
        }
        let caps = MONTH_YEAR_RE.captures(text)?;
        let month_text = caps.name("m1").or_else(|| caps.name("m2"))?.as_str();
        let year_text = caps.name("y1").or_else(|| caps.name("y2"))?.as_str();

        let month = month_number(month_text)?;
        let year = parse_year(year_text)?;
        Some(NormalizedQuery::all(Some(month), Some(year)))
    }
}

static RANKED: RankedMatcher = RankedMatcher;
static ALL: AllMatcher = AllMatcher;
static MONTH_YEAR: MonthYearMatcher = MonthYearMatcher;
static MATCHERS: [&dyn CommandMatcher; 3] = [&RANKED, &ALL, &MONTH_YEAR];

/// Matchers in priority order; the first one that matches wins.
pub fn matchers() -> &'static [&'static dyn CommandMatcher] {
    &MATCHERS
}

/// Finds the first month name and the first 4-digit year in `text`.
fn find_month_and_year(text: &str) -> (Option<u32>, Option<i32>) {
    let month = MONTH_RE
        .captures(text)
        .and_then(|caps| month_number(&caps[1]));
    let year = YEAR_RE.captures(text).and_then(|caps| parse_year(&caps[1]));
    (month, year)
}

/// A count must be a positive integer that fits in `u32`.
fn parse_count(digits: &str) -> Option<u32> {
    digits.parse::<u32>().ok().filter(|count| *count > 0)
}

fn parse_year(digits: &str) -> Option<i32> {
    digits.parse::<i32>().ok()
}

#[cfg(test)]
mod tests {
    use super::{
        matchers, parse_count, AllMatcher, CommandMatcher, MonthYearMatcher, RankedMatcher,
    };
    use crate::model::query::NormalizedQuery;

    #[test]
    fn matchers_are_in_priority_order() {
        let names = matchers().iter().map(|m| m.name()).collect::<Vec<_>>();
        assert_eq!(names, vec!["ranked", "all", "month_year"]);
    }

    #[test]
    fn ranked_matcher_accepts_non_adjacent_count() {
        assert_eq!(
            RankedMatcher.try_match("show me the top selling 4"),
            Some(NormalizedQuery::top(4, None, None))
        );
    }

    #[test]
    fn ranked_matcher_reads_year_before_month() {
        assert_eq!(
            RankedMatcher.try_match("bottom 2 for 2025 in january"),
            Some(NormalizedQuery::bottom(2, Some(1), Some(2025)))
        );
    }

    #[test]
    fn ranked_matcher_ignores_month_before_count() {
        assert_eq!(
            RankedMatcher.try_match("top march 3"),
            Some(NormalizedQuery::top(3, None, None))
        );
    }

    #[test]
    fn ranked_matcher_requires_whole_keyword() {
        assert_eq!(RankedMatcher.try_match("stop 3"), None);
        assert_eq!(RankedMatcher.try_match("topping 3"), None);
    }

    #[test]
    fn ranked_matcher_rejects_zero_and_overflowing_counts() {
        assert_eq!(RankedMatcher.try_match("top 0"), None);
        assert_eq!(RankedMatcher.try_match("top 99999999999999999999"), None);
    }

    #[test]
    fn parse_count_accepts_only_positive_u32() {
        assert_eq!(parse_count("7"), Some(7));
        assert_eq!(parse_count("0"), None);
        assert_eq!(parse_count("4294967296"), None);
    }

    #[test]
    fn all_matcher_requires_year() {
        assert_eq!(AllMatcher.try_match("all products in march"), None);
        assert_eq!(
            AllMatcher.try_match("all 2024 march"),
            Some(NormalizedQuery::all(Some(3), Some(2024)))
        );
    }

    #[test]
    fn month_year_matcher_accepts_both_orders() {
        assert_eq!(
            MonthYearMatcher.try_match("sales 2024 march"),
            Some(NormalizedQuery::all(Some(3), Some(2024)))
        );
        assert_eq!(
            MonthYearMatcher.try_match("june, 2025"),
            Some(NormalizedQuery::all(Some(6), Some(2025)))
        );
    }

    #[test]
    fn all_matcher_rejects_ranking_keywords() {
        assert_eq!(AllMatcher.try_match("top 0 products of all 2024"), None);
        assert_eq!(AllMatcher.try_match("bottom of all 2024"), None);
    }

    #[test]
    fn digits_must_be_ascii() {
        assert_eq!(RankedMatcher.try_match("top \u{0663}"), None);
        let arabic_indic_year = "\u{0662}\u{0660}\u{0662}\u{0664}";
        assert_eq!(
            MonthYearMatcher.try_match(&format!("march {arabic_indic_year}")),
            None
        );
        assert_eq!(
            AllMatcher.try_match(&format!("all {arabic_indic_year}")),
            None
        );
    }

    #[test]
    fn month_year_matcher_requires_adjacency_and_no_keywords() {
        assert_eq!(MonthYearMatcher.try_match("march sales of 2024"), None);
        assert_eq!(MonthYearMatcher.try_match("all march 2024"), None);
    }
}
