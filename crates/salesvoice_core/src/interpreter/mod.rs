//! Spoken-command interpreter.
//!
//! # Responsibility
//! - Turn a finished transcript into a `NormalizedQuery`.
//! - Keep the whole pipeline total: every input maps to a valid query.
//!
//! # Invariants
//! - Number words are normalized before any matcher runs.
//! - Matchers run in fixed priority order; the first match wins.
//! - `QueryKind::None` is the only failure signal.

pub mod matcher;
pub mod normalize;
pub mod vocab;

use crate::model::query::NormalizedQuery;
use log::debug;
use matcher::matchers;
use normalize::normalize_command;

/// Parses a spoken command such as `"top three products in march 2024"`.
///
/// Returns `NormalizedQuery::none()` when nothing usable is recognized.
pub fn parse(text: &str) -> NormalizedQuery {
    let normalized = normalize_command(text);

    for matcher in matchers() {
        if let Some(query) = matcher.try_match(&normalized) {
            debug!(
                "event=command_parse module=interpreter status=ok matcher={} kind={}",
                matcher.name(),
                query.kind
            );
            return query;
        }
    }

    debug!(
        "event=command_parse module=interpreter status=unmatched input_chars={}",
        normalized.chars().count()
    );
    NormalizedQuery::none()
}
