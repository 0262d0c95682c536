//! Personality inference from free-text quiz responses.
//!
//! Two tiers share the same input contract: at least [`MIN_RESPONSES`]
//! non-blank answers. The basic tier buckets answers into the four public
//! types; the full tier produces one of the sixteen archetype codes through a
//! pluggable [`FullAnalysisStrategy`].

pub mod basic;
pub mod full;

pub use basic::*;
pub use full::*;

use crate::{Result, SayuError};
use serde::{Deserialize, Serialize};

pub const MIN_RESPONSES: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ko,
    En,
}

/// Drops blank answers and enforces the minimum response count.
pub fn prepare_responses(responses: &[String]) -> Result<Vec<String>> {
    let cleaned: Vec<String> = responses
        .iter()
        .map(|r| r.trim())
        .filter(|r| !r.is_empty())
        .map(|r| r.to_lowercase())
        .collect();

    if cleaned.len() < MIN_RESPONSES {
        return Err(SayuError::Validation(format!(
            "At least {} responses are required, got {}",
            MIN_RESPONSES,
            cleaned.len()
        )));
    }
    Ok(cleaned)
}

/// True when `response` (already lower-cased) contains any of `keywords`.
pub(crate) fn mentions_any(response: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| response.contains(k))
}

/// `round(part / total * 100)` clamped to 0..=100.
pub(crate) fn percent(part: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let value = (part as f64 / total as f64 * 100.0).round();
    value.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_answers_do_not_count() {
        let responses = vec!["one".to_string(), "   ".to_string(), "two".to_string()];
        assert!(matches!(
            prepare_responses(&responses),
            Err(SayuError::Validation(_))
        ));
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(0, 0), 0);
        assert_eq!(percent(5, 5), 100);
    }
}
