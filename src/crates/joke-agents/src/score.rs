//! Humor score extraction
//!
//! The critic is asked for a 0-10 rating but replies in free text, so the
//! score is the first standalone run of one or two ASCII digits. A reply
//! that mentions some other number before the rating ("2 puns, so 8/10")
//! yields that other number; callers live with this.

use regex::Regex;
use std::sync::LazyLock;

/// Score used when the critique carries no digits
pub const DEFAULT_HUMOR_SCORE: u8 = 5;

static SCORE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[0-9]{1,2}\b").expect("score pattern is valid"));

/// First one- or two-digit number in `text`, or [`DEFAULT_HUMOR_SCORE`].
///
/// Values above 10 are returned as found.
pub fn extract_humor_score(text: &str) -> u8 {
    SCORE_PATTERN
        .find(text)
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_HUMOR_SCORE)
}
