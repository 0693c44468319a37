//! Keyword filter applied to article body text.
//!
//! Matching is a plain case-sensitive substring test. There is no stemming
//! and no word-boundary check, so "GOP" also matches inside "GOPAC" and
//! "Democratic" and "Democrats" are tested independently.

/// Keywords searched for in every article body, in reporting order.
pub const KEYWORDS: [&str; 4] = ["Republican", "Democratic", "GOP", "Democrats"];

/// Return the keywords from [`KEYWORDS`] that occur in `body`, preserving
/// the declaration order.
pub fn match_keywords(body: &str) -> Vec<String> {
    KEYWORDS
        .iter()
        .filter(|keyword| body.contains(*keyword))
        .map(|keyword| keyword.to_string())
        .collect()
}
