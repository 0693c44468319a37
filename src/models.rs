//! Data models for articles as they move through a polling cycle.
//!
//! - [`ArticleCandidate`]: what the homepage listing tells us about an article
//! - [`ArticleDetails`]: what the article page itself tells us
//! - [`ArticleSummary`]: the merged record that gets written to the log file

/// Placeholder used when a homepage block has no headline.
pub const NO_TITLE: &str = "No title";
/// Placeholder used when a homepage block has no dek/summary.
pub const NO_SUMMARY: &str = "No summary";
/// Placeholder used when the article page has no byline or could not be fetched.
pub const UNKNOWN_AUTHOR: &str = "Unknown author";

/// An article discovered on the homepage that still needs its page fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleCandidate {
    /// Headline text, or [`NO_TITLE`].
    pub title: String,
    /// Dek text, or [`NO_SUMMARY`].
    pub summary: String,
    /// Absolute article URL.
    pub url: String,
}

/// Fields extracted from an individual article page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetails {
    /// Byline author, or [`UNKNOWN_AUTHOR`].
    pub author: String,
    /// Stripped paragraph text joined with single spaces.
    pub body: String,
    /// Keywords found in `body`, in declaration order.
    pub matched_keywords: Vec<String>,
}

impl ArticleDetails {
    /// The recovered result for an article whose page could not be fetched.
    pub fn unavailable() -> Self {
        Self {
            author: UNKNOWN_AUTHOR.to_string(),
            body: String::new(),
            matched_keywords: Vec::new(),
        }
    }
}

/// A fully enriched article, ready to be appended to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleSummary {
    pub title: String,
    pub author: String,
    pub summary: String,
    pub url: String,
    pub matched_keywords: Vec<String>,
}

impl ArticleSummary {
    /// Merge homepage and article-page data. The body text is dropped here;
    /// only the matched keywords survive into the log.
    pub fn from_parts(candidate: ArticleCandidate, details: ArticleDetails) -> Self {
        Self {
            title: candidate.title,
            author: details.author,
            summary: candidate.summary,
            url: candidate.url,
            matched_keywords: details.matched_keywords,
        }
    }

    /// Whether this record is eligible for the log.
    pub fn has_matches(&self) -> bool {
        !self.matched_keywords.is_empty()
    }
}
