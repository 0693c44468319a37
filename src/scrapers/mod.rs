//! News source scrapers.
//!
//! Scraping happens in two phases:
//!
//! 1. **Listing**: parse the homepage for article links not seen before
//! 2. **Details**: fetch each article page and extract byline, body text and
//!    keyword matches
//!
//! Pages are fetched one at a time. Failed fetches are logged and degrade to
//! empty results instead of failing the cycle.

pub mod cbsnews;
