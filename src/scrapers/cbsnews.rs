//! CBS News homepage and article scraper.
//!
//! The homepage lists stories as `<article>` blocks. Each block links to the
//! story with its first `<a>`, and carries the headline in `h4.item__hed` and
//! the dek in `p.item__dek`. Article pages carry the byline in
//! `span.byline__author__text` and the story text in plain `<p>` elements.
//!
//! Missing fields are never errors: lookups return `Option` and the caller
//! substitutes the placeholders from [`crate::models`].

use crate::dedup::SeenUrls;
use crate::fetcher::FetchHtml;
use crate::keywords::match_keywords;
use crate::models::{
    ArticleCandidate, ArticleDetails, ArticleSummary, NO_SUMMARY, NO_TITLE, UNKNOWN_AUTHOR,
};
use crate::utils::truncate_for_log;
use futures::stream::{self, StreamExt};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, error, info, instrument, warn};
use url::Url;

/// Root listing page polled every cycle.
pub const HOMEPAGE_URL: &str = "https://www.cbsnews.com/";

static ARTICLE_BLOCK: Lazy<Selector> = Lazy::new(|| Selector::parse("article").unwrap());
static LINK: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());
static HEADLINE: Lazy<Selector> = Lazy::new(|| Selector::parse("h4.item__hed").unwrap());
static DEK: Lazy<Selector> = Lazy::new(|| Selector::parse("p.item__dek").unwrap());
static BYLINE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("span.byline__author__text").unwrap());
static PARAGRAPH: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Text of an element with every fragment trimmed and empty fragments dropped.
fn stripped_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

fn first_text(scope: ElementRef<'_>, selector: &Selector) -> Option<String> {
    scope.select(selector).next().map(stripped_text)
}

/// Accept only absolute http(s) links; relative paths and other schemes are
/// skipped.
fn absolute_link(href: &str) -> Option<String> {
    let parsed = Url::parse(href).ok()?;
    match parsed.scheme() {
        "http" | "https" => Some(href.to_string()),
        _ => None,
    }
}

/// Parse homepage markup into candidates that have not been seen before.
///
/// Every accepted URL is recorded in `seen` immediately, so a link repeated
/// later on the same page (or on a later cycle) is skipped. Output follows
/// document order.
#[instrument(level = "debug", skip_all, fields(bytes = html.len()))]
pub fn list_articles(html: &str, seen: &mut SeenUrls) -> Vec<ArticleCandidate> {
    let document = Html::parse_document(html);
    let mut candidates = Vec::new();

    for block in document.select(&ARTICLE_BLOCK) {
        let Some(href) = block
            .select(&LINK)
            .next()
            .and_then(|link| link.value().attr("href"))
        else {
            continue;
        };
        let Some(url) = absolute_link(href) else {
            debug!(%href, "Skipping non-absolute article link");
            continue;
        };
        if seen.contains(&url) {
            continue;
        }
        seen.add(&url);

        let title = first_text(block, &HEADLINE).unwrap_or_else(|| NO_TITLE.to_string());
        let summary = first_text(block, &DEK).unwrap_or_else(|| NO_SUMMARY.to_string());
        candidates.push(ArticleCandidate {
            title,
            summary,
            url,
        });
    }

    debug!(count = candidates.len(), seen = seen.len(), "Listed new articles");
    candidates
}

/// Extract author, body text and matched keywords from article markup.
pub fn extract_details(html: &str) -> ArticleDetails {
    let document = Html::parse_document(html);
    let root = document.root_element();

    let author = first_text(root, &BYLINE).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
    let body = document
        .select(&PARAGRAPH)
        .map(stripped_text)
        .collect::<Vec<_>>()
        .join(" ");
    let matched_keywords = match_keywords(&body);

    ArticleDetails {
        author,
        body,
        matched_keywords,
    }
}

/// Fetch one article page and extract its details. A failed fetch is logged
/// and turned into [`ArticleDetails::unavailable`].
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_details(fetcher: &impl FetchHtml, url: &str) -> ArticleDetails {
    match fetcher.fetch(url).await {
        Ok(html) => {
            let details = extract_details(&html);
            debug!(
                author = %details.author,
                keywords = ?details.matched_keywords,
                body = %truncate_for_log(&details.body, 200),
                "Parsed article"
            );
            details
        }
        Err(e) => {
            warn!(error = %e, "Error fetching article details");
            ArticleDetails::unavailable()
        }
    }
}

/// Run one listing pass: fetch the homepage, enrich each new article in turn,
/// and keep only those that mention at least one keyword.
///
/// A homepage failure is logged and yields an empty list.
#[instrument(level = "info", skip_all, fields(%homepage_url))]
pub async fn fetch_news(
    fetcher: &impl FetchHtml,
    homepage_url: &str,
    seen: &mut SeenUrls,
) -> Vec<ArticleSummary> {
    let html = match fetcher.fetch(homepage_url).await {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, "Error fetching news");
            return Vec::new();
        }
    };

    let candidates = list_articles(&html, seen);
    let candidate_count = candidates.len();

    let news: Vec<ArticleSummary> = stream::iter(candidates)
        .then(|candidate| async move {
            let details = fetch_details(fetcher, &candidate.url).await;
            ArticleSummary::from_parts(candidate, details)
        })
        .filter(|article| std::future::ready(article.has_matches()))
        .collect()
        .await;

    info!(
        candidates = candidate_count,
        matched = news.len(),
        "Fetched news"
    );
    news
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetcher::stub::StubFetcher;

    const HOMEPAGE: &str = r#"
        <html><body>
          <article>
            <a href="https://www.cbsnews.com/news/senate-budget/">
              <h4 class="item__hed"> Senate passes budget </h4>
              <p class="item__dek">Vote split along party lines</p>
            </a>
          </article>
          <article>
            <a href="/news/relative-link/"><h4 class="item__hed">Relative</h4></a>
          </article>
          <article>
            <a name="anchor-only"><h4 class="item__hed">No href</h4></a>
          </article>
          <article>
            <a href="https://www.cbsnews.com/news/weather/"></a>
          </article>
          <article>
            <a href="https://www.cbsnews.com/news/senate-budget/">
              <h4 class="item__hed">Duplicate</h4>
            </a>
          </article>
          <article>
            <a href="mailto:tips@cbsnews.com">Send a tip</a>
          </article>
        </body></html>
    "#;

    #[test]
    fn test_list_articles_filters_and_dedups() {
        let mut seen = SeenUrls::new();
        let candidates = list_articles(HOMEPAGE, &mut seen);

        assert_eq!(
            candidates,
            vec![
                ArticleCandidate {
                    title: "Senate passes budget".to_string(),
                    summary: "Vote split along party lines".to_string(),
                    url: "https://www.cbsnews.com/news/senate-budget/".to_string(),
                },
                ArticleCandidate {
                    title: "No title".to_string(),
                    summary: "No summary".to_string(),
                    url: "https://www.cbsnews.com/news/weather/".to_string(),
                },
            ]
        );
        assert_eq!(seen.len(), 2);
        assert!(seen.contains("https://www.cbsnews.com/news/weather/"));
    }

    #[test]
    fn test_list_articles_skips_already_seen() {
        let mut seen = SeenUrls::new();
        seen.add("https://www.cbsnews.com/news/senate-budget/");

        let candidates = list_articles(HOMEPAGE, &mut seen);
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].url, "https://www.cbsnews.com/news/weather/");

        assert!(list_articles(HOMEPAGE, &mut seen).is_empty());
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_list_articles_without_blocks() {
        let mut seen = SeenUrls::new();
        let html = r#"<html><body><a href="https://www.cbsnews.com/x">x</a></body></html>"#;
        assert!(list_articles(html, &mut seen).is_empty());
        assert!(seen.is_empty());
    }

    #[test]
    fn test_extract_details() {
        let html = r#"
            <html><body>
              <span class="byline__author__text"> Jane   Doe </span>
              <p>The <b>GOP</b> leadership met.</p>
              <p>Democrats objected.</p>
            </body></html>
        "#;
        let details = extract_details(html);
        assert_eq!(details.author, "Jane   Doe");
        assert_eq!(details.body, "TheGOPleadership met. Democrats objected.");
        assert_eq!(details.matched_keywords, vec!["GOP", "Democrats"]);
    }

    #[test]
    fn test_extract_details_placeholders() {
        let details = extract_details("<html><body><div>No paragraphs</div></body></html>");
        assert_eq!(details.author, "Unknown author");
        assert!(details.body.is_empty());
        assert!(details.matched_keywords.is_empty());
    }

    #[test]
    fn test_extract_details_keeps_empty_paragraphs_in_join() {
        let details = extract_details("<p>One</p><p>  </p><p>Two</p>");
        assert_eq!(details.body, "One  Two");
    }

    #[tokio::test]
    async fn test_fetch_details_failure_degrades() {
        let fetcher = StubFetcher::new();
        let details = fetch_details(&fetcher, "https://www.cbsnews.com/news/gone/").await;
        assert_eq!(details, ArticleDetails::unavailable());
    }

    #[tokio::test]
    async fn test_fetch_news_keeps_only_matching_articles() {
        let fetcher = StubFetcher::new()
            .with_page(HOMEPAGE_URL, HOMEPAGE)
            .with_page(
                "https://www.cbsnews.com/news/senate-budget/",
                r#"<span class="byline__author__text">Jane Doe</span>
                   <p>Republican senators joined Democrats.</p>"#,
            )
            .with_page(
                "https://www.cbsnews.com/news/weather/",
                "<p>Sunny skies all week.</p>",
            );
        let mut seen = SeenUrls::new();

        let news = fetch_news(&fetcher, HOMEPAGE_URL, &mut seen).await;

        assert_eq!(
            news,
            vec![ArticleSummary {
                title: "Senate passes budget".to_string(),
                author: "Jane Doe".to_string(),
                summary: "Vote split along party lines".to_string(),
                url: "https://www.cbsnews.com/news/senate-budget/".to_string(),
                matched_keywords: vec!["Republican".to_string(), "Democrats".to_string()],
            }]
        );
        assert_eq!(
            fetcher.requests(),
            vec![
                HOMEPAGE_URL,
                "https://www.cbsnews.com/news/senate-budget/",
                "https://www.cbsnews.com/news/weather/",
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_news_article_failure_is_excluded() {
        let fetcher = StubFetcher::new().with_page(
            HOMEPAGE_URL,
            r#"<article><a href="https://www.cbsnews.com/news/gone/">Gone</a></article>"#,
        );
        let mut seen = SeenUrls::new();

        let news = fetch_news(&fetcher, HOMEPAGE_URL, &mut seen).await;
        assert!(news.is_empty());
        assert!(seen.contains("https://www.cbsnews.com/news/gone/"));
    }

    #[tokio::test]
    async fn test_fetch_news_homepage_failure() {
        let fetcher = StubFetcher::new();
        let mut seen = SeenUrls::new();

        let news = fetch_news(&fetcher, HOMEPAGE_URL, &mut seen).await;
        assert!(news.is_empty());
        assert!(seen.is_empty());
        assert_eq!(fetcher.requests(), vec![HOMEPAGE_URL]);
    }
}
