//! In-memory record of article URLs already handled during this process.
//!
//! Nothing is persisted; a restart starts from an empty set and will log
//! previously seen articles again.

use std::collections::HashSet;

/// Insert-only set of article URLs.
#[derive(Debug, Default)]
pub struct SeenUrls {
    urls: HashSet<String>,
}

impl SeenUrls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    /// Record `url`. Returns `false` if it was already present.
    pub fn add(&mut self, url: &str) -> bool {
        if self.urls.contains(url) {
            return false;
        }
        self.urls.insert(url.to_string())
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}
