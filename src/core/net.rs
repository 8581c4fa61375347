// src/core/net.rs

use std::time::Duration;

use crate::core::html::{self, Tag};
use crate::error::ScrapeError;

/// External fetch collaborator: one URL in, one parsed document out.
/// Implementations own any session/retry policy; the page walker does
/// none of that and passes failures through untouched.
pub trait Fetch {
    fn fetch(&mut self, url: &str) -> Result<Tag, ScrapeError>;
}

impl<F: Fetch + ?Sized> Fetch for &mut F {
    fn fetch(&mut self, url: &str) -> Result<Tag, ScrapeError> {
        (**self).fetch(url)
    }
}

/// Blocking HTTPS fetcher. One request at a time, matching the
/// single-threaded traversal model.
pub struct HttpFetch {
    client: reqwest::blocking::Client,
}

impl HttpFetch {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(15))
            .user_agent(concat!("ttx_scrape/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ScrapeError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Fetch for HttpFetch {
    fn fetch(&mut self, url: &str) -> Result<Tag, ScrapeError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScrapeError::Transport(e.to_string()))?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Transport(format!("HTTP {status} for {url}")));
        }
        let body = resp
            .text()
            .map_err(|e| ScrapeError::Transport(e.to_string()))?;
        Ok(html::parse_fragment(&body))
    }
}
