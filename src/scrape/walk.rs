// src/scrape/walk.rs
// Lazy page-chain traversal: one fetch per step, advance driven by the
// server's own metadata, stop on the next-page wrap-around.

use crate::core::html::Tag;
use crate::core::net::Fetch;
use crate::error::ScrapeError;
use crate::params::{FIRST_PAGE, FIRST_SUBPAGE, PAGE_CEILING, URL_TMPL};
use crate::specs::SourceSpec;

/// The (page, subpage) pointer driving traversal. Advanced exactly once
/// per fetched document; across pages the next page number comes from
/// the server, never from local arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCursor {
    pub page: u32,
    pub subpage: u32,
}

impl PageCursor {
    pub fn start() -> Self {
        Self { page: FIRST_PAGE, subpage: FIRST_SUBPAGE }
    }
}

/// The four integers of the document's metadata region.
struct PageMeta {
    page: u32,
    subpage: u32,
    subpage_count: u32,
    next_page: u32,
}

/// Iterator over one full forward cycle of a source's page chain.
/// Yields `(page, subpage, document)`; length is unknown in advance but
/// finite. A document that fails the consistency check is still yielded
/// (it was already fetched for the consumer); the error surfaces on the
/// following `next()`, after which the iterator stays exhausted.
pub struct PageWalker<'a, F: Fetch> {
    spec: &'a SourceSpec,
    fetch: F,
    cursor: Option<PageCursor>,
    pending: Option<ScrapeError>,
}

impl<'a, F: Fetch> PageWalker<'a, F> {
    pub fn new(spec: &'a SourceSpec, fetch: F) -> Self {
        Self {
            spec,
            fetch,
            cursor: Some(PageCursor::start()),
            pending: None,
        }
    }

    fn build_url(&self, cur: PageCursor) -> String {
        URL_TMPL
            .replace("{page}", &cur.page.to_string())
            .replace("{sub}", &cur.subpage.to_string())
            .replace("{stream}", self.spec.stream)
    }

    /// Validate the document's reported identity against the request and
    /// derive the next cursor from it. Any failure is parked until the
    /// consumer asks again.
    fn arm_next(&mut self, cur: PageCursor, doc: &Tag) {
        let meta = match read_meta(doc) {
            Ok(meta) => meta,
            Err(e) => {
                self.pending = Some(e);
                self.cursor = None;
                return;
            }
        };
        if meta.page != cur.page || meta.subpage != cur.subpage {
            self.pending = Some(ScrapeError::Consistency {
                requested_page: cur.page,
                requested_subpage: cur.subpage,
                reported_page: meta.page,
                reported_subpage: meta.subpage,
            });
            self.cursor = None;
            return;
        }
        if cur.subpage < meta.subpage_count {
            self.cursor = Some(PageCursor { page: cur.page, subpage: cur.subpage + 1 });
        } else if meta.next_page < cur.page {
            // wrapped around: one full forward cycle is complete
            self.cursor = None;
        } else {
            self.cursor = Some(PageCursor { page: meta.next_page, subpage: FIRST_SUBPAGE });
        }
    }
}

fn read_meta(doc: &Tag) -> Result<PageMeta, ScrapeError> {
    let env = doc
        .find_by_id("ttxEnv")
        .ok_or_else(|| ScrapeError::Document(s!("ttxEnv region missing")))?;
    Ok(PageMeta {
        page: meta_int(env, "ttxPageNum")?,
        subpage: meta_int(env, "ttxSubpageNum")?,
        subpage_count: meta_int(env, "ttxNumSubpages")?,
        next_page: meta_int(env, "ttxNextPageNum")?,
    })
}

fn meta_int(env: &Tag, id: &str) -> Result<u32, ScrapeError> {
    let text = env
        .find_by_id(id)
        .ok_or_else(|| ScrapeError::Document(format!("{id} missing")))?
        .text();
    text.trim()
        .parse()
        .map_err(|_| ScrapeError::Document(format!("{id} is not a number: {text:?}")))
}

impl<'a, F: Fetch> Iterator for PageWalker<'a, F> {
    type Item = Result<(u32, u32, Tag), ScrapeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(err) = self.pending.take() {
            loge!("{}: traversal aborted: {err}", self.spec.name);
            return Some(Err(err));
        }
        let cur = self.cursor?;
        if cur.page >= PAGE_CEILING {
            // structural ceiling; real termination is the wrap-around
            return None;
        }
        let url = self.build_url(cur);
        logd!("{}: fetching {}/{}", self.spec.name, cur.page, cur.subpage);
        let doc = match self.fetch.fetch(&url) {
            Ok(doc) => doc,
            Err(e) => {
                self.cursor = None;
                return Some(Err(e));
            }
        };
        self.arm_next(cur, &doc);
        Some(Ok((cur.page, cur.subpage, doc)))
    }
}
