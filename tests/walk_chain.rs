// tests/walk_chain.rs
//
// Traversal over synthetic page chains, with a scripted Fetch standing
// in for the real transport.
//
use ttx_scrape::core::html::{Tag, parse_fragment};
use ttx_scrape::core::net::Fetch;
use ttx_scrape::error::ScrapeError;
use ttx_scrape::scrape::PageWalker;
use ttx_scrape::specs;

/// Serves documents for a fixed chain description: one `(page, subpage
/// count)` entry per page, pages visited in slice order, last page
/// pointing back to the first.
struct ChainFetch {
    chain: Vec<(u32, u32)>,
    /// (page, subpage) → reported page override, to fake stale content
    lie: Option<(u32, u32, u32)>,
    fetched: Vec<(u32, u32)>,
}

impl ChainFetch {
    fn new(chain: &[(u32, u32)]) -> Self {
        Self { chain: chain.to_vec(), lie: None, fetched: Vec::new() }
    }

    fn doc_for(&self, page: u32, subpage: u32) -> String {
        let idx = self
            .chain
            .iter()
            .position(|(p, _)| *p == page)
            .unwrap_or_else(|| panic!("unexpected fetch of page {page}"));
        let (_, num_subpages) = self.chain[idx];
        let next_page = self.chain.get(idx + 1).map(|(p, _)| *p).unwrap_or(self.chain[0].0);
        let reported_page = match self.lie {
            Some((p, s, fake)) if p == page && s == subpage => fake,
            _ => page,
        };
        format!(
            concat!(
                r#"<div id="ttxEnv">"#,
                r#"<pre id="ttxPageNum">{}</pre>"#,
                r#"<pre id="ttxSubpageNum">{}</pre>"#,
                r#"<pre id="ttxNumSubpages">{}</pre>"#,
                r#"<pre id="ttxNextPageNum">{}</pre>"#,
                r#"</div>"#,
                r#"<div id="ttxPage"><pre class="ttxRow">{} {}</pre></div>"#,
            ),
            reported_page, subpage, num_subpages, next_page, page, subpage
        )
    }
}

impl Fetch for ChainFetch {
    fn fetch(&mut self, url: &str) -> Result<Tag, ScrapeError> {
        let num = |key: &str| -> u32 {
            let at = url.find(key).unwrap_or_else(|| panic!("no {key} in {url}"));
            url[at + key.len()..]
                .chars()
                .take_while(|c| c.is_ascii_digit())
                .collect::<String>()
                .parse()
                .unwrap_or_else(|_| panic!("bad {key} in {url}"))
        };
        let (page, subpage) = (num("page="), num("sub="));
        self.fetched.push((page, subpage));
        Ok(parse_fragment(&self.doc_for(page, subpage)))
    }
}

#[test]
fn full_cycle_emits_every_subpage_once() {
    let chain = [(100, 2), (110, 1), (115, 3)];
    let walker = PageWalker::new(&specs::swr::SWR_RP, ChainFetch::new(&chain));

    let mut seen = Vec::new();
    for item in walker {
        let (page, subpage, doc) = item.expect("clean chain");
        assert!(doc.find_by_id("ttxPage").is_some());
        seen.push((page, subpage));
    }
    assert_eq!(
        seen,
        vec![(100, 1), (100, 2), (110, 1), (115, 1), (115, 2), (115, 3)]
    );
}

#[test]
fn subpages_increase_pages_never_decrease_until_the_wrap() {
    let chain = [(100, 1), (104, 4), (200, 2), (650, 1)];
    let walker = PageWalker::new(&specs::swr::SWR_RP, ChainFetch::new(&chain));

    let seen: Vec<(u32, u32)> = walker.map(|r| r.map(|(p, s, _)| (p, s)).expect("clean chain")).collect();
    let total: usize = [1usize, 4, 2, 1].iter().sum();
    assert_eq!(seen.len(), total);
    for pair in seen.windows(2) {
        let (p0, s0) = pair[0];
        let (p1, s1) = pair[1];
        assert!(p1 >= p0);
        if p1 == p0 {
            assert_eq!(s1, s0 + 1);
        } else {
            assert_eq!(s1, 1);
        }
    }
}

#[test]
fn wrap_from_the_last_valid_page() {
    let chain = [(100, 1), (899, 1)];
    let walker = PageWalker::new(&specs::swr::SWR_RP, ChainFetch::new(&chain));
    let seen: Vec<(u32, u32)> = walker.map(|r| r.map(|(p, s, _)| (p, s)).expect("clean chain")).collect();
    assert_eq!(seen, vec![(100, 1), (899, 1)]);
}

#[test]
fn ceiling_bounds_a_chain_that_never_wraps() {
    // a server pointing past the valid page range must not keep the
    // walker alive
    struct Runaway;
    impl Fetch for Runaway {
        fn fetch(&mut self, _url: &str) -> Result<Tag, ScrapeError> {
            Ok(parse_fragment(
                r#"<div id="ttxEnv">
                     <pre id="ttxPageNum">100</pre>
                     <pre id="ttxSubpageNum">1</pre>
                     <pre id="ttxNumSubpages">1</pre>
                     <pre id="ttxNextPageNum">950</pre>
                   </div>"#,
            ))
        }
    }
    let mut walker = PageWalker::new(&specs::swr::SWR_RP, Runaway);
    assert!(walker.next().expect("100/1").is_ok());
    assert!(walker.next().is_none());
}

#[test]
fn consistency_failure_surfaces_after_the_bad_page() {
    let mut fetch = ChainFetch::new(&[(100, 1), (150, 1), (160, 1)]);
    fetch.lie = Some((150, 1, 151)); // server reports 151 for 150
    let mut walker = PageWalker::new(&specs::swr::SWR_RP, fetch);

    let first = walker.next().expect("first item").expect("100/1 ok");
    assert_eq!((first.0, first.1), (100, 1));

    // the mismatched document is still delivered...
    let second = walker.next().expect("second item").expect("150/1 delivered");
    assert_eq!((second.0, second.1), (150, 1));

    // ...then the walk dies, and stays dead
    match walker.next() {
        Some(Err(ScrapeError::Consistency {
            requested_page: 150,
            requested_subpage: 1,
            reported_page: 151,
            reported_subpage: 1,
        })) => {}
        other => panic!("expected consistency error, got {other:?}"),
    }
    assert!(walker.next().is_none());
    assert!(walker.next().is_none());
}

#[test]
fn no_fetch_happens_after_the_consumer_stops() {
    let chain = [(100, 2), (110, 1)];
    let mut fetch = ChainFetch::new(&chain);
    {
        let mut walker = PageWalker::new(&specs::swr::SWR_RP, &mut fetch);
        walker.next().expect("first").expect("ok");
        // consumer walks away here
    }
    assert_eq!(fetch.fetched, vec![(100, 1)]);
}

#[test]
fn malformed_metadata_surfaces_after_the_yield() {
    struct NoMeta;
    impl Fetch for NoMeta {
        fn fetch(&mut self, _url: &str) -> Result<Tag, ScrapeError> {
            Ok(parse_fragment(r#"<div id="ttxPage"><pre class="ttxRow">x</pre></div>"#))
        }
    }
    let mut walker = PageWalker::new(&specs::swr::SWR_RP, NoMeta);
    assert!(walker.next().expect("yielded").is_ok());
    assert!(matches!(walker.next(), Some(Err(ScrapeError::Document(_)))));
    assert!(walker.next().is_none());
}
