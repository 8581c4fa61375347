// tests/decode_rows.rs
//
// Whole-document decoding and snapshot comparison, over fixture markup
// shaped like the broadcaster service's output.
//
use ttx_scrape::core::html::parse_fragment;
use ttx_scrape::scrape::{pages_equal, to_teletext};
use ttx_scrape::specs;

const PAGE_FIXTURE: &str = concat!(
    r#"<div id="ttxEnv">"#,
    r#"<pre id="ttxPageNum">100</pre>"#,
    r#"<pre id="ttxSubpageNum">1</pre>"#,
    r#"<pre id="ttxNumSubpages">1</pre>"#,
    r#"<pre id="ttxNextPageNum">104</pre>"#,
    r#"</div>"#,
    r#"<div id="ttxPage">"#,
    // header row: page number and clock
    r#"<pre class="ttxRow"><span class="bg0 fg7">100 {CLOCK}</span></pre>"#,
    // body row: colored text plus a page link
    r#"<pre class="ttxRow"><span class="bg4"><span class="fg7">ALERT</span>"#,
    r#"<a href="?page=101">MORE</a></span></pre>"#,
    // mosaic row: two glyphs, the second recoloring the foreground
    r#"<pre class="ttxRow"><span class="g1s_7f"> </span><span class="g1c130"> </span></pre>"#,
    r#"</div>"#,
);

fn fixture_page(clock: &str) -> ttx_scrape::TeletextPage {
    let html = PAGE_FIXTURE.replace("{CLOCK}", clock);
    let doc = parse_fragment(&html);
    to_teletext(&doc, &specs::swr::SWR_RP.mapper()).expect("fixture decodes")
}

#[test]
fn fixture_decodes_to_three_rows() {
    let tt = fixture_page("12:01:33");
    assert_eq!(tt.lines.len(), 3);

    let header = &tt.lines[0];
    assert_eq!(header[0].text, "100 12:01:33");
    assert_eq!(header[0].bg, 'b');
    assert_eq!(header[0].fg, 'w');

    let body = &tt.lines[1];
    assert_eq!(body.len(), 2);
    assert_eq!((body[0].text.as_str(), body[0].fg, body[0].bg), ("ALERT", 'w', 'l'));
    assert_eq!(body[1].text, "MORE");
    assert_eq!(body[1].link.map(|l| (l.page, l.subpage)), Some((101, None)));

    let mosaic = &tt.lines[2];
    assert_eq!(mosaic.len(), 2);
    assert_eq!(mosaic[0].text, "\u{2588}");
    assert_eq!(mosaic[0].fg, 'w'); // g1s leaves the foreground alone
    assert_eq!(mosaic[1].text, "\u{1fb0f}"); // G1 0x30, lower-left cell
    assert_eq!(mosaic[1].fg, 'r'); // g1c recolors
}

#[test]
fn decoding_twice_gives_equal_pages() {
    let a = fixture_page("12:01:33");
    let b = fixture_page("12:01:33");
    assert_eq!(a, b);
    assert!(pages_equal(&a, &b));
}

#[test]
fn clock_only_changes_compare_as_stable() {
    let a = fixture_page("12:01:33");
    let b = fixture_page("12:01:48");
    assert_ne!(a, b); // line 0 really differs
    assert!(pages_equal(&a, &b)); // but the page counts as unchanged
}

#[test]
fn empty_document_compares_as_changed() {
    let doc = parse_fragment(r#"<div id="ttxPage"></div>"#);
    let tt = to_teletext(&doc, &specs::swr::SWR_RP.mapper()).expect("empty page decodes");
    assert!(tt.is_empty());
    assert!(!pages_equal(&tt, &tt.clone()));
}
