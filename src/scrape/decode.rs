// src/scrape/decode.rs
// Row decoder: one styled markup fragment in, one ordered Line out.
// All decode state is row-local; nothing survives past the row.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::charset::CharsetMapper;
use crate::core::html::{Node, Tag};
use crate::error::ScrapeError;
use crate::params::{DEFAULT_BG, DEFAULT_FG, PALETTE};
use crate::scrape::page::{Block, Line, PageLink, TeletextPage};

fn page_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"page=(\d{3})").expect("static pattern"))
}

fn subpage_link_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"sub=(\d+)").expect("static pattern"))
}

/// Row-scoped decode state, reset for every row. `link` and `special`
/// are one-shot: they apply to exactly the next emitted block.
struct RowState {
    bg: char,
    fg: char,
    link: Option<PageLink>,
    special: Option<char>,
}

impl RowState {
    fn fresh() -> Self {
        Self { bg: DEFAULT_BG, fg: DEFAULT_FG, link: None, special: None }
    }
}

/// Decode one row fragment into its ordered block sequence.
/// Pure: same markup + same mapper always gives the same Line.
pub fn decode_row(row: &Tag, mapper: &CharsetMapper) -> Result<Line, ScrapeError> {
    let mut st = RowState::fresh();
    let mut line = Line::new();

    // depth-first, pre-order, document order
    let mut stack: Vec<&Node> = row.children.iter().rev().collect();
    while let Some(node) = stack.pop() {
        match node {
            Node::Tag(tag) => {
                match tag.name.as_str() {
                    "a" => {
                        if let Some(href) = tag.attr("href") {
                            if let Some(link) = parse_page_link(href) {
                                st.link = Some(link);
                            }
                        }
                    }
                    "span" => {
                        for token in tag.classes() {
                            apply_class_token(token, &mut st, mapper)?;
                        }
                    }
                    _ => {}
                }
                for child in tag.children.iter().rev() {
                    stack.push(child);
                }
            }
            Node::Text(raw) => {
                // literal text is already Unicode and passes through
                // untouched; the G1 table only backs mosaic tokens
                let text = match st.special.take() {
                    Some(ch) => ch.to_string(),
                    None => raw.clone(),
                };
                if !text.is_empty() {
                    line.push(Block { text, fg: st.fg, bg: st.bg, link: st.link.take() });
                }
            }
        }
    }
    Ok(line)
}

/// Decode a whole fetched document: the `ttxPage` container holds one
/// `pre.ttxRow` per physical row.
pub fn to_teletext(doc: &Tag, mapper: &CharsetMapper) -> Result<TeletextPage, ScrapeError> {
    let container = doc
        .find_by_id("ttxPage")
        .ok_or_else(|| ScrapeError::Document(s!("ttxPage container missing")))?;

    let mut tt = TeletextPage::new();
    for row in container.find_all("pre", "ttxRow") {
        tt.push_line(decode_row(row, mapper)?);
    }
    Ok(tt)
}

/// `?page=104&sub=2` → link to (104, Some(2)). Hrefs without a
/// three-digit page parameter carry no navigation target.
fn parse_page_link(href: &str) -> Option<PageLink> {
    let page = page_link_re().captures(href)?.get(1)?.as_str().parse().ok()?;
    let subpage = subpage_link_re()
        .captures(href)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok());
    Some(PageLink { page, subpage })
}

/// One class-like style token. Shapes:
///   bg<d>          background := PALETTE[d]
///   fg<d>          foreground := PALETTE[d]
///   g1s<x><hex>    pending special char := G1[hex] (slot x unused)
///   g1c<d><hex>    same, plus foreground := PALETTE[d]
/// Anything else is not a style token and is skipped.
fn apply_class_token(token: &str, st: &mut RowState, mapper: &CharsetMapper) -> Result<(), ScrapeError> {
    if !token.is_ascii() {
        return Ok(());
    }
    if token.starts_with("g1s") || token.starts_with("g1c") {
        if token.len() > 4 {
            if let Ok(cp) = u32::from_str_radix(&token[4..], 16) {
                st.special = Some(mapper.g1(cp)?);
            }
            if token.starts_with("g1c") {
                if let Some(color) = palette_at(&token[3..4]) {
                    st.fg = color;
                }
            }
        }
    } else if let Some(digit) = token.strip_prefix("bg") {
        if let Some(color) = palette_at(digit) {
            st.bg = color;
        }
    } else if let Some(digit) = token.strip_prefix("fg") {
        if let Some(color) = palette_at(digit) {
            st.fg = color;
        }
    }
    Ok(())
}

fn palette_at(digit: &str) -> Option<char> {
    let idx: usize = digit.parse().ok()?;
    PALETTE.get(idx).copied()
}
