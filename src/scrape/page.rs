// src/scrape/page.rs

/// One of the 8 palette codes from `params::PALETTE`, carried forward
/// verbatim. Never translated to a display name here.
pub type ColorCode = char;

/// Navigation target parsed from a row hyperlink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageLink {
    pub page: u32,
    pub subpage: Option<u32>,
}

/// One styled, optionally linked run of displayable text within a row.
/// `text` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub text: String,
    pub fg: ColorCode,
    pub bg: ColorCode,
    pub link: Option<PageLink>,
}

/// One physical teletext row: blocks in traversal order.
pub type Line = Vec<Block>;

/// The structured result of decoding one fetched (page, subpage).
/// Built row by row, then handed off; no mutation after that.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeletextPage {
    pub lines: Vec<Line>,
}

impl TeletextPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_line(&mut self, line: Line) {
        self.lines.push(line);
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Plain-text rendering (colors and links dropped), one string per
    /// physical row. For logs and the CLI, not a display surface.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for block in line {
                out.push_str(&block.text);
            }
        }
        out
    }
}
