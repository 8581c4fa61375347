// src/params.rs

// Page numbering
pub const FIRST_PAGE: u32 = 100;
pub const FIRST_SUBPAGE: u32 = 1;
pub const PAGE_CEILING: u32 = 900; // valid pages are 100..=899

// Net config. Placeholders are filled by the walker per step.
pub const URL_TMPL: &str = "https://wraps.swr.de/videotext/?page={page}&sub={sub}&stream={stream}";

// Fixed 8-entry color palette, indexed by the digit in bg<d>/fg<d>
// class tokens. Codes are carried forward verbatim, never translated
// to display names.
pub const PALETTE: [char; 8] = ['b', 'r', 'g', 'y', 'l', 'm', 'c', 'w'];

pub const DEFAULT_BG: char = 'b';
pub const DEFAULT_FG: char = 'w';
