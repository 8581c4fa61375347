// src/scrape/compare.rs

use crate::scrape::page::TeletextPage;

/// Structural equality modulo the header row. Line 0 carries the live
/// clock and differs between any two fetches, so it is always excluded.
/// An empty page is never considered stable, not even against itself:
/// degenerate fetches must always register as changed.
pub fn pages_equal(old: &TeletextPage, new: &TeletextPage) -> bool {
    if old.lines.len() != new.lines.len() {
        return false;
    }
    if old.lines.is_empty() {
        return false;
    }
    old.lines[1..] == new.lines[1..]
}
