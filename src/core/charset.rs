// src/core/charset.rs
// Raw codepoint → Unicode tables for the two teletext character sets:
// G0 (primary alphanumerics) and G1 (mosaic graphics). Tables are built
// once and never mutated; per-source variants are copies with a few
// extra G0 entries. A lookup miss is fatal: substituting a placeholder
// would corrupt page content with no signal to the caller.

use std::collections::HashMap;

use crate::error::ScrapeError;

#[derive(Debug, Clone)]
pub struct CharsetMapper {
    g0: HashMap<u32, char>,
    g1: HashMap<u32, char>,
}

impl CharsetMapper {
    /// The shared base tables. G0 covers printable ASCII with the
    /// classic teletext currency substitutions; anything beyond that
    /// (umlauts, section sign, ...) is a per-source override. G1 covers
    /// the 64 sextant patterns at 0x20..=0x3f and 0x60..=0x7f.
    pub fn base() -> Self {
        let mut g0 = HashMap::new();
        for cp in 0x20u32..=0x7e {
            if let Some(ch) = char::from_u32(cp) {
                g0.insert(cp, ch);
            }
        }
        g0.insert(0x23, '£');
        g0.insert(0x24, '¤');

        let mut g1 = HashMap::new();
        for cp in (0x20u32..=0x3f).chain(0x60..=0x7f) {
            g1.insert(cp, sextant_char(cp));
        }
        Self { g0, g1 }
    }

    /// Copy-on-extend: a new mapper with the given G0 entries added or
    /// overridden. `self` stays untouched.
    pub fn with_g0(&self, overrides: &[(u32, char)]) -> Self {
        let mut g0 = self.g0.clone();
        for &(cp, ch) in overrides {
            g0.insert(cp, ch);
        }
        Self { g0, g1: self.g1.clone() }
    }

    pub fn g0(&self, cp: u32) -> Result<char, ScrapeError> {
        self.g0
            .get(&cp)
            .copied()
            .ok_or(ScrapeError::Mapping { table: "G0", codepoint: cp })
    }

    pub fn g1(&self, cp: u32) -> Result<char, ScrapeError> {
        self.g1
            .get(&cp)
            .copied()
            .ok_or(ScrapeError::Mapping { table: "G1", codepoint: cp })
    }
}

// Cell layout of a sextant glyph, low bit first:
//   1  2
//   4  8
//  16 32
const LEFT_COLUMN: u32 = 0b010101;
const RIGHT_COLUMN: u32 = 0b101010;

/// Unicode glyph for one G1 mosaic codepoint. Bit 6 of the codepoint is
/// folded down onto bit 5 (the G1 range has a hole at 0x40..0x5f).
/// Blank, the two half blocks and the full block live outside the
/// Symbols for Legacy Computing run, which skips them.
fn sextant_char(cp: u32) -> char {
    let bits = (cp & 0x1f) | ((cp & 0x40) >> 1);
    match bits {
        0 => ' ',
        LEFT_COLUMN => '\u{258c}',
        RIGHT_COLUMN => '\u{2590}',
        0b111111 => '\u{2588}',
        _ => {
            let skipped = u32::from(bits > LEFT_COLUMN) + u32::from(bits > RIGHT_COLUMN);
            char::from_u32(0x1fb00 + bits - 1 - skipped).unwrap_or(' ')
        }
    }
}
