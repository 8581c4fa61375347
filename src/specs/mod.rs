// src/specs/mod.rs
//! # Source specs
//!
//! Per-broadcaster configuration for the shared traversal/decoding
//! engine. Sources differ only in their stream identifier, their
//! page-category label table and a handful of G0 character overrides,
//! so the differences are **data, not types**: one `SourceSpec` record
//! per source, no trait hierarchy.
//!
//! ## Conventions
//! - Tables are `&'static` slices; specs are `static` values.
//! - Category tables are lookup-only; no logic lives here.
//! - G0 overrides extend the shared base table via copy-on-extend
//!   (`core::charset`); the base is never mutated.

pub mod dreisat;
pub mod swr;

use crate::core::charset::CharsetMapper;

/// One broadcaster stream: everything the engine needs to walk and
/// decode it.
pub struct SourceSpec {
    pub name: &'static str,
    /// `{stream}` substitution in `params::URL_TMPL`.
    pub stream: &'static str,
    /// Page number → category label, sorted by page number.
    pub page_categories: &'static [(u32, &'static str)],
    /// Raw codepoint → glyph additions to the base G0 table.
    pub g0_overrides: &'static [(u32, char)],
}

impl SourceSpec {
    /// Category label for a page: nearest entry at or below the page
    /// number, `"undefined"` when the table has none.
    pub fn category(&self, page: u32) -> &'static str {
        self.page_categories
            .iter()
            .filter(|(p, _)| *p <= page)
            .max_by_key(|(p, _)| *p)
            .map(|(_, label)| *label)
            .unwrap_or("undefined")
    }

    /// Character mapper for this source: shared base plus this source's
    /// G0 overrides.
    pub fn mapper(&self) -> CharsetMapper {
        CharsetMapper::base().with_g0(self.g0_overrides)
    }
}

static ALL: [&SourceSpec; 3] = [&swr::SWR_RP, &swr::SWR_BW, &dreisat::DREISAT];

/// All known sources.
pub fn all() -> &'static [&'static SourceSpec] {
    &ALL
}

pub fn by_name(name: &str) -> Option<&'static SourceSpec> {
    all().iter().copied().find(|spec| spec.name == name)
}
