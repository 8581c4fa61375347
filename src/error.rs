// src/error.rs
use thiserror::Error;

/// Failure modes of a traversal/decode run. None of these are recovered
/// locally: a page is either decoded completely or not returned at all.
#[derive(Error, Debug)]
pub enum ScrapeError {
    /// The server answered with content for a different (page, subpage)
    /// than requested. Continuing would misattribute content, so the
    /// traversal aborts instead.
    #[error(
        "page identity mismatch: requested {requested_page}/{requested_subpage}, \
         server reported {reported_page}/{reported_subpage}"
    )]
    Consistency {
        requested_page: u32,
        requested_subpage: u32,
        reported_page: u32,
        reported_subpage: u32,
    },

    /// Raised by the fetch collaborator; passed through untouched, no
    /// retries here. The caller decides whether to restart the walk.
    #[error("transport: {0}")]
    Transport(String),

    /// A raw codepoint with no entry in the named character-set table.
    /// The remedy is extending the table, never a placeholder glyph.
    #[error("no {table} mapping for codepoint {codepoint:#04x}")]
    Mapping { table: &'static str, codepoint: u32 },

    /// Fetched document is missing the expected metadata or content
    /// regions, or holds non-numeric metadata.
    #[error("malformed page document: {0}")]
    Document(String),
}
