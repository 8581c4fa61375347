// src/specs/swr.rs
// SWR runs one chain per regional stream; both use the base G0 table.

use super::SourceSpec;

pub static SWR_RP: SourceSpec = SourceSpec {
    name: "swr_rp",
    stream: "rp",
    page_categories: &[(100, "index")],
    g0_overrides: &[],
};

pub static SWR_BW: SourceSpec = SourceSpec {
    name: "swr_bw",
    stream: "bw",
    page_categories: &[(100, "index")],
    g0_overrides: &[],
};
