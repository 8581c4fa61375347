// src/cli.rs
// Thin demo frontend: walk one source's chain and print the decoded
// pages as plain text.

use color_eyre::eyre::{Result, eyre};

use crate::core::net::HttpFetch;
use crate::scrape::{PageWalker, to_teletext};
use crate::specs;

pub fn run() -> Result<()> {
    color_eyre::install()?;

    let name = std::env::args().nth(1).unwrap_or_else(|| s!("swr_rp"));
    let spec = specs::by_name(&name).ok_or_else(|| {
        let known: Vec<&str> = specs::all().iter().map(|s| s.name).collect();
        eyre!("unknown source {name:?} (known: {})", known.join(", "))
    })?;

    logf!("walking source {}", spec.name);
    let mapper = spec.mapper();
    let fetch = HttpFetch::new()?;

    for item in PageWalker::new(spec, fetch) {
        let (page, subpage, doc) = item?;
        let tt = to_teletext(&doc, &mapper)?;
        println!("--- {page}/{subpage} [{}] ---", spec.category(page));
        println!("{}", tt.text());
    }
    Ok(())
}
