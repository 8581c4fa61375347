// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod core;
pub mod specs;

pub mod error;
pub mod params;
pub mod scrape;

pub use error::ScrapeError;
pub use scrape::page::{Block, Line, PageLink, TeletextPage};
