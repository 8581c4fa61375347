// src/scrape/mod.rs

pub mod compare;
pub mod decode;
pub mod page;
pub mod walk;

pub use compare::pages_equal;
pub use decode::{decode_row, to_teletext};
pub use walk::{PageCursor, PageWalker};
