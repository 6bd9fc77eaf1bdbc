// crates/marker_region/src/lib.rs

//! Locates a block of text bounded by two literal markers.
//!
//! This is plain substring search: the region is never parsed or validated
//! against any grammar.

mod error;
mod region;

pub use error::{MarkerError, MarkerKind};
pub use region::{extract_region, replace_region, splice_region, Region};
