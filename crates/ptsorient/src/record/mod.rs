//! Coordinate records: line classification and point loading.
//!
//! Purpose
//! - Decide which lines of a `.pts` file are coordinate records (`x y z` or
//!   `x y z u v w`) and turn them into `Point`s in file order.
//!
//! Rules
//! - Tokens are whitespace-separated finite decimal numbers.
//! - Exactly three or exactly six numbers make a record; anything else after
//!   `x y z` rejects the whole line (no truncation to XYZ).
//! - Rejected lines are skipped silently by the loader.

mod parse;
mod types;

pub use parse::{classify, load_points, parse_record};
pub use types::{LineKind, Point, Record};

#[cfg(test)]
mod tests;
