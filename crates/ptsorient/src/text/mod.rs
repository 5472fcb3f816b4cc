//! Text stages: precision normalization, decimation, global dedup.
//!
//! These stages work on the record text, not on the points used for the
//! winding test. Each reports what it did through its return value; the
//! pipeline folds those into `PipelineFlags`.

mod decimate;
mod dedup;
mod precision;

pub use decimate::{decimate, Decimated};
pub use dedup::dedup_global;
pub use precision::{fraction_digits, normalize_line};
