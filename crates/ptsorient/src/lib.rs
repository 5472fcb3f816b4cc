//! Winding canonicalization for closed point sequences (`.pts` text files).
//!
//! A `.pts` file is a loose list of lines; the ones that hold `x y z` or
//! `x y z u v w` are coordinate records, everything else is noise. This crate
//! decides the winding of the record loop in the x–y plane and rewrites the
//! records into a counter-clockwise, precision-capped, duplicate-free file.
//!
//! Stages (leaves first)
//! - `record`: line classification and point loading.
//! - `orient`: signed-area winding test over the raw point order.
//! - `text`: precision normalization, decimation, global dedup.
//! - `pipeline`: drives the stages over one file and renders the output.
//! - `io`: thin file helpers used by the CLI.
//!
//! API Policy
//! - This crate is project-internal. There is no stable public API; the CLI
//!   is the only consumer. Prefer `api` re-exports in callers.

pub mod api;
pub mod cfg;
pub mod error;
pub mod io;
pub mod orient;
pub mod pipeline;
pub mod record;
pub mod text;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::Config;
pub use error::PtsError;
pub use orient::Winding;
pub use pipeline::{Outcome, PipelineFlags};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::Config;
    pub use crate::orient::{orientation, signed_sum, Winding};
    pub use crate::pipeline::{process_text, render, Outcome, PipelineFlags};
    pub use crate::record::{classify, load_points, LineKind, Point, Record};
    pub use crate::text::{decimate, dedup_global, normalize_line};
}
