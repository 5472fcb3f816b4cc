//! Curated internal API for the CLI (UNSTABLE).
//!
//! Important
//! - This is not a public API. It is a convenience surface for the binary
//!   crate and benches. Breaking changes are allowed and expected.

// File helpers
pub use crate::io::{ensure_dir, output_path, read_input, write_output, DEFAULT_OUT_DIR};
// Pipeline
pub use crate::pipeline::{process_text, render, Outcome, PipelineFlags, CCW_HEADER, CW_HEADER};
// Types
pub use crate::cfg::{Config, DEFAULT_PRECISION};
pub use crate::error::PtsError;
pub use crate::orient::Winding;
