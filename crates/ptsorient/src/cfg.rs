//! Pipeline configuration.
//!
//! Policy
//! - Precision is a single fixed scalar. The CLI does not expose it; library
//!   callers may override it through `Config` without touching call sites.

/// Maximum number of fractional digits kept by the precision normalizer.
pub const DEFAULT_PRECISION: usize = 4;

/// Pipeline configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    /// Fractional digits retained after the decimal point.
    pub precision: usize,
    /// Drop every second record (see `text::decimate`).
    pub minimize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            minimize: false,
        }
    }
}

impl Config {
    #[inline]
    pub fn with_minimize(self, minimize: bool) -> Self {
        Self { minimize, ..self }
    }
}
