//! Winding direction of a closed point loop in the x–y plane.
//!
//! The test is the trapezoid form of the shoelace sum over consecutive
//! (wrapping) pairs: `Σ (x[i+1] − x[i]) · (y[i+1] + y[i])`. It equals twice
//! the negated signed area, so a positive sum means clockwise. z and the
//! optional u/v/w play no role.

use crate::record::Point;

/// Winding verdict for one file.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Winding {
    Clockwise,
    CounterClockwise,
    /// Sum exactly zero: degenerate or self-cancelling loop (or no points).
    Indeterminate,
}

impl Winding {
    /// Short label used in summaries.
    pub fn label(self) -> &'static str {
        match self {
            Winding::Clockwise => "CW",
            Winding::CounterClockwise => "CCW",
            Winding::Indeterminate => "unknown",
        }
    }
}

impl std::fmt::Display for Winding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Signed trapezoid sum over the closed loop (`next = (i + 1) mod n`).
pub fn signed_sum(points: &[Point]) -> f64 {
    let n = points.len();
    let mut sum = 0.0;
    for (i, p) in points.iter().enumerate() {
        let q = &points[(i + 1) % n];
        sum += (q.pos.x - p.pos.x) * (q.pos.y + p.pos.y);
    }
    sum
}

/// Winding of the loop in the order given. Must be fed the raw file order.
pub fn orientation(points: &[Point]) -> Winding {
    let sum = signed_sum(points);
    if sum > 0.0 {
        Winding::Clockwise
    } else if sum < 0.0 {
        Winding::CounterClockwise
    } else {
        Winding::Indeterminate
    }
}
