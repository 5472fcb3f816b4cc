//! Record and point types.

use nalgebra::Vector3;

/// Shape of an accepted coordinate line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    /// `x y z`
    Xyz,
    /// `x y z u v w`
    Xyzuvw,
}

/// A point of the sequence. `dir` holds the optional `u v w` components.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub pos: Vector3<f64>,
    pub dir: Option<Vector3<f64>>,
}

impl Point {
    #[inline]
    pub fn xyz(x: f64, y: f64, z: f64) -> Self {
        Self {
            pos: Vector3::new(x, y, z),
            dir: None,
        }
    }

    #[inline]
    pub fn kind(&self) -> LineKind {
        match self.dir {
            Some(_) => LineKind::Xyzuvw,
            None => LineKind::Xyz,
        }
    }

    /// Components in file order: x, y, z and then u, v, w when present.
    pub fn components(&self) -> impl Iterator<Item = f64> + '_ {
        self.pos
            .iter()
            .copied()
            .chain(self.dir.iter().flat_map(|d| d.iter().copied()))
    }
}

/// An accepted coordinate line: the original text plus its parsed values.
///
/// The text is kept verbatim so lines that need no rounding are written back
/// byte-for-byte.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record<'a> {
    pub text: &'a str,
    pub point: Point,
}

impl Record<'_> {
    #[inline]
    pub fn kind(&self) -> LineKind {
        self.point.kind()
    }
}
