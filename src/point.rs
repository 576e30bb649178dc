use std::fmt;

use log::debug;
use num_traits::Pow;

use crate::curve::Curve;

/// A point on some [`Curve`]: a finite coordinate pair or the point at
/// infinity, the group identity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Point {
    Finite { x: f64, y: f64 },
    Infinity,
}

/// The line the chord-and-tangent rule draws through two finite points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Line {
    /// Vertical tangent or chord; the third intersection is the point at
    /// infinity.
    Vertical,
    Tangent { slope: f64 },
    Secant { slope: f64 },
}

impl Line {
    /// Picks the line through `p` and `q`, or `None` when either is the
    /// point at infinity.
    pub fn through(p: &Point, q: &Point, curve: &Curve) -> Option<Self> {
        let line = Line::between(p.coordinates()?, q.coordinates()?, curve);
        debug!("line through {p} and {q}: {line:?}");
        Some(line)
    }

    fn between((x1, y1): (f64, f64), (x2, y2): (f64, f64), curve: &Curve) -> Self {
        let tol = curve.tolerance();
        let same_x = tol.equal(x1, x2);
        let same = same_x && tol.equal(y1, y2);

        // y is judged on the same y^2 scale Curve::contains uses
        if (same && tol.is_zero(y1 * y1)) || (same_x && tol.equal(y1, -y2)) {
            Line::Vertical
        } else if same {
            Line::Tangent {
                slope: (3.0 * x1.pow(2u8) + curve.a()) / (2.0 * y1),
            }
        } else {
            Line::Secant {
                slope: (y2 - y1) / (x2 - x1),
            }
        }
    }

    pub fn slope(&self) -> Option<f64> {
        match *self {
            Line::Vertical => None,
            Line::Tangent { slope } | Line::Secant { slope } => Some(slope),
        }
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point::Finite { x, y }
    }

    pub fn is_infinity(&self) -> bool {
        matches!(self, Point::Infinity)
    }

    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match *self {
            Point::Finite { x, y } => Some((x, y)),
            Point::Infinity => None,
        }
    }

    /// The point at infinity is accepted on either side and acts as the
    /// identity. Operands are put in a fixed order first so the result does
    /// not depend on argument order, not even in the last bit.
    pub fn add(&self, other: &Point, curve: &Curve) -> Self {
        let (p, q) = match (self.coordinates(), other.coordinates()) {
            (None, _) => return *other,
            (_, None) => return *self,
            (Some(p), Some(q)) if p <= q => (p, q),
            (Some(p), Some(q)) => (q, p),
        };

        let line = Line::between(p, q, curve);
        debug!("{} + {}: {:?}", self, other, line);
        let Some(m) = line.slope() else {
            return Point::Infinity;
        };

        let ((x1, y1), (x2, _)) = (p, q);
        let x3 = m.pow(2u8) - x1 - x2;
        let y3 = m * (x1 - x3) - y1;

        Point::Finite { x: x3, y: y3 }
    }

    pub fn double(&self, curve: &Curve) -> Self {
        self.add(self, curve)
    }

    pub fn neg(&self) -> Self {
        match *self {
            Point::Finite { x, y } => Point::Finite { x, y: -y },
            Point::Infinity => Point::Infinity,
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Point::Finite { x, y } => write!(f, "({x}, {y})"),
            Point::Infinity => write!(f, "Point at infinity"),
        }
    }
}
