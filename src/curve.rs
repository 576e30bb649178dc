use std::fmt;

use log::{debug, info};
use num_traits::{Pow, Zero};
use rand::Rng;

use crate::error::{InvalidCurveError, PointNotOnCurveError};
use crate::point::Point;
use crate::tolerance::Tolerance;

/// Non-singular curve `y^2 = x^3 + ax + b` over the reals.
///
/// Only [`validate_curve`] hands out values of this type, so every `Curve`
/// has a non-zero discriminant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Curve {
    a: f64,
    b: f64,
    tolerance: Tolerance,
}

/// Accepts `(a, b)` unless `4a^3 + 27b^2` is exactly zero.
///
/// The discriminant is a property of the coefficients themselves, so no
/// tolerance is applied here.
pub fn validate_curve(a: f64, b: f64) -> Result<Curve, InvalidCurveError> {
    if !a.is_finite() || !b.is_finite() {
        return Err(InvalidCurveError { a, b });
    }

    let curve = Curve {
        a,
        b,
        tolerance: Tolerance::default(),
    };
    if curve.discriminant().is_zero() {
        return Err(InvalidCurveError { a, b });
    }

    info!("accepted curve {curve}");
    Ok(curve)
}

pub fn validate_point(curve: &Curve, x: f64, y: f64) -> Result<Point, PointNotOnCurveError> {
    if x.is_finite() && y.is_finite() && curve.contains(x, y) {
        Ok(Point::Finite { x, y })
    } else {
        debug!(
            "({x}, {y}) rejected: y^2 = {}, rhs = {}",
            y.pow(2u8),
            curve.rhs(x)
        );
        Err(PointNotOnCurveError {
            x,
            y,
            curve: *curve,
        })
    }
}

impl Curve {
    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    pub fn with_tolerance(self, tolerance: Tolerance) -> Self {
        Self { tolerance, ..self }
    }

    pub fn discriminant(&self) -> f64 {
        4.0 * self.a.pow(3u8) + 27.0 * self.b.pow(2u8)
    }

    pub fn rhs(&self, x: f64) -> f64 {
        x.pow(3u8) + self.a * x + self.b
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        self.tolerance.equal(y.pow(2u8), self.rhs(x))
    }

    /// Samples a point that passes [`Curve::contains`] under this curve's
    /// tolerance.
    ///
    /// Every real root of `x^3 + ax + b` lies within `1 + max(|a|, |b|)`, so
    /// the upper end of the sampling window always has `rhs(x) > 0`.
    pub fn random_point<R: Rng>(&self, rng: &mut R) -> Point {
        let bound = 1.0 + self.a.abs().max(self.b.abs());
        loop {
            let x = rng.gen_range(-bound..=bound + 1.0);
            let rhs = self.rhs(x);
            if rhs < 0.0 {
                continue;
            }
            let y = rhs.sqrt();
            if !self.contains(x, y) {
                continue;
            }
            let y = if rng.gen::<bool>() { y } else { -y };
            return Point::Finite { x, y };
        }
    }
}

impl fmt::Display for Curve {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "y^2 = x^3 + {}x + {}", self.a, self.b)
    }
}
