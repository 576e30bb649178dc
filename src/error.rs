use std::io;

use thiserror::Error;

use crate::curve::Curve;

/// The coefficients describe a singular curve (or are not finite numbers).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("the curve y^2 = x^3 + {a}x + {b} is singular (4a^3 + 27b^2 = 0)")]
pub struct InvalidCurveError {
    pub a: f64,
    pub b: f64,
}

#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[error("the point ({x}, {y}) does not lie on the curve {curve}")]
pub struct PointNotOnCurveError {
    pub x: f64,
    pub y: f64,
    pub curve: Curve,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("console i/o failed")]
    Io(#[from] io::Error),

    #[error("input closed while waiting for {0}")]
    InputClosed(&'static str),

    #[error("preset coefficients rejected")]
    InvalidPreset(#[from] InvalidCurveError),
}
