//! Chord-and-tangent addition on real elliptic curves `y^2 = x^3 + ax + b`.
//!
//! [`curve`] validates coefficients and points, [`point`] implements the
//! group law. [`session`] and [`render`] wrap them in a console dialogue.

pub mod config;
pub mod curve;
pub mod error;
pub mod point;
pub mod render;
pub mod session;
pub mod tolerance;

pub use curve::{validate_curve, validate_point, Curve};
pub use error::{InvalidCurveError, PointNotOnCurveError, SessionError};
pub use point::{Line, Point};
pub use tolerance::Tolerance;
