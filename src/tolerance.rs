use num_traits::Zero;

pub const DEFAULT_RELATIVE: f64 = 1e-9;
pub const DEFAULT_ABSOLUTE: f64 = 1e-12;

/// Equality policy for coordinates and for the curve equation.
///
/// `Exact` compares bit patterns the way `==` does on `f64`. `Approx` treats
/// two values as equal when `|l - r| <= max(abs, rel * max(|l|, |r|))`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    Exact,
    Approx { abs: f64, rel: f64 },
}

impl Tolerance {
    pub fn relative(rel: f64) -> Self {
        Tolerance::Approx {
            abs: DEFAULT_ABSOLUTE,
            rel,
        }
    }

    pub fn equal(&self, l: f64, r: f64) -> bool {
        match *self {
            Tolerance::Exact => l == r,
            Tolerance::Approx { abs, rel } => {
                if l == r {
                    return true;
                }
                let diff = (l - r).abs();
                let scale = l.abs().max(r.abs());
                diff <= abs.max(rel * scale)
            }
        }
    }

    pub fn is_zero(&self, v: f64) -> bool {
        self.equal(v, f64::zero())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::relative(DEFAULT_RELATIVE)
    }
}

#[cfg(test)]
mod tests {
    use super::Tolerance;

    #[test]
    fn exact_rejects_rounding_noise() {
        let sum = 0.1 + 0.2;
        assert!(!Tolerance::Exact.equal(sum, 0.3));
        assert!(Tolerance::default().equal(sum, 0.3));
    }

    #[test]
    fn relative_scales_with_magnitude() {
        let tol = Tolerance::relative(1e-9);
        assert!(tol.equal(1e12, 1e12 + 1.0));
        assert!(!tol.equal(1.0, 1.0 + 1e-6));
    }

    #[test]
    fn absolute_floor_near_zero() {
        let tol = Tolerance::default();
        assert!(tol.is_zero(1e-13));
        assert!(!tol.is_zero(1e-6));
        assert!(Tolerance::Exact.is_zero(-0.0));
    }

    #[test]
    fn nan_never_equal() {
        assert!(!Tolerance::default().equal(f64::NAN, f64::NAN));
        assert!(!Tolerance::Exact.equal(f64::NAN, 0.0));
    }
}
