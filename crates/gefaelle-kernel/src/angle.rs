//! Angle conversion, checked ratios and comparison tolerances.

use crate::error::SolveError;
use std::f64::consts::PI;

/// Degrees to radians, as `deg * π / 180`.
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Radians to degrees, as `rad * (180 / π)`.
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * (180.0 / PI)
}

/// Tangent of an angle given in degrees.
pub fn tan_deg(deg: f64) -> f64 {
    deg_to_rad(deg).tan()
}

/// Angle in degrees whose tangent is `ratio`.
pub fn atan_deg(ratio: f64) -> f64 {
    rad_to_deg(ratio.atan())
}

/// `num / den`, failing only when `den` is exactly zero.
///
/// Very small denominators are not rejected: `tan(90°)` is finite in
/// IEEE-754 and the quotient is returned unchanged.
pub fn ratio(num: f64, den: f64) -> Result<f64, SolveError> {
    if den == 0.0 {
        return Err(SolveError::DivisionByZero);
    }
    Ok(num / den)
}

/// Tolerance for comparing solved quantities.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Relative tolerance, scaled by the larger magnitude.
    pub relative: f64,
    /// Absolute floor for values near zero.
    pub absolute: f64,
}

impl Tolerance {
    /// Default tolerances (1e-9 relative, 1e-12 absolute).
    pub const DEFAULT: Self = Self {
        relative: 1e-9,
        absolute: 1e-12,
    };

    /// Check if two values are equal within tolerance.
    pub fn values_equal(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let scale = a.abs().max(b.abs());
        (a - b).abs() <= self.absolute.max(self.relative * scale)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_deg_rad_roundtrip() {
        assert_abs_diff_eq!(deg_to_rad(180.0), PI, epsilon = 1e-15);
        assert_abs_diff_eq!(rad_to_deg(PI / 2.0), 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(tan_deg(45.0), 1.0, epsilon = 1e-15);
        assert_abs_diff_eq!(atan_deg(1.0), 45.0, epsilon = 1e-12);
    }

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(1.0, 0.0), Err(SolveError::DivisionByZero));
        assert_eq!(ratio(1.0, -0.0), Err(SolveError::DivisionByZero));
        assert_eq!(ratio(6.0, 3.0), Ok(2.0));
    }

    #[test]
    fn test_tan_90_is_finite() {
        // No exact zero, so the ratio goes through.
        let t = tan_deg(90.0);
        assert!(t.is_finite());
        assert!(t > 1e15);
        assert!(ratio(4.0, t).is_ok());
    }

    #[test]
    fn test_tolerance_values_equal() {
        let tol = Tolerance::DEFAULT;
        assert!(tol.values_equal(100.0, 100.0 + 1e-8));
        assert!(!tol.values_equal(100.0, 100.001));
        assert!(tol.values_equal(0.0, 1e-13));
    }
}
