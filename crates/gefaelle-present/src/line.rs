//! Line presenter: maps `(x, y)` to a segment from the origin that fits a frame.
//!
//! The segment is first normalized by `max(|x|, |y|)` so its longer leg has
//! length 1, then scaled into the frame's drawing area. Frame coordinates
//! have y pointing down, as in SVG.

use crate::error::{PresentError, Result};
use nalgebra::{Point2, Vector2};
use serde::{Deserialize, Serialize};

/// Fixed drawing frame in output units (pixels for SVG).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Total width.
    pub width: f64,
    /// Total height.
    pub height: f64,
    /// Empty border on every side.
    pub margin: f64,
}

impl Default for Frame {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 400.0,
            margin: 20.0,
        }
    }
}

impl Frame {
    /// Side length of the largest square that fits inside the margins.
    pub fn extent(&self) -> f64 {
        (self.width - 2.0 * self.margin)
            .min(self.height - 2.0 * self.margin)
            .max(0.0)
    }

    /// Frame position of the model origin for a segment pointing along `dir`.
    ///
    /// The origin sits in the corner opposite the segment so it always has
    /// the full extent to grow into.
    pub fn origin_for(&self, dir: &Vector2<f64>) -> Point2<f64> {
        let x = if dir.x >= 0.0 {
            self.margin
        } else {
            self.width - self.margin
        };
        let y = if dir.y >= 0.0 {
            self.height - self.margin
        } else {
            self.margin
        };
        Point2::new(x, y)
    }
}

/// Segment in frame coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    /// Model origin.
    pub start: Point2<f64>,
    /// Model `(x, y)`.
    pub end: Point2<f64>,
}

impl LineSegment {
    /// Euclidean length in frame units.
    pub fn length(&self) -> f64 {
        (self.end - self.start).norm()
    }
}

/// Maps raw `(x, y)` into a [`Frame`].
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePresenter {
    /// Target frame.
    pub frame: Frame,
}

impl LinePresenter {
    /// Create a presenter for the given frame.
    pub fn new(frame: Frame) -> Self {
        Self { frame }
    }

    /// Scale `(x, y)` so the larger magnitude becomes 1.
    pub fn normalize(x: f64, y: f64) -> Result<Vector2<f64>> {
        for v in [x, y] {
            if !v.is_finite() {
                return Err(PresentError::NonFiniteCoordinate(v));
            }
        }
        let m = x.abs().max(y.abs());
        if m == 0.0 {
            return Err(PresentError::DegenerateSegment);
        }
        Ok(Vector2::new(x / m, y / m))
    }

    /// Segment from the origin to `(x, y)`, fitted into the frame.
    pub fn present(&self, x: f64, y: f64) -> Result<LineSegment> {
        let dir = Self::normalize(x, y)?;
        let start = self.frame.origin_for(&dir);
        let scale = self.frame.extent();
        // Flip y: model up is frame down.
        let end = start + Vector2::new(dir.x * scale, -dir.y * scale);
        Ok(LineSegment { start, end })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normalize_by_larger_leg() {
        let v = LinePresenter::normalize(3.0, 4.0).unwrap();
        assert_abs_diff_eq!(v.x, 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 1.0, epsilon = 1e-12);

        let v = LinePresenter::normalize(-8.0, 2.0).unwrap();
        assert_abs_diff_eq!(v.x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(v.y, 0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_segment_is_degenerate() {
        assert!(matches!(
            LinePresenter::normalize(0.0, 0.0),
            Err(PresentError::DegenerateSegment)
        ));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            LinePresenter::normalize(f64::INFINITY, 1.0),
            Err(PresentError::NonFiniteCoordinate(_))
        ));
        assert!(LinePresenter::normalize(1.0, f64::NAN).is_err());
    }

    #[test]
    fn test_present_fits_frame() {
        let presenter = LinePresenter::new(Frame {
            width: 200.0,
            height: 100.0,
            margin: 10.0,
        });
        // extent = min(180, 80) = 80
        let seg = presenter.present(4.0, 2.0).unwrap();
        assert_eq!(seg.start, Point2::new(10.0, 90.0));
        assert_abs_diff_eq!(seg.end.x, 90.0, epsilon = 1e-12);
        assert_abs_diff_eq!(seg.end.y, 50.0, epsilon = 1e-12);
    }

    #[test]
    fn test_negative_direction_starts_opposite_corner() {
        let presenter = LinePresenter::default();
        let seg = presenter.present(-1.0, -1.0).unwrap();
        assert_eq!(seg.start, Point2::new(380.0, 20.0));
        assert_abs_diff_eq!(seg.end.x, 20.0, epsilon = 1e-12);
        assert_abs_diff_eq!(seg.end.y, 380.0, epsilon = 1e-12);
        assert!(seg.end.x >= 0.0 && seg.end.y <= 400.0);
    }

    #[test]
    fn test_longer_leg_spans_extent() {
        let presenter = LinePresenter::default();
        let seg = presenter.present(10.0, 1.0).unwrap();
        assert_abs_diff_eq!(seg.end.x - seg.start.x, 360.0, epsilon = 1e-9);
        assert!(seg.length() >= 360.0);
    }
}
