//! Two-of-four slope solver.
//!
//! Over-determined requests are not checked for consistency. The first
//! [`KnownPair`] (in declaration order) whose two quantities are both
//! provided decides the result; any other supplied values are ignored.

use crate::angle::{atan_deg, ratio, tan_deg};
use crate::error::SolveError;
use crate::quantity::{SlopeInput, SlopeQuantities};
use serde::{Deserialize, Serialize};

/// The pair of known quantities a solve is derived from, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KnownPair {
    /// Horizontal and vertical distance.
    XY,
    /// Horizontal distance and angle.
    XAngle,
    /// Horizontal distance and slope.
    XSlope,
    /// Vertical distance and angle.
    YAngle,
    /// Vertical distance and slope.
    YSlope,
    /// Angle and slope.
    AngleSlope,
}

impl KnownPair {
    /// All pairs in priority order.
    pub const PRIORITY: [KnownPair; 6] = [
        KnownPair::XY,
        KnownPair::XAngle,
        KnownPair::XSlope,
        KnownPair::YAngle,
        KnownPair::YSlope,
        KnownPair::AngleSlope,
    ];

    /// First pair whose two quantities are both provided.
    pub fn select(input: &SlopeInput) -> Option<KnownPair> {
        Self::PRIORITY.into_iter().find(|pair| pair.matches(input))
    }

    fn matches(&self, input: &SlopeInput) -> bool {
        let SlopeInput {
            x,
            y,
            angle_deg,
            slope_pct,
        } = input;
        match self {
            KnownPair::XY => x.is_some() && y.is_some(),
            KnownPair::XAngle => x.is_some() && angle_deg.is_some(),
            KnownPair::XSlope => x.is_some() && slope_pct.is_some(),
            KnownPair::YAngle => y.is_some() && angle_deg.is_some(),
            KnownPair::YSlope => y.is_some() && slope_pct.is_some(),
            KnownPair::AngleSlope => angle_deg.is_some() && slope_pct.is_some(),
        }
    }
}

/// Solve from four plain numbers, where `0.0` means "not provided".
///
/// A literal zero cannot be expressed as a known value here; use
/// [`solve_input`] with [`SlopeInput`] for that.
pub fn solve(
    x: f64,
    y: f64,
    angle_deg: f64,
    slope_pct: f64,
) -> Result<SlopeQuantities, SolveError> {
    solve_input(&SlopeInput::from_sentinel(x, y, angle_deg, slope_pct))
}

/// Solve a sparse request, deriving the two missing quantities.
pub fn solve_input(input: &SlopeInput) -> Result<SlopeQuantities, SolveError> {
    if input.unset_count() > 2 {
        return Err(SolveError::InsufficientInputs);
    }

    let pair = KnownPair::select(input).ok_or(SolveError::InvalidCombination)?;
    log::debug!("solving slope from {:?}", pair);

    let SlopeInput {
        x,
        y,
        angle_deg,
        slope_pct,
    } = *input;

    let q = match (pair, x, y, angle_deg, slope_pct) {
        (KnownPair::XY, Some(x), Some(y), _, _) => {
            let r = ratio(y, x)?;
            SlopeQuantities {
                x,
                y,
                angle_deg: atan_deg(r),
                slope_pct: r * 100.0,
            }
        }
        (KnownPair::XAngle, Some(x), _, Some(angle_deg), _) => {
            let y = x * tan_deg(angle_deg);
            SlopeQuantities {
                x,
                y,
                angle_deg,
                slope_pct: ratio(y, x)? * 100.0,
            }
        }
        (KnownPair::XSlope, Some(x), _, _, Some(slope_pct)) => {
            let y = (slope_pct / 100.0) * x;
            SlopeQuantities {
                x,
                y,
                angle_deg: atan_deg(ratio(y, x)?),
                slope_pct,
            }
        }
        (KnownPair::YAngle, _, Some(y), Some(angle_deg), _) => {
            let x = ratio(y, tan_deg(angle_deg))?;
            SlopeQuantities {
                x,
                y,
                angle_deg,
                slope_pct: ratio(y, x)? * 100.0,
            }
        }
        (KnownPair::YSlope, _, Some(y), _, Some(slope_pct)) => {
            let x = ratio(y, slope_pct / 100.0)?;
            SlopeQuantities {
                x,
                y,
                angle_deg: atan_deg(ratio(y, x)?),
                slope_pct,
            }
        }
        (KnownPair::AngleSlope, _, _, Some(angle_deg), Some(slope_pct)) => {
            let x = ratio(slope_pct, 100.0 * tan_deg(angle_deg))?;
            SlopeQuantities {
                x,
                y: (slope_pct / 100.0) * x,
                angle_deg,
                slope_pct,
            }
        }
        _ => return Err(SolveError::InvalidCombination),
    };

    Ok(q)
}
