//! Serializable solve outcome for service and JSON boundaries.

use crate::error::{SolveError, SolveErrorKind};
use crate::quantity::SlopeQuantities;
use serde::{Deserialize, Serialize};

/// Tagged result of a solve: either all four quantities or an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SolveOutcome {
    /// Solved successfully.
    Ok {
        /// Horizontal distance in meters.
        x: f64,
        /// Vertical distance in meters.
        y: f64,
        /// Slope angle in degrees.
        angle_deg: f64,
        /// Slope in percent.
        slope_pct: f64,
    },
    /// Solve failed.
    Err {
        /// Error kind.
        kind: SolveErrorKind,
        /// Human-readable message.
        message: String,
    },
}

impl SolveOutcome {
    /// Whether the outcome is a success.
    pub fn is_ok(&self) -> bool {
        matches!(self, SolveOutcome::Ok { .. })
    }

    /// Convert back into a `Result`.
    pub fn into_result(self) -> Result<SlopeQuantities, SolveError> {
        match self {
            SolveOutcome::Ok {
                x,
                y,
                angle_deg,
                slope_pct,
            } => Ok(SlopeQuantities {
                x,
                y,
                angle_deg,
                slope_pct,
            }),
            SolveOutcome::Err { kind, .. } => Err(kind.into()),
        }
    }
}

impl From<Result<SlopeQuantities, SolveError>> for SolveOutcome {
    fn from(result: Result<SlopeQuantities, SolveError>) -> Self {
        match result {
            Ok(q) => SolveOutcome::Ok {
                x: q.x,
                y: q.y,
                angle_deg: q.angle_deg,
                slope_pct: q.slope_pct,
            },
            Err(e) => SolveOutcome::Err {
                kind: e.kind(),
                message: e.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::solve;

    #[test]
    fn test_ok_json() {
        let outcome = SolveOutcome::from(solve(2.0, 1.0, 0.0, 0.0));
        assert!(outcome.is_ok());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["x"], 2.0);
        assert_eq!(json["slope_pct"], 50.0);
    }

    #[test]
    fn test_err_json() {
        let outcome = SolveOutcome::from(solve(0.0, 0.0, 0.0, 0.0));
        assert!(!outcome.is_ok());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "err");
        assert_eq!(json["kind"], "insufficient_inputs");
        assert_eq!(json["message"], "Please enter at least two values");
    }

    #[test]
    fn test_into_result() {
        let result = solve(0.0, 4.0, 0.0, 50.0);
        assert_eq!(SolveOutcome::from(result).into_result(), result);

        let err = SolveOutcome::Err {
            kind: SolveErrorKind::DivisionByZero,
            message: "Division by zero".to_string(),
        };
        assert_eq!(err.into_result(), Err(SolveError::DivisionByZero));
    }
}
