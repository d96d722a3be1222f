//! Slope quantities: the sparse request and the resolved result.

use crate::angle::Tolerance;
use serde::{Deserialize, Serialize};

/// One of the four related slope quantities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    /// Horizontal distance.
    X,
    /// Vertical distance.
    Y,
    /// Slope angle in degrees.
    AngleDeg,
    /// Slope in percent.
    SlopePct,
}

impl Quantity {
    /// All quantities in display order.
    pub const ALL: [Quantity; 4] = [
        Quantity::X,
        Quantity::Y,
        Quantity::AngleDeg,
        Quantity::SlopePct,
    ];

    /// Unit suffix shown next to values.
    pub fn unit(&self) -> &'static str {
        match self {
            Quantity::X | Quantity::Y => "m",
            Quantity::AngleDeg => "°",
            Quantity::SlopePct => "%",
        }
    }

    /// Short field name.
    pub fn key(&self) -> &'static str {
        match self {
            Quantity::X => "x",
            Quantity::Y => "y",
            Quantity::AngleDeg => "angle",
            Quantity::SlopePct => "slope",
        }
    }
}

/// Sparse solve request. `None` means "not provided"; `Some(0.0)` is a real zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SlopeInput {
    /// Horizontal distance in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical distance in meters.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Slope angle in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle_deg: Option<f64>,
    /// Slope in percent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope_pct: Option<f64>,
}

impl SlopeInput {
    /// Empty request with nothing provided.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from four plain numbers where `0.0` means "not provided".
    pub fn from_sentinel(x: f64, y: f64, angle_deg: f64, slope_pct: f64) -> Self {
        let known = |v: f64| if v == 0.0 { None } else { Some(v) };
        Self {
            x: known(x),
            y: known(y),
            angle_deg: known(angle_deg),
            slope_pct: known(slope_pct),
        }
    }

    /// Set the horizontal distance.
    pub fn with_x(mut self, x: f64) -> Self {
        self.x = Some(x);
        self
    }

    /// Set the vertical distance.
    pub fn with_y(mut self, y: f64) -> Self {
        self.y = Some(y);
        self
    }

    /// Set the angle in degrees.
    pub fn with_angle_deg(mut self, angle_deg: f64) -> Self {
        self.angle_deg = Some(angle_deg);
        self
    }

    /// Set the slope in percent.
    pub fn with_slope_pct(mut self, slope_pct: f64) -> Self {
        self.slope_pct = Some(slope_pct);
        self
    }

    /// Value of a single quantity, if provided.
    pub fn get(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::X => self.x,
            Quantity::Y => self.y,
            Quantity::AngleDeg => self.angle_deg,
            Quantity::SlopePct => self.slope_pct,
        }
    }

    /// Number of provided quantities.
    pub fn known_count(&self) -> usize {
        Quantity::ALL
            .iter()
            .filter(|q| self.get(**q).is_some())
            .count()
    }

    /// Number of quantities left unset.
    pub fn unset_count(&self) -> usize {
        Quantity::ALL.len() - self.known_count()
    }

    /// Provided quantities that disagree with a solved result.
    ///
    /// Over-determined requests are resolved by branch priority, so
    /// supplied values outside the winning pair may not match.
    pub fn conflicts_with(&self, solved: &SlopeQuantities, tol: &Tolerance) -> Vec<Quantity> {
        Quantity::ALL
            .into_iter()
            .filter(|q| match self.get(*q) {
                Some(given) => !tol.values_equal(given, solved.get(*q)),
                None => false,
            })
            .collect()
    }
}

/// Fully resolved slope: all four quantities populated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlopeQuantities {
    /// Horizontal distance in meters.
    pub x: f64,
    /// Vertical distance in meters.
    pub y: f64,
    /// Slope angle in degrees.
    pub angle_deg: f64,
    /// Slope in percent.
    pub slope_pct: f64,
}

impl SlopeQuantities {
    /// Value of a single quantity.
    pub fn get(&self, quantity: Quantity) -> f64 {
        match quantity {
            Quantity::X => self.x,
            Quantity::Y => self.y,
            Quantity::AngleDeg => self.angle_deg,
            Quantity::SlopePct => self.slope_pct,
        }
    }

    /// Check all four quantities against another result.
    pub fn approx_eq(&self, other: &SlopeQuantities, tol: &Tolerance) -> bool {
        Quantity::ALL
            .iter()
            .all(|q| tol.values_equal(self.get(*q), other.get(*q)))
    }
}
