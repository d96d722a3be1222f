//! Display labels and localized error messages.

use gefaelle_kernel::{Quantity, SolveError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output language for labels and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// German, the calculator's native labels.
    #[default]
    De,
    /// English.
    En,
}

impl Language {
    /// Row label for a quantity.
    pub fn label(&self, quantity: Quantity) -> &'static str {
        match (self, quantity) {
            (Language::De, Quantity::X) => "Abstand in der Länge (x)",
            (Language::De, Quantity::Y) => "Abstand in der Höhe (y)",
            (Language::De, Quantity::AngleDeg) => "Steigung in Grad (angle)",
            (Language::De, Quantity::SlopePct) => "Steigung in Prozent (slope)",
            (Language::En, Quantity::X) => "Horizontal distance (x)",
            (Language::En, Quantity::Y) => "Vertical distance (y)",
            (Language::En, Quantity::AngleDeg) => "Slope in degrees (angle)",
            (Language::En, Quantity::SlopePct) => "Slope in percent (slope)",
        }
    }

    /// Row label for a failed solve.
    pub fn error_label(&self) -> &'static str {
        match self {
            Language::De => "Fehler",
            Language::En => "Error",
        }
    }

    /// Localized message for a solver error.
    pub fn error_message(&self, err: &SolveError) -> String {
        match self {
            Language::En => err.to_string(),
            Language::De => match err {
                SolveError::InsufficientInputs => "Bitte geben Sie mindestens zwei Werte ein.",
                SolveError::InvalidCombination => "Ungültige Kombination von Inputs",
                SolveError::DivisionByZero => "Division durch Null",
            }
            .to_string(),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::De => write!(f, "de"),
            Language::En => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "de" | "deutsch" | "german" => Ok(Language::De),
            "en" | "english" => Ok(Language::En),
            other => Err(format!("unknown language: {}", other)),
        }
    }
}
