//! Tabular presenter: a flat label → value listing of a solve result.

use crate::error::Result;
use crate::labels::Language;
use gefaelle_kernel::{Quantity, SlopeQuantities, SolveError, SolveOutcome};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// A single label → value line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Display label.
    pub label: String,
    /// Formatted value or error message.
    pub value: String,
}

/// Ordered rows ready for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Rows in display order.
    pub rows: Vec<Row>,
}

impl Table {
    /// Render as aligned plain text, one row per line.
    pub fn render_text(&self) -> String {
        let width = self
            .rows
            .iter()
            .map(|r| r.label.chars().count())
            .max()
            .unwrap_or(0);
        let mut out = String::new();
        for row in &self.rows {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{:<width$}  {}", row.label, row.value, width = width);
        }
        out
    }

    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Value of the row with the given label.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.label == label)
            .map(|r| r.value.as_str())
    }
}

/// Builds a [`Table`] from a solve result.
#[derive(Debug, Clone, Copy)]
pub struct TablePresenter {
    /// Label and message language.
    pub language: Language,
    /// Decimal places for values.
    pub precision: usize,
    /// Append unit suffixes (`m`, `°`, `%`).
    pub show_units: bool,
}

impl Default for TablePresenter {
    fn default() -> Self {
        Self {
            language: Language::De,
            precision: 2,
            show_units: true,
        }
    }
}

impl TablePresenter {
    /// Create a presenter with default precision and units shown.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Self::default()
        }
    }

    /// Four value rows on success, one error row on failure.
    pub fn present(&self, result: &std::result::Result<SlopeQuantities, SolveError>) -> Table {
        match result {
            Ok(q) => Table {
                rows: Quantity::ALL
                    .iter()
                    .map(|quantity| Row {
                        label: self.language.label(*quantity).to_string(),
                        value: self.format_value(*quantity, q.get(*quantity)),
                    })
                    .collect(),
            },
            Err(e) => Table {
                rows: vec![Row {
                    label: self.language.error_label().to_string(),
                    value: self.language.error_message(e),
                }],
            },
        }
    }

    /// Same as [`TablePresenter::present`] for a serialized outcome.
    pub fn present_outcome(&self, outcome: &SolveOutcome) -> Table {
        self.present(&outcome.clone().into_result())
    }

    fn format_value(&self, quantity: Quantity, value: f64) -> String {
        if self.show_units {
            match quantity {
                // Degrees attach directly: 53.13°
                Quantity::AngleDeg => format!("{:.*}{}", self.precision, value, quantity.unit()),
                _ => format!("{:.*} {}", self.precision, value, quantity.unit()),
            }
        } else {
            format!("{:.*}", self.precision, value)
        }
    }
}
