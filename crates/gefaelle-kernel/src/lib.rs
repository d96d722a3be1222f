#![warn(missing_docs)]

//! Slope ("Gefälle") solver.
//!
//! Given any two of horizontal distance, vertical distance, angle in
//! degrees and slope in percent, derives the remaining two.
//!
//! # Example
//!
//! ```rust
//! use gefaelle_kernel::solve;
//!
//! let q = solve(3.0, 0.0, 45.0, 0.0).unwrap();
//! assert!((q.y - 3.0).abs() < 1e-9);
//! assert!((q.slope_pct - 100.0).abs() < 1e-9);
//! ```

pub mod angle;
pub mod error;
pub mod outcome;
pub mod quantity;
pub mod solver;

pub use angle::Tolerance;
pub use error::{SolveError, SolveErrorKind};
pub use outcome::SolveOutcome;
pub use quantity::{Quantity, SlopeInput, SlopeQuantities};
pub use solver::{solve, solve_input, KnownPair};
