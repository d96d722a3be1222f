//! Presenters for slope solver results.
//!
//! - [`table`]: flat label → value listing, as text or JSON.
//! - [`line`]: origin-to-(x, y) segment normalized into a fixed frame.
//! - [`svg`], [`dxf`]: writers for the line plot.

pub mod dxf;
pub mod error;
pub mod labels;
pub mod line;
pub mod svg;
pub mod table;

pub use dxf::DxfDocument;
pub use error::{PresentError, Result};
pub use labels::Language;
pub use line::{Frame, LinePresenter, LineSegment};
pub use svg::SvgDocument;
pub use table::{Row, Table, TablePresenter};
