//! DXF export for the slope triangle.
//!
//! Writes real-unit geometry (meters, no normalization) as DXF R12 so the
//! drawing can be dropped into a CAD plan:
//! - Slope line (layer "SLOPE")
//! - Horizontal and vertical legs (layer "LEGS")
//! - Optional annotation text (layer "TEXT")

use crate::error::Result;
use crate::line::LinePresenter;
use gefaelle_kernel::SlopeQuantities;
use nalgebra::Point2;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Layer for the slope line itself.
pub const LAYER_SLOPE: &str = "SLOPE";
/// Layer for the horizontal and vertical legs.
pub const LAYER_LEGS: &str = "LEGS";
/// Layer for annotation text.
pub const LAYER_TEXT: &str = "TEXT";

/// A 2D entity for DXF export.
#[derive(Debug, Clone)]
pub enum Shape2D {
    /// Line segment.
    Line {
        /// Start point.
        start: Point2<f64>,
        /// End point.
        end: Point2<f64>,
        /// DXF layer name.
        layer: String,
    },
    /// Single-line text.
    Text {
        /// Insertion point.
        position: Point2<f64>,
        /// Text height in drawing units.
        height: f64,
        /// Content.
        content: String,
    },
}

/// DXF document builder.
#[derive(Debug, Clone, Default)]
pub struct DxfDocument {
    shapes: Vec<Shape2D>,
}

impl DxfDocument {
    /// Create a new empty DXF document.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Slope triangle for a solved result: legs plus the slope line.
    ///
    /// Rejects the same inputs as [`LinePresenter::normalize`]: a
    /// zero-length segment or a non-finite coordinate.
    pub fn slope(q: &SlopeQuantities) -> Result<Self> {
        LinePresenter::normalize(q.x, q.y)?;
        let mut doc = Self::new();
        doc.add_line(0.0, 0.0, q.x, 0.0, LAYER_LEGS);
        doc.add_line(q.x, 0.0, q.x, q.y, LAYER_LEGS);
        doc.add_line(0.0, 0.0, q.x, q.y, LAYER_SLOPE);
        Ok(doc)
    }

    /// Number of entities.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Whether the document has no entities.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Add a line segment on the given layer.
    pub fn add_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, layer: &str) {
        self.shapes.push(Shape2D::Line {
            start: Point2::new(x1, y1),
            end: Point2::new(x2, y2),
            layer: layer.to_string(),
        });
    }

    /// Add annotation text on the TEXT layer.
    pub fn add_text(&mut self, x: f64, y: f64, height: f64, content: impl Into<String>) {
        self.shapes.push(Shape2D::Text {
            position: Point2::new(x, y),
            height,
            content: content.into(),
        });
    }

    /// Export to DXF file.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        log::info!("wrote DXF drawing to {}", path.display());
        Ok(())
    }

    /// Write DXF to any writer.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        // DXF Header
        writeln!(writer, "0")?;
        writeln!(writer, "SECTION")?;
        writeln!(writer, "2")?;
        writeln!(writer, "HEADER")?;
        writeln!(writer, "9")?;
        writeln!(writer, "$ACADVER")?;
        writeln!(writer, "1")?;
        writeln!(writer, "AC1009")?; // DXF R12
        writeln!(writer, "9")?;
        writeln!(writer, "$INSUNITS")?;
        writeln!(writer, "70")?;
        writeln!(writer, "6")?; // Meters
        writeln!(writer, "0")?;
        writeln!(writer, "ENDSEC")?;

        // Entities section
        writeln!(writer, "0")?;
        writeln!(writer, "SECTION")?;
        writeln!(writer, "2")?;
        writeln!(writer, "ENTITIES")?;

        for shape in &self.shapes {
            match shape {
                Shape2D::Line { start, end, layer } => {
                    write_line(writer, start, end, layer)?;
                }
                Shape2D::Text {
                    position,
                    height,
                    content,
                } => {
                    write_text(writer, position, *height, content)?;
                }
            }
        }

        writeln!(writer, "0")?;
        writeln!(writer, "ENDSEC")?;

        // End of file
        writeln!(writer, "0")?;
        writeln!(writer, "EOF")?;

        Ok(())
    }
}

fn write_line(
    writer: &mut impl Write,
    start: &Point2<f64>,
    end: &Point2<f64>,
    layer: &str,
) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "LINE")?;
    writeln!(writer, "8")?;
    writeln!(writer, "{}", layer)?;
    writeln!(writer, "10")?;
    writeln!(writer, "{:.6}", start.x)?;
    writeln!(writer, "20")?;
    writeln!(writer, "{:.6}", start.y)?;
    writeln!(writer, "11")?;
    writeln!(writer, "{:.6}", end.x)?;
    writeln!(writer, "21")?;
    writeln!(writer, "{:.6}", end.y)?;
    Ok(())
}

fn write_text(
    writer: &mut impl Write,
    position: &Point2<f64>,
    height: f64,
    content: &str,
) -> std::io::Result<()> {
    writeln!(writer, "0")?;
    writeln!(writer, "TEXT")?;
    writeln!(writer, "8")?;
    writeln!(writer, "{}", LAYER_TEXT)?;
    writeln!(writer, "10")?;
    writeln!(writer, "{:.6}", position.x)?;
    writeln!(writer, "20")?;
    writeln!(writer, "{:.6}", position.y)?;
    writeln!(writer, "40")?;
    writeln!(writer, "{:.6}", height)?;
    writeln!(writer, "1")?;
    writeln!(writer, "{}", content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PresentError;
    use gefaelle_kernel::{solve, solve_input, SlopeInput};

    fn render(doc: &DxfDocument) -> String {
        let mut buf = Vec::new();
        doc.write_to(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_dxf_slope_triangle() {
        let q = solve(3.0, 4.0, 0.0, 0.0).unwrap();
        let doc = DxfDocument::slope(&q).unwrap();
        assert_eq!(doc.len(), 3);

        let content = render(&doc);
        assert_eq!(content.matches("\nLINE\n").count(), 3);
        assert!(content.contains("SLOPE\n10\n0.000000\n20\n0.000000\n11\n3.000000\n21\n4.000000\n"));
        assert!(content.contains("$INSUNITS\n70\n6\n"));
        assert!(content.ends_with("0\nEOF\n"));
    }

    #[test]
    fn test_dxf_text() {
        let mut doc = DxfDocument::new();
        assert!(doc.is_empty());
        doc.add_text(0.5, 0.1, 0.2, "53.13°");
        let content = render(&doc);
        assert!(content.contains("TEXT\n8\nTEXT\n"));
        assert!(content.contains("1\n53.13°\n"));
    }

    #[test]
    fn test_dxf_export_file() {
        let path = std::env::temp_dir().join("gefaelle_test_slope.dxf");
        let q = solve(0.0, 4.0, 0.0, 50.0).unwrap();
        DxfDocument::slope(&q).unwrap().export(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("8.000000"));
        assert!(content.contains("EOF"));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_dxf_rejects_zero_length_triangle() {
        // tan(45°) with 0 % slope resolves to x = y = 0.
        let input = SlopeInput::new().with_angle_deg(45.0).with_slope_pct(0.0);
        let q = solve_input(&input).unwrap();
        assert_eq!((q.x, q.y), (0.0, 0.0));
        assert!(matches!(
            DxfDocument::slope(&q),
            Err(PresentError::DegenerateSegment)
        ));
    }

    #[test]
    fn test_dxf_rejects_overflowed_height() {
        let input = SlopeInput::new().with_x(1e308).with_slope_pct(1000.0);
        let q = solve_input(&input).unwrap();
        assert!(q.y.is_infinite());
        assert!(matches!(
            DxfDocument::slope(&q),
            Err(PresentError::NonFiniteCoordinate(_))
        ));
    }
}
