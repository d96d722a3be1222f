//! SVG export for the 2D slope plot.

use crate::error::Result;
use crate::line::{Frame, LineSegment};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// SVG document holding one plotted slope.
pub struct SvgDocument {
    frame: Frame,
    segment: LineSegment,
    stroke_width: f64,
    caption: Option<String>,
}

impl SvgDocument {
    /// Create a document for a segment already fitted to `frame`.
    pub fn new(frame: Frame, segment: LineSegment) -> Self {
        Self {
            frame,
            segment,
            stroke_width: 2.0,
            caption: None,
        }
    }

    /// Set the slope line's stroke width.
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    /// Add a caption in the top-left corner.
    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    /// Write the SVG to a file.
    pub fn export(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        self.write_to(&mut writer)?;
        writer.flush()?;
        log::info!("wrote SVG plot to {}", path.display());
        Ok(())
    }

    /// Write the SVG to any writer.
    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        let Frame {
            width,
            height,
            margin,
        } = self.frame;
        let LineSegment { start, end } = self.segment;

        writeln!(
            writer,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = fmt_num(width),
            h = fmt_num(height),
        )?;
        writeln!(
            writer,
            r##"  <rect x="{m}" y="{m}" width="{iw}" height="{ih}" fill="none" stroke="#cccccc"/>"##,
            m = fmt_num(margin),
            iw = fmt_num((width - 2.0 * margin).max(0.0)),
            ih = fmt_num((height - 2.0 * margin).max(0.0)),
        )?;

        // Horizontal then vertical leg of the slope triangle.
        writeln!(
            writer,
            r##"  <polyline points="{},{} {},{} {},{}" fill="none" stroke="#888888" stroke-dasharray="4 3"/>"##,
            fmt_num(start.x),
            fmt_num(start.y),
            fmt_num(end.x),
            fmt_num(start.y),
            fmt_num(end.x),
            fmt_num(end.y),
        )?;
        writeln!(
            writer,
            r##"  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#1f77b4" stroke-width="{}" stroke-linecap="round"/>"##,
            fmt_num(start.x),
            fmt_num(start.y),
            fmt_num(end.x),
            fmt_num(end.y),
            fmt_num(self.stroke_width),
        )?;

        if let Some(caption) = &self.caption {
            writeln!(
                writer,
                r#"  <text x="{}" y="{}" font-family="sans-serif" font-size="12">{}</text>"#,
                fmt_num(margin + 4.0),
                fmt_num(margin + 14.0),
                escape_xml(caption),
            )?;
        }

        writeln!(writer, "</svg>")?;
        Ok(())
    }
}

fn fmt_num(v: f64) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
