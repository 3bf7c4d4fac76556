//! Pens for the two output targets: an SVG path and a plain-text listing.

use std::fmt::Write;

use epicycle_core::{ParametricSample, Pen};

use crate::config::{CanvasConfig, RenderConfig};

/// Builds the `d` attribute of an SVG `<path>` in screen coordinates.
pub struct SvgPen<'a> {
    canvas: &'a CanvasConfig,
    data: String,
}

impl<'a> SvgPen<'a> {
    pub fn new(canvas: &'a CanvasConfig) -> Self {
        Self {
            canvas,
            data: String::new(),
        }
    }

    pub fn finish(mut self, close: bool) -> String {
        if close && !self.data.is_empty() {
            self.data.push_str(" Z");
        }
        self.data
    }

    fn push(&mut self, command: char, point: ParametricSample) {
        let (x, y) = self.canvas.to_screen(point);
        if !self.data.is_empty() {
            self.data.push(' ');
        }
        let _ = write!(self.data, "{command} {} {}", coord(x), coord(y));
    }
}

impl Pen for SvgPen<'_> {
    fn move_to(&mut self, point: ParametricSample) {
        self.push('M', point);
    }

    fn line_to(&mut self, point: ParametricSample) {
        self.push('L', point);
    }
}

/// One `M x y` / `L x y` line per sample, in math coordinates.
#[derive(Default)]
pub struct ListingPen {
    out: String,
}

impl ListingPen {
    pub fn finish(self) -> String {
        self.out
    }
}

impl Pen for ListingPen {
    fn move_to(&mut self, point: ParametricSample) {
        let _ = writeln!(self.out, "M {} {}", coord(point.x), coord(point.y));
    }

    fn line_to(&mut self, point: ParametricSample) {
        let _ = writeln!(self.out, "L {} {}", coord(point.x), coord(point.y));
    }
}

/// Wrap path data into a standalone SVG document.
pub fn svg_document(paths: &[String], canvas: &CanvasConfig, render: &RenderConfig) -> String {
    let mut doc = String::new();
    let _ = writeln!(
        doc,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = canvas.width,
        h = canvas.height
    );
    let _ = writeln!(
        doc,
        r#"  <rect width="100%" height="100%" fill="{}"/>"#,
        escape_attr(&render.background)
    );
    for data in paths.iter().filter(|d| !d.is_empty()) {
        let _ = writeln!(
            doc,
            r#"  <path d="{data}" fill="none" stroke="{}" stroke-width="{}"/>"#,
            escape_attr(&render.stroke),
            render.stroke_width
        );
    }
    doc.push_str("</svg>\n");
    doc
}

/// Escape a config value for use inside a double-quoted XML attribute.
fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Three decimals, without the `-0.000` that rounding noise produces.
fn coord(v: f64) -> String {
    let s = format!("{v:.3}");
    if s == "-0.000" { "0.000".to_string() } else { s }
}
