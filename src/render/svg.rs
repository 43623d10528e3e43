use std::fmt::{self, Write};

use crate::math::Transform2D;
use crate::scene::{Circle, HandScene, Primitive, RoundedRect, SceneNode};

/// Fill colours for each kind of primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub palm: &'static str,
    pub heel: &'static str,
    pub segment: &'static str,
    pub marker: &'static str,
    pub fingertip: &'static str,
    pub grid: &'static str,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            palm: "#1a1a1a",
            heel: "#0d0d0d",
            segment: "#111",
            marker: "#333",
            fingertip: "#111",
            grid: "#e6e6e6",
        }
    }
}

impl Palette {
    pub fn fill(&self, primitive: &Primitive) -> &'static str {
        match primitive {
            Primitive::Palm(_) => self.palm,
            Primitive::PalmHeel(_) => self.heel,
            Primitive::FingerSegment(_) => self.segment,
            Primitive::JointMarker(_) => self.marker,
            Primitive::Fingertip(_) => self.fingertip,
        }
    }
}

/// Writes a [`HandScene`] as an SVG document, one `<g>` per scene node.
#[derive(Debug, Clone)]
pub struct SvgWriter {
    pub width: f32,
    pub height: f32,
    /// Background grid cell size; `None` disables the grid.
    pub grid: Option<f32>,
    pub palette: Palette,
}

impl Default for SvgWriter {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            grid: Some(20.0),
            palette: Palette::default(),
        }
    }
}

impl SvgWriter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_grid(mut self) -> Self {
        self.grid = None;
        self
    }

    pub fn render_to_string(&self, scene: &HandScene) -> String {
        let mut out = String::new();
        // fmt::Write for String is infallible
        let _ = self.write_to(scene, &mut out);
        out
    }

    pub fn write_to<W: Write>(&self, scene: &HandScene, out: &mut W) -> fmt::Result {
        writeln!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            self.width, self.height
        )?;
        if let Some(cell) = self.grid {
            write!(
                out,
                r#"<defs><pattern id="grid" width="{cell}" height="{cell}" "#
            )?;
            write!(out, r#"patternUnits="userSpaceOnUse">"#)?;
            write!(
                out,
                r#"<path d="M {cell} 0 L 0 0 0 {cell}" fill="none" stroke="{}" stroke-width="1"/>"#,
                self.palette.grid
            )?;
            writeln!(out, "</pattern></defs>")?;
            writeln!(
                out,
                r#"<rect x="0" y="0" width="{}" height="{}" fill="url(#grid)"/>"#,
                self.width, self.height
            )?;
        }
        self.write_node(scene.root(), 1, out)?;
        writeln!(out, "</svg>")
    }

    fn write_node<W: Write>(&self, node: &SceneNode, depth: usize, out: &mut W) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match transform_attr(&node.transform) {
            Some(attr) => writeln!(out, r#"{indent}<g transform="{attr}">"#)?,
            None => writeln!(out, "{indent}<g>")?,
        }
        for primitive in &node.primitives {
            write!(out, "{indent}  ")?;
            self.write_primitive(primitive, out)?;
            writeln!(out)?;
        }
        for child in &node.children {
            self.write_node(child, depth + 1, out)?;
        }
        writeln!(out, "{indent}</g>")
    }

    fn write_primitive<W: Write>(&self, primitive: &Primitive, out: &mut W) -> fmt::Result {
        let fill = self.palette.fill(primitive);
        match primitive {
            Primitive::Palm(rect) | Primitive::PalmHeel(rect) | Primitive::FingerSegment(rect) => {
                write_rect(rect, fill, out)
            }
            Primitive::JointMarker(circle) | Primitive::Fingertip(circle) => {
                write_circle(circle, fill, out)
            }
        }
    }
}

fn write_rect<W: Write>(rect: &RoundedRect, fill: &str, out: &mut W) -> fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{fill}"/>"#,
        rect.x, rect.y, rect.width, rect.height, rect.corner_radius
    )
}

fn write_circle<W: Write>(circle: &Circle, fill: &str, out: &mut W) -> fmt::Result {
    write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{fill}"/>"#,
        circle.center.x, circle.center.y, circle.radius
    )
}

/// SVG `transform` attribute for a local transform, `None` for the identity.
pub fn transform_attr(transform: &Transform2D) -> Option<String> {
    let mut parts = Vec::new();
    if transform.translation != glam::Vec2::ZERO {
        parts.push(format!(
            "translate({},{})",
            transform.translation.x, transform.translation.y
        ));
    }
    if transform.rotation != 0.0 {
        parts.push(format!("rotate({})", transform.rotation));
    }
    if transform.skew_x != 0.0 {
        parts.push(format!("skewX({})", transform.skew_x));
    }
    if transform.scale != glam::Vec2::ONE {
        if transform.scale.x == transform.scale.y {
            parts.push(format!("scale({})", transform.scale.x));
        } else {
            parts.push(format!("scale({},{})", transform.scale.x, transform.scale.y));
        }
    }
    if parts.is_empty() {
        None
    } else {
        Some(parts.join(" "))
    }
}
