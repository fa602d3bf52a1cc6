use crate::config::Paint;
use crate::core::Viewport;
use crate::error::SparkResult;
use crate::render::{CirclePrimitive, PathPrimitive, RectPrimitive, Surface};

/// Drawing backend emitting an SVG document string.
///
/// Primitives append in call order, which preserves the plan's paint order
/// as SVG z-order.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    viewport: Viewport,
    body: String,
}

impl SvgSurface {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            body: String::new(),
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Assembles the complete SVG document.
    #[must_use]
    pub fn to_svg_string(&self) -> String {
        let Viewport { width, height } = self.viewport;
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" viewBox=\"0 0 {width} {height}\">\n{}</svg>\n",
            self.body
        )
    }
}

impl Surface for SvgSurface {
    fn draw_path(&mut self, path: &PathPrimitive) -> SparkResult<()> {
        path.validate()?;

        let mut d = String::new();
        for (index, vertex) in path.vertices.iter().enumerate() {
            let command = if index == 0 { 'M' } else { 'L' };
            d.push_str(&format!("{command}{},{}", vertex.x, vertex.y));
            if index + 1 < path.vertices.len() {
                d.push(' ');
            }
        }
        if path.closed {
            d.push_str(" Z");
        }

        self.body.push_str(&format!(
            "  <path d=\"{d}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            paint_attr(&path.fill),
            paint_attr(&path.stroke),
            path.stroke_width
        ));
        Ok(())
    }

    fn draw_rect(&mut self, rect: &RectPrimitive) -> SparkResult<()> {
        rect.validate()?;
        self.body.push_str(&format!(
            "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            rect.x, rect.y, rect.width, rect.height, rect.fill
        ));
        Ok(())
    }

    fn draw_circle(&mut self, circle: &CirclePrimitive) -> SparkResult<()> {
        circle.validate()?;
        self.body.push_str(&format!(
            "  <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"/>\n",
            circle.x,
            circle.y,
            circle.radius,
            paint_attr(&circle.fill),
            paint_attr(&circle.stroke),
            circle.stroke_width
        ));
        Ok(())
    }
}

fn paint_attr(paint: &Option<Paint>) -> &str {
    paint.as_ref().map_or("none", Paint::as_str)
}
