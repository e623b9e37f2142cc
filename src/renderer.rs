use egui::{Painter, Rect, Shape, Stroke};

use crate::path::PathShape;
use crate::style::PadStyle;

/// Paints derived paths onto an egui surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
    style: PadStyle,
}

impl Renderer {
    pub fn new(style: PadStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> &PadStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: PadStyle) {
        self.style = style;
    }

    /// Build the shapes for `path`, whose coordinates are relative to `rect.min`.
    ///
    /// egui lines have butt caps, so every vertex also gets a disc of the
    /// stroke's radius to give the round caps and joins of the exported image.
    pub fn shapes(&self, path: &PathShape, rect: Rect) -> Vec<Shape> {
        let radius = self.style.line_width / 2.0;
        let color = self.style.stroke_color;
        let stroke = Stroke::new(self.style.line_width, color);

        let mut shapes = vec![Shape::rect_filled(rect, 0.0, self.style.background_color)];
        for polyline in path.translate(rect.min.to_vec2()).polylines() {
            shapes.extend(polyline.iter().map(|point| Shape::circle_filled(*point, radius, color)));
            shapes.push(Shape::line(polyline, stroke));
        }
        shapes
    }

    /// Renders the background and the path clipped to `rect`
    pub fn render(&self, painter: &Painter, rect: Rect, path: &PathShape) {
        painter.with_clip_rect(rect).extend(self.shapes(path, rect));
    }
}
