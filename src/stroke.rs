use egui::Pos2;
use serde::{Deserialize, Serialize};

/// A committed, immutable unit of a drawing.
///
/// Dots and strokes are tracked separately so the origin of a mark (a tap or a
/// drag) survives; both collapse to the same geometry only when a path is
/// derived for drawing or export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Segment {
    /// A single-point mark made by a tap.
    Dot(Pos2),
    /// A polyline made by a continuous drag. Never empty.
    Stroke(Vec<Pos2>),
}

impl Segment {
    /// The points of this segment, in drawing order.
    pub fn points(&self) -> &[Pos2] {
        match self {
            Segment::Dot(point) => std::slice::from_ref(point),
            Segment::Stroke(points) => points,
        }
    }

    pub fn is_dot(&self) -> bool {
        matches!(self, Segment::Dot(_))
    }

    /// Whether this segment renders as a single-point marker.
    ///
    /// True for dots and for strokes that only recorded one point.
    pub fn renders_as_dot(&self) -> bool {
        self.points().len() == 1
    }
}

// Mutable stroke for the drag in progress
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActiveStroke {
    points: Vec<Pos2>,
}

impl ActiveStroke {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_point(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Move the gathered points into a committed segment, leaving this stroke empty.
    ///
    /// Returns `None` when nothing has been gathered.
    pub fn take_segment(&mut self) -> Option<Segment> {
        if self.points.is_empty() {
            return None;
        }
        Some(Segment::Stroke(std::mem::take(&mut self.points)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    #[test]
    fn test_dot_points() {
        let dot = Segment::Dot(pos2(5.0, 5.0));
        assert_eq!(dot.points(), &[pos2(5.0, 5.0)]);
        assert!(dot.is_dot());
        assert!(dot.renders_as_dot());
    }

    #[test]
    fn test_single_point_stroke_is_not_a_dot() {
        let stroke = Segment::Stroke(vec![pos2(1.0, 2.0)]);
        assert!(!stroke.is_dot());
        assert!(stroke.renders_as_dot());
    }

    #[test]
    fn test_take_segment() {
        let mut active = ActiveStroke::new();
        assert_eq!(active.take_segment(), None);

        active.add_point(pos2(0.0, 0.0));
        active.add_point(pos2(3.0, 4.0));

        let segment = active.take_segment().unwrap();
        assert_eq!(segment, Segment::Stroke(vec![pos2(0.0, 0.0), pos2(3.0, 4.0)]));
        assert!(active.is_empty());
    }
}
