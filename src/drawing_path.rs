use egui::{Pos2, Rect, Vec2};
use serde::{Deserialize, Serialize};

use crate::path::PathShape;
use crate::stroke::{ActiveStroke, Segment};

/// Side length of the marker a dot derives to.
pub const DOT_SIZE: f32 = 1.0;

/// Accumulates pointer positions into a drawing of dots and strokes.
///
/// Committed segments are kept in drawing order and only grow until the
/// drawing is cleared. The stroke being dragged lives separately until
/// [`DrawingPath::end_stroke`] commits it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawingPath {
    segments: Vec<Segment>,
    #[serde(skip)]
    active: ActiveStroke,
}

impl DrawingPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a drawing from previously committed segments.
    ///
    /// Empty strokes are dropped so the restored drawing never contains them.
    pub fn from_segments(segments: impl IntoIterator<Item = Segment>) -> Self {
        let segments = segments
            .into_iter()
            .filter(|segment| !segment.points().is_empty())
            .collect();
        Self {
            segments,
            active: ActiveStroke::new(),
        }
    }

    /// Extend the stroke in progress by one point.
    pub fn add_point(&mut self, point: Pos2) {
        self.active.add_point(point);
    }

    /// Commit a single-point dot. The stroke in progress is left untouched.
    pub fn add_dot(&mut self, point: Pos2) {
        log::trace!("Adding dot at {:?}", point);
        self.segments.push(Segment::Dot(point));
    }

    /// Commit the stroke in progress. Does nothing when no points were added.
    pub fn end_stroke(&mut self) {
        if let Some(segment) = self.active.take_segment() {
            log::trace!("Committing stroke with {} points", segment.points().len());
            self.segments.push(segment);
        }
    }

    /// Remove every committed segment and discard the stroke in progress.
    pub fn clear(&mut self) {
        log::debug!("Clearing drawing with {} segments", self.segments.len());
        self.segments.clear();
        self.active.clear();
    }

    /// True when nothing has been committed, regardless of a stroke in progress.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn active_points(&self) -> &[Pos2] {
        self.active.points()
    }

    /// Derive the geometric path for drawing or export.
    ///
    /// The stroke in progress comes first, followed by the committed segments
    /// in the order they were drawn. Every single-point segment, and a stroke
    /// in progress with only one point, becomes a move plus a 1x1 marker;
    /// everything else becomes a polyline.
    pub fn derive_path(&self) -> PathShape {
        let mut path = PathShape::new();

        add_points(&mut path, self.active.points());
        for segment in &self.segments {
            add_points(&mut path, segment.points());
        }

        path
    }
}

/// A lone point becomes a move plus a dot marker, anything longer a polyline.
fn add_points(path: &mut PathShape, points: &[Pos2]) {
    if let [point] = points {
        path.move_to(*point);
        path.add_marker(Rect::from_min_size(*point, Vec2::splat(DOT_SIZE)));
    } else {
        path.add_polyline(points);
    }
}
