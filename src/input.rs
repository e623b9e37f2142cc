use egui::{Pos2, Rect, Vec2};

use crate::drawing_path::DrawingPath;
use crate::geometry::valid_drawing_region;

/// Pointer input on a drawing surface, in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed (or finger touched down) on the surface
    PointerDown { position: Pos2 },
    /// Pointer moved while the surface is tracking it
    PointerMove { position: Pos2 },
    /// Primary button released (or finger lifted)
    PointerUp { position: Pos2 },
    /// Pointer left the surface entirely
    PointerLeave,
}

/// Maps pointer events onto a [`DrawingPath`].
///
/// A press followed by a release without movement commits a dot. Movement
/// inside the valid drawing region extends the stroke in progress; movement
/// outside it commits the stroke, so re-entering starts a new one. The region
/// is handed in explicitly by whoever knows the surface geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureMapper {
    region: Rect,
    pressed: bool,
    pending_tap: Option<Pos2>,
}

impl Default for GestureMapper {
    fn default() -> Self {
        Self {
            region: Rect::NOTHING,
            pressed: false,
            pending_tap: None,
        }
    }
}

impl GestureMapper {
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            ..Self::default()
        }
    }

    /// Accept input within `region` from now on.
    pub fn set_region(&mut self, region: Rect) {
        self.region = region;
    }

    /// Derive the region from a surface's size and the stroke's line width.
    pub fn set_surface(&mut self, surface_size: Vec2, line_width: f32) {
        self.region = valid_drawing_region(surface_size, line_width);
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Apply one event to `path`. Returns true if the drawing changed.
    pub fn handle_event(&mut self, event: InputEvent, path: &mut DrawingPath) -> bool {
        match event {
            InputEvent::PointerDown { position } => {
                self.pressed = true;
                self.pending_tap = self.region.contains(position).then_some(position);
                false
            }
            InputEvent::PointerMove { position } => {
                if !self.pressed {
                    return false;
                }
                if self.region.contains(position) {
                    self.flush_pending_tap(path);
                    path.add_point(position);
                    true
                } else {
                    self.flush_pending_tap(path);
                    Self::commit_stroke(path)
                }
            }
            InputEvent::PointerUp { .. } => {
                if !self.pressed {
                    return false;
                }
                self.pressed = false;
                match self.pending_tap.take() {
                    Some(start) => {
                        path.add_dot(start);
                        true
                    }
                    None => Self::commit_stroke(path),
                }
            }
            InputEvent::PointerLeave => {
                self.flush_pending_tap(path);
                Self::commit_stroke(path)
            }
        }
    }

    /// The press turned out to be a drag: its start point begins the stroke.
    fn flush_pending_tap(&mut self, path: &mut DrawingPath) {
        if let Some(start) = self.pending_tap.take() {
            path.add_point(start);
        }
    }

    fn commit_stroke(path: &mut DrawingPath) -> bool {
        let had_points = !path.active_points().is_empty();
        path.end_stroke();
        had_points
    }
}
