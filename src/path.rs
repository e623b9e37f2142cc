use egui::{Pos2, Rect, Vec2};

use crate::geometry::calculate_bounds;

/// One instruction of a derived path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new subpath at the point.
    MoveTo(Pos2),
    /// Extend the current subpath with a straight line to the point.
    LineTo(Pos2),
    /// A closed rectangle used as a point marker for dots.
    Marker(Rect),
}

/// A purely geometric description of a drawing.
///
/// Carries no color or width: the renderer supplies those at draw time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathShape {
    commands: Vec<PathCommand>,
}

impl PathShape {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, point: Pos2) {
        self.commands.push(PathCommand::MoveTo(point));
    }

    pub fn line_to(&mut self, point: Pos2) {
        self.commands.push(PathCommand::LineTo(point));
    }

    pub fn add_marker(&mut self, rect: Rect) {
        self.commands.push(PathCommand::Marker(rect));
    }

    /// Append a polyline: a move to the first point, then a line to each of the rest.
    pub fn add_polyline(&mut self, points: &[Pos2]) {
        if let Some((first, rest)) = points.split_first() {
            self.move_to(*first);
            for point in rest {
                self.line_to(*point);
            }
        }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Whether every coordinate is finite.
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|command| match *command {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.is_finite(),
            PathCommand::Marker(rect) => rect.is_finite(),
        })
    }

    /// The tight bounding box of every point and marker, or `None` for an empty path.
    pub fn bounds(&self) -> Option<Rect> {
        let mut points = Vec::with_capacity(self.commands.len());
        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => points.push(p),
                PathCommand::Marker(rect) => points.extend([rect.min, rect.max]),
            }
        }
        calculate_bounds(&points, 0.0)
    }

    /// The same path shifted by `delta`.
    pub fn translate(&self, delta: Vec2) -> Self {
        let commands = self
            .commands
            .iter()
            .map(|command| match *command {
                PathCommand::MoveTo(p) => PathCommand::MoveTo(p + delta),
                PathCommand::LineTo(p) => PathCommand::LineTo(p + delta),
                PathCommand::Marker(rect) => PathCommand::Marker(rect.translate(delta)),
            })
            .collect();
        Self { commands }
    }

    /// Flatten the path into the polylines a stroker has to paint.
    ///
    /// Markers become closed rectangles. A subpath consisting of a lone move
    /// paints nothing and is dropped.
    pub fn polylines(&self) -> Vec<Vec<Pos2>> {
        let mut polylines = Vec::new();
        let mut current: Vec<Pos2> = Vec::new();

        let flush = |current: &mut Vec<Pos2>, polylines: &mut Vec<Vec<Pos2>>| {
            if current.len() > 1 {
                polylines.push(std::mem::take(current));
            } else {
                current.clear();
            }
        };

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) => {
                    flush(&mut current, &mut polylines);
                    current.push(p);
                }
                PathCommand::LineTo(p) => current.push(p),
                PathCommand::Marker(rect) => {
                    flush(&mut current, &mut polylines);
                    polylines.push(vec![
                        rect.left_top(),
                        rect.right_top(),
                        rect.right_bottom(),
                        rect.left_bottom(),
                        rect.left_top(),
                    ]);
                }
            }
        }
        flush(&mut current, &mut polylines);

        polylines
    }
}
