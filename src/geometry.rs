use egui::{Pos2, Rect, Vec2};

/// Calculate the bounding box for a set of points, grown by `padding` on every side.
///
/// Returns `None` for an empty slice.
pub fn calculate_bounds(points: &[Pos2], padding: f32) -> Option<Rect> {
    let first = *points.first()?;

    let mut min = first;
    let mut max = first;
    for point in &points[1..] {
        min = min.min(*point);
        max = max.max(*point);
    }

    Some(Rect::from_min_max(min, max).expand(padding))
}

/// The region of a surface in which pointer input counts as drawing input.
///
/// The surface (in its own local coordinates, origin at the top-left) is inset
/// by half the line width on each side so a stroke's painted extent stays on
/// the surface. Surfaces narrower than the line width yield an empty region.
pub fn valid_drawing_region(surface_size: Vec2, line_width: f32) -> Rect {
    let half = line_width / 2.0;
    let width = (surface_size.x - line_width).max(0.0);
    let height = (surface_size.y - line_width).max(0.0);
    Rect::from_min_size(Pos2::new(half, half), Vec2::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_bounds() {
        assert_eq!(calculate_bounds(&[], 1.0), None);

        let rect = calculate_bounds(&[pos2(2.0, 8.0), pos2(6.0, 1.0), pos2(4.0, 4.0)], 0.0).unwrap();
        assert_eq!(rect.min, pos2(2.0, 1.0));
        assert_eq!(rect.max, pos2(6.0, 8.0));

        let padded = calculate_bounds(&[pos2(5.0, 5.0)], 2.0).unwrap();
        assert_eq!(padded.min, pos2(3.0, 3.0));
        assert_eq!(padded.max, pos2(7.0, 7.0));
    }

    #[test]
    fn test_valid_region_is_inset_by_half_line_width() {
        let region = valid_drawing_region(vec2(200.0, 100.0), 4.0);
        assert_eq!(region.min, pos2(2.0, 2.0));
        assert_eq!(region.max, pos2(198.0, 98.0));

        assert!(region.contains(pos2(2.0, 50.0)));
        assert!(!region.contains(pos2(1.0, 50.0)));
        assert!(!region.contains(pos2(199.0, 50.0)));
    }

    #[test]
    fn test_valid_region_of_tiny_surface_is_empty() {
        let region = valid_drawing_region(vec2(3.0, 3.0), 4.0);
        assert_eq!(region.area(), 0.0);
    }
}
