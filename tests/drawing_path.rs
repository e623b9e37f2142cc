use drawing_pad::{DrawingPath, GestureMapper, InputEvent, PathCommand, Segment};
use egui::{Pos2, pos2, vec2};

// Helper to draw a full stroke through the given points
fn draw_stroke(path: &mut DrawingPath, points: &[Pos2]) {
    for point in points {
        path.add_point(*point);
    }
    path.end_stroke();
}

#[test]
fn test_stroke_commits_points_in_order() {
    let mut path = DrawingPath::new();
    let points = [pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)];
    draw_stroke(&mut path, &points);

    assert_eq!(path.segments().len(), 1);
    assert_eq!(path.segments()[0].points(), &points);
    assert!(path.active_points().is_empty());
    assert!(!path.is_empty());
}

#[test]
fn test_derive_path_single_polyline() {
    let mut path = DrawingPath::new();
    draw_stroke(&mut path, &[pos2(0.0, 0.0), pos2(10.0, 0.0), pos2(10.0, 10.0)]);

    let derived = path.derive_path();
    assert_eq!(
        derived.commands(),
        &[
            PathCommand::MoveTo(pos2(0.0, 0.0)),
            PathCommand::LineTo(pos2(10.0, 0.0)),
            PathCommand::LineTo(pos2(10.0, 10.0)),
        ]
    );
    assert_eq!(derived.polylines().len(), 1);
}

#[test]
fn test_end_stroke_without_points_adds_nothing() {
    let mut path = DrawingPath::new();
    path.add_dot(pos2(1.0, 1.0));
    path.end_stroke();

    assert_eq!(path.segments().len(), 1);
}

#[test]
fn test_add_dot_ignores_pending_points() {
    let mut path = DrawingPath::new();
    path.add_point(pos2(0.0, 0.0));
    path.add_point(pos2(2.0, 2.0));
    path.add_dot(pos2(5.0, 5.0));

    assert_eq!(path.segments(), &[Segment::Dot(pos2(5.0, 5.0))]);
    assert_eq!(path.active_points().len(), 2);

    path.end_stroke();
    assert_eq!(path.segments().len(), 2);
    assert_eq!(path.segments()[1], Segment::Stroke(vec![pos2(0.0, 0.0), pos2(2.0, 2.0)]));
}

#[test]
fn test_emptiness_lifecycle() {
    let mut path = DrawingPath::new();
    assert!(path.is_empty());

    path.add_dot(pos2(5.0, 5.0));
    assert!(!path.is_empty());

    path.clear();
    assert!(path.is_empty());

    draw_stroke(&mut path, &[pos2(0.0, 0.0), pos2(1.0, 1.0)]);
    assert!(!path.is_empty());
}

#[test]
fn test_clear_discards_everything_and_is_idempotent() {
    let mut path = DrawingPath::new();
    draw_stroke(&mut path, &[pos2(0.0, 0.0), pos2(1.0, 1.0)]);
    path.add_dot(pos2(3.0, 3.0));
    path.add_point(pos2(4.0, 4.0));

    path.clear();
    let once = path.clone();
    path.clear();

    assert_eq!(path, once);
    assert!(path.segments().is_empty());
    assert!(path.active_points().is_empty());
    assert!(path.derive_path().is_empty());
}

#[test]
fn test_exit_and_reenter_produces_two_segments() {
    let mut mapper = GestureMapper::default();
    mapper.set_surface(vec2(100.0, 50.0), 4.0);
    let mut path = DrawingPath::new();

    let events = [
        InputEvent::PointerDown { position: pos2(40.0, 25.0) },
        InputEvent::PointerMove { position: pos2(60.0, 25.0) },
        InputEvent::PointerMove { position: pos2(60.0, 70.0) },
        InputEvent::PointerMove { position: pos2(70.0, 30.0) },
        InputEvent::PointerMove { position: pos2(80.0, 30.0) },
        InputEvent::PointerUp { position: pos2(80.0, 30.0) },
    ];
    for event in events {
        mapper.handle_event(event, &mut path);
    }

    assert_eq!(path.segments().len(), 2);
    assert_eq!(path.segments()[0].points(), &[pos2(40.0, 25.0), pos2(60.0, 25.0)]);
    assert_eq!(path.segments()[1].points(), &[pos2(70.0, 30.0), pos2(80.0, 30.0)]);
    assert_eq!(path.derive_path().polylines().len(), 2);
}

#[test]
fn test_restore_from_json() {
    let mut path = DrawingPath::new();
    path.add_dot(pos2(5.0, 5.0));
    draw_stroke(&mut path, &[pos2(0.0, 0.0), pos2(3.0, 4.0)]);
    path.add_point(pos2(9.0, 9.0));

    let json = serde_json::to_string(&path).unwrap();
    let restored: DrawingPath = serde_json::from_str(&json).unwrap();

    // The stroke in progress is transient and not persisted.
    assert_eq!(restored.segments(), path.segments());
    assert!(restored.active_points().is_empty());
}

#[test]
fn test_from_segments_seeds_drawing() {
    let seeded = DrawingPath::from_segments(vec![
        Segment::Dot(pos2(1.0, 1.0)),
        Segment::Stroke(vec![pos2(0.0, 0.0), pos2(2.0, 0.0)]),
    ]);
    assert!(!seeded.is_empty());
    assert_eq!(seeded.segments().len(), 2);
}
