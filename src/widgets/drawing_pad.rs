use egui::{Color32, Id, InputState, Rect, Response, Sense, Ui, Vec2, Widget};

use crate::drawing_path::DrawingPath;
use crate::input::{GestureMapper, InputEvent};
use crate::renderer::Renderer;
use crate::style::PadStyle;

/// Height used when no explicit size is requested
pub const DEFAULT_HEIGHT: f32 = 200.0;

/// A freehand drawing surface editing a borrowed [`DrawingPath`].
///
/// The pad holds no drawing state of its own: the caller owns the path and
/// sees every stroke as soon as it is committed. The only thing remembered
/// between frames is the gesture in progress, kept in egui's temporary memory
/// under the widget's id.
///
/// ```no_run
/// # fn show(ui: &mut egui::Ui, path: &mut drawing_pad::DrawingPath) {
/// let response = ui.add(drawing_pad::DrawingPad::new(path).line_width(2.0));
/// if response.changed() {
///     log::info!("drawing changed");
/// }
/// # }
/// ```
pub struct DrawingPad<'a> {
    path: &'a mut DrawingPath,
    style: PadStyle,
    desired_size: Option<Vec2>,
    id_salt: Option<Id>,
}

impl<'a> DrawingPad<'a> {
    pub fn new(path: &'a mut DrawingPath) -> Self {
        Self {
            path,
            style: PadStyle::default(),
            desired_size: None,
            id_salt: None,
        }
    }

    pub fn style(mut self, style: PadStyle) -> Self {
        self.style = style;
        self
    }

    pub fn line_width(mut self, line_width: f32) -> Self {
        self.style.line_width = line_width;
        self
    }

    pub fn stroke_color(mut self, color: Color32) -> Self {
        self.style.stroke_color = color;
        self
    }

    pub fn background_color(mut self, color: Color32) -> Self {
        self.style.background_color = color;
        self
    }

    /// Size of the pad. Defaults to the available width and [`DEFAULT_HEIGHT`].
    pub fn desired_size(mut self, size: Vec2) -> Self {
        self.desired_size = Some(size);
        self
    }

    /// Give the pad a stable id, needed when its position in the layout can change mid-gesture.
    pub fn id_salt(mut self, salt: impl std::hash::Hash) -> Self {
        self.id_salt = Some(Id::new(salt));
        self
    }
}

impl Widget for DrawingPad<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let id = match self.id_salt {
            Some(salt) => ui.make_persistent_id(salt),
            None => ui.auto_id_with("drawing_pad"),
        };

        let size = self
            .desired_size
            .unwrap_or_else(|| Vec2::new(ui.available_width(), DEFAULT_HEIGHT));
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let mut response = ui.interact(rect, id, Sense::drag());

        let mapper_id = id.with("gesture");
        let mut mapper: GestureMapper = ui.data(|data| data.get_temp(mapper_id)).unwrap_or_default();
        // Bounds are re-derived every frame so resizing the pad moves the region with it.
        mapper.set_surface(rect.size(), self.style.line_width);

        let events = ui.input(|input| pointer_events(input, rect, mapper.is_pressed()));
        let mut changed = false;
        for event in events {
            changed |= mapper.handle_event(event, self.path);
        }
        ui.data_mut(|data| data.insert_temp(mapper_id, mapper));

        if ui.is_rect_visible(rect) {
            Renderer::new(self.style).render(ui.painter(), rect, &self.path.derive_path());
        }

        if changed {
            response.mark_changed();
        }
        response
    }
}

/// Translate this frame's pointer state into surface-local events.
fn pointer_events(input: &InputState, rect: Rect, tracking: bool) -> Vec<InputEvent> {
    let pointer = &input.pointer;
    let mut events = Vec::new();

    let Some(pos) = pointer.interact_pos() else {
        if tracking {
            events.push(InputEvent::PointerLeave);
        }
        return events;
    };
    let position = pos - rect.min.to_vec2();

    if pointer.primary_pressed() && rect.contains(pos) {
        events.push(InputEvent::PointerDown { position });
    } else if tracking && pointer.primary_down() && pointer.delta() != Vec2::ZERO {
        events.push(InputEvent::PointerMove { position });
    }

    // Also catches a press and release within the same frame.
    if (tracking || !events.is_empty()) && !pointer.primary_down() {
        events.push(InputEvent::PointerUp { position });
    }

    events
}
