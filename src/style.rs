use egui::Color32;
use serde::{Deserialize, Serialize};

/// Visual settings of a drawing pad.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PadStyle {
    /// Width of the stroke line, also used to inset the drawing region.
    pub line_width: f32,
    pub stroke_color: Color32,
    pub background_color: Color32,
}

impl Default for PadStyle {
    fn default() -> Self {
        Self {
            line_width: 4.0,
            stroke_color: Color32::BLACK,
            background_color: Color32::WHITE,
        }
    }
}

impl PadStyle {
    pub fn new(line_width: f32) -> Self {
        Self {
            line_width,
            ..Self::default()
        }
    }

    pub fn with_stroke_color(mut self, color: Color32) -> Self {
        self.stroke_color = color;
        self
    }

    pub fn with_background_color(mut self, color: Color32) -> Self {
        self.background_color = color;
        self
    }
}
