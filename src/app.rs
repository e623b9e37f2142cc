use egui::{Color32, ColorImage, TextureHandle, TextureOptions};

use crate::drawing_path::DrawingPath;
use crate::style::PadStyle;
use crate::widgets::DrawingPad;

/// Demo application showing two drawing pads and a live export preview.
///
/// We derive Deserialize/Serialize so we can persist the drawings on shutdown.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct DemoApp {
    signature: DrawingPath,
    sketch: DrawingPath,
    signature_style: PadStyle,
    sketch_style: PadStyle,
    // Skip serializing the preview since it is a GPU texture
    #[serde(skip)]
    preview: Option<TextureHandle>,
    #[serde(skip)]
    preview_dirty: bool,
}

impl Default for DemoApp {
    fn default() -> Self {
        Self {
            signature: DrawingPath::new(),
            sketch: DrawingPath::new(),
            signature_style: PadStyle::new(4.0),
            sketch_style: PadStyle::new(2.0)
                .with_stroke_color(Color32::RED)
                .with_background_color(Color32::from_rgba_unmultiplied(255, 255, 0, 51)),
            preview: None,
            preview_dirty: true,
        }
    }
}

impl DemoApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous app state (if any).
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value::<Self>(storage, eframe::APP_KEY) {
                log::info!("Restored {} committed segments", app.signature.segments().len());
                return Self {
                    preview_dirty: true,
                    ..app
                };
            }
        }
        Self::default()
    }

    fn refresh_preview(&mut self, ctx: &egui::Context) {
        self.preview_dirty = false;
        self.preview = match self
            .signature
            .export_raster(self.signature_style.stroke_color, self.signature_style.line_width)
        {
            Ok(image) => {
                let size = [image.width() as usize, image.height() as usize];
                let color_image = ColorImage::from_rgba_unmultiplied(size, image.as_raw());
                Some(ctx.load_texture("signature_preview", color_image, TextureOptions::default()))
            }
            Err(err) => {
                log::debug!("No preview: {}", err);
                None
            }
        };
    }
}

impl eframe::App for DemoApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                let response = ui.add(
                    DrawingPad::new(&mut self.signature)
                        .style(self.signature_style)
                        .id_salt("signature"),
                );
                self.preview_dirty |= response.changed();

                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        self.signature.clear();
                        self.preview_dirty = true;
                    }
                    ui.add_space(40.0);
                    if self.signature.is_empty() {
                        ui.label("❌ Empty");
                    } else {
                        ui.label("✔ Not Empty");
                    }
                    if ui.button("Copy as base64").clicked() {
                        let encoded = self
                            .signature
                            .export_base64(self.signature_style.stroke_color, self.signature_style.line_width);
                        log::info!("Exported {} base64 characters", encoded.len());
                        ui.ctx().copy_text(encoded);
                    }
                });

                if self.preview_dirty {
                    self.refresh_preview(ui.ctx());
                }
                if let Some(texture) = &self.preview {
                    egui::Frame::none()
                        .stroke(egui::Stroke::new(1.0, Color32::GREEN))
                        .show(ui, |ui| ui.image(texture));
                }

                ui.add(
                    DrawingPad::new(&mut self.sketch)
                        .style(self.sketch_style)
                        .desired_size(egui::vec2(ui.available_width(), 300.0))
                        .id_salt("sketch"),
                );
            });
        });
    }
}
