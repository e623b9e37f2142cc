use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use egui::Color32;
use image::{ImageFormat, RgbaImage};
use std::io::Cursor;
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::drawing_path::DrawingPath;
use crate::error::{ExportError, ExportResult};
use crate::path::{PathCommand, PathShape};

/// Largest width or height of an exported image, in pixels
pub const MAX_EXPORT_DIMENSION: u32 = 16384;

/// Largest pixel count of an exported image (64 MiB of RGBA)
pub const MAX_EXPORT_PIXELS: u64 = 16 * 1024 * 1024;

/// Stroke a path into a new image sized to its bounds.
///
/// The surface is the path's bounding box grown by `line_width`, and the path
/// is shifted so its stroked extent sits `line_width / 2` in from every edge.
/// Strokes use round caps and joins and are anti-aliased. Unpainted pixels are
/// fully transparent.
pub fn rasterize(path: &PathShape, stroke_color: Color32, line_width: f32) -> ExportResult<RgbaImage> {
    if !line_width.is_finite() || line_width <= 0.0 {
        return Err(ExportError::InvalidLineWidth(line_width));
    }
    if !path.is_finite() {
        return Err(ExportError::NonFinitePoint);
    }

    let bounds = path.bounds().ok_or(ExportError::EmptyPath)?;

    let width = (bounds.width() + line_width).ceil().max(1.0);
    let height = (bounds.height() + line_width).ceil().max(1.0);
    let too_large = width > MAX_EXPORT_DIMENSION as f32
        || height > MAX_EXPORT_DIMENSION as f32
        || (width as u64) * (height as u64) > MAX_EXPORT_PIXELS;
    if too_large {
        return Err(ExportError::SurfaceTooLarge {
            width: width as u32,
            height: height as u32,
        });
    }
    let (width, height) = (width as u32, height as u32);

    let skia_path = to_skia_path(path).ok_or(ExportError::EmptyPath)?;
    let mut pixmap = Pixmap::new(width, height).ok_or(ExportError::SurfaceTooLarge { width, height })?;

    let [r, g, b, a] = stroke_color.to_srgba_unmultiplied();
    let mut paint = Paint::default();
    paint.set_color_rgba8(r, g, b, a);
    paint.anti_alias = true;

    let stroke = Stroke {
        width: line_width,
        line_cap: LineCap::Round,
        line_join: LineJoin::Round,
        ..Stroke::default()
    };
    let offset = line_width / 2.0;
    let transform = Transform::from_translate(offset - bounds.min.x, offset - bounds.min.y);
    pixmap.stroke_path(&skia_path, &paint, &stroke, transform, None);

    let mut data = Vec::with_capacity(pixmap.data().len());
    for pixel in pixmap.pixels() {
        let color = pixel.demultiply();
        data.extend([color.red(), color.green(), color.blue(), color.alpha()]);
    }
    let image = RgbaImage::from_raw(width, height, data).ok_or(ExportError::SurfaceTooLarge { width, height })?;

    log::debug!("Rasterized drawing into {}x{} image", width, height);
    Ok(image)
}

/// Build the stroker's path. Markers become closed rectangles.
fn to_skia_path(path: &PathShape) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for command in path.commands() {
        match *command {
            PathCommand::MoveTo(p) => builder.move_to(p.x, p.y),
            PathCommand::LineTo(p) => builder.line_to(p.x, p.y),
            PathCommand::Marker(rect) => {
                if let Some(rect) = tiny_skia::Rect::from_xywh(rect.min.x, rect.min.y, rect.width(), rect.height()) {
                    builder.push_rect(rect);
                }
            }
        }
    }
    builder.finish()
}

/// Encode an image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> ExportResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

impl DrawingPath {
    /// Rasterize the drawing, including any stroke in progress.
    ///
    /// Fails with [`ExportError::EmptyPath`] when there is nothing to draw.
    pub fn export_raster(&self, stroke_color: Color32, line_width: f32) -> ExportResult<RgbaImage> {
        rasterize(&self.derive_path(), stroke_color, line_width)
    }

    /// Rasterize the drawing and encode it as PNG.
    pub fn export_png(&self, stroke_color: Color32, line_width: f32) -> ExportResult<Vec<u8>> {
        let image = self.export_raster(stroke_color, line_width)?;
        encode_png(&image)
    }

    /// The drawing as a base64-encoded PNG.
    ///
    /// Returns an empty string when the drawing is empty or cannot be encoded.
    pub fn export_base64(&self, stroke_color: Color32, line_width: f32) -> String {
        match self.export_png(stroke_color, line_width) {
            Ok(bytes) => STANDARD.encode(bytes),
            Err(ExportError::EmptyPath) => {
                log::debug!("Nothing to export, returning empty string");
                String::new()
            }
            Err(err) => {
                log::warn!("Failed to export drawing: {}", err);
                String::new()
            }
        }
    }

    /// The drawing as a `data:image/png;base64,` URL, or an empty string on failure.
    pub fn export_data_url(&self, stroke_color: Color32, line_width: f32) -> String {
        let data = self.export_base64(stroke_color, line_width);
        if data.is_empty() {
            return data;
        }
        format!("data:image/png;base64,{data}")
    }
}
