#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod drawing_path;
pub mod error;
pub mod export;
pub mod geometry;
pub mod input;
pub mod path;
pub mod renderer;
pub mod stroke;
pub mod style;
pub mod widgets;

pub use app::DemoApp;
pub use drawing_path::DrawingPath;
pub use error::{ExportError, ExportResult};
pub use input::{GestureMapper, InputEvent};
pub use path::{PathCommand, PathShape};
pub use renderer::Renderer;
pub use stroke::Segment;
pub use style::PadStyle;
pub use widgets::DrawingPad;
