pub mod drawing_pad;

pub use drawing_pad::DrawingPad;
