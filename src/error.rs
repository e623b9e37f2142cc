use thiserror::Error;

/// Errors that can occur while exporting a drawing as an image
#[derive(Debug, Error)]
pub enum ExportError {
    /// The drawing has no points to rasterize
    #[error("Cannot export an empty drawing")]
    EmptyPath,

    /// A point of the drawing has a NaN or infinite coordinate
    #[error("Cannot export a drawing with non-finite coordinates")]
    NonFinitePoint,

    #[error("Invalid line width: {0}")]
    InvalidLineWidth(f32),

    /// The raster surface would exceed the supported size
    #[error("Export surface too large: {width}x{height}")]
    SurfaceTooLarge { width: u32, height: u32 },

    #[error("Failed to encode image: {0}")]
    Encoding(#[from] image::ImageError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
