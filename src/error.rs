use thiserror::Error;

/// Error type for edge-protected flood fill
///
/// The fill itself is total over a valid buffer; the only failure mode
/// is driving it with an edge mask whose dimensions do not match the image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FloodFillError {
    /// Image and edge mask dimensions do not match
    #[error("Image and edge mask dimensions do not match: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        /// Expected dimensions (width, height)
        expected: (u32, u32),
        /// Actual dimensions (width, height)
        actual: (u32, u32),
    },
}

/// Error type for clearing the alpha channel over a background region
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphaClearError {
    /// Image and background region dimensions do not match
    ///
    /// Returned when a `BackgroundRegion` computed for one image is applied
    /// to an image of different dimensions.
    #[error("Image and region dimensions do not match: expected {expected:?}, actual {actual:?}")]
    DimensionMismatch {
        /// Expected dimensions (width, height)
        expected: (u32, u32),
        /// Actual dimensions (width, height)
        actual: (u32, u32),
    },
}

/// Error type for the full background-removal pipeline
///
/// All pixel-processing stages are total functions over a decoded buffer;
/// failure is concentrated at the decode and encode boundaries. The stage
/// variants are reachable only when the stage traits are driven directly
/// with mismatched inputs, never through the orchestrator.
#[derive(Debug, Error)]
pub enum RemoveBackgroundError {
    /// Input bytes could not be decoded into a pixel buffer
    #[error("Failed to decode input image: {0}")]
    Decode(#[source] image::ImageError),

    /// The processed buffer could not be encoded as PNG
    #[error("Failed to encode output image: {0}")]
    Encode(#[source] image::ImageError),

    /// Flood fill was driven with a mismatched edge mask
    #[error(transparent)]
    FloodFill(#[from] FloodFillError),

    /// Alpha clearing was driven with a mismatched region
    #[error(transparent)]
    AlphaClear(#[from] AlphaClearError),
}
