use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba};
use imageproc::definitions::Image;

use crate::error::RemoveBackgroundError;
use crate::flood_matte::clear_alpha::ClearBackgroundAlpha;
use crate::flood_matte::edge_detect::{DetectEdges, DEFAULT_EDGE_THRESHOLD};
use crate::flood_matte::estimate_background::EstimateBackground;
use crate::flood_matte::flood_fill::FloodFillBackground;

/// Default maximum per-channel difference for a pixel to count as background.
pub const DEFAULT_COLOR_TOLERANCE: u8 = 60;

/// Tuning parameters for background removal
///
/// The defaults match the values the pipeline was tuned with; exposing them
/// lets callers trade edge sensitivity against fill aggressiveness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RemovalParams {
    /// Sobel gradient magnitude above which a pixel is edge-protected.
    pub edge_threshold: f32,
    /// Maximum per-channel absolute difference from the estimated
    /// background color for the fill to absorb a pixel.
    pub color_tolerance: u8,
}

impl Default for RemovalParams {
    fn default() -> Self {
        Self {
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            color_tolerance: DEFAULT_COLOR_TOLERANCE,
        }
    }
}

impl RemovalParams {
    pub const fn new(edge_threshold: f32, color_tolerance: u8) -> Self {
        Self {
            edge_threshold,
            color_tolerance,
        }
    }
}

/// Trait for the synchronous pixel phase of background removal
///
/// Runs edge detection, background estimation, the edge-protected flood
/// fill, and alpha clearing over one decoded buffer. Each call is
/// independent and retains no state, so concurrent calls on different
/// images do not interfere.
pub trait RemoveBackground {
    /// Makes the detected background transparent, consuming the image
    ///
    /// A subject touching all four corners leaves no matching seed, so the
    /// region may be empty and the image returned fully opaque; this is
    /// accepted behavior. On failure the original buffer is never returned
    /// partially mutated.
    ///
    /// # Errors
    ///
    /// Stage dimension mismatches are propagated, but cannot occur here
    /// since every stage input derives from the same buffer.
    fn remove_background(self, params: &RemovalParams) -> Result<Self, RemoveBackgroundError>
    where
        Self: Sized;
}

impl RemoveBackground for Image<Rgba<u8>> {
    fn remove_background(self, params: &RemovalParams) -> Result<Self, RemoveBackgroundError> {
        let (width, height) = self.dimensions();
        if width == 0 || height == 0 {
            return Ok(self);
        }

        let edges = self.detect_edges(params.edge_threshold);
        let background = self.estimate_background();
        let region = self.flood_fill_background(&edges, background, params.color_tolerance)?;
        let cleared = self.clear_background_alpha(&region)?;
        Ok(cleared)
    }
}

/// Decodes an image, removes its background, and encodes the result as PNG
///
/// This is the boundary-crossing orchestrator: decode and encode are the
/// only fallible stages for a well-formed buffer. The input bytes are never
/// mutated, and no output is produced on failure.
///
/// # Errors
///
/// * `RemoveBackgroundError::Decode` - Input bytes are not a decodable image
/// * `RemoveBackgroundError::Encode` - PNG serialization failed
///
/// # Examples
///
/// ```no_run
/// use flood_matte::{remove_background_from_bytes, RemovalParams};
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let photo = std::fs::read("shirt.jpg")?;
/// let png = remove_background_from_bytes(&photo, &RemovalParams::default())?;
/// std::fs::write("shirt.png", png)?;
/// # Ok(())
/// # }
/// ```
pub fn remove_background_from_bytes(
    bytes: &[u8],
    params: &RemovalParams,
) -> Result<Vec<u8>, RemoveBackgroundError> {
    let decoded = image::load_from_memory(bytes).map_err(RemoveBackgroundError::Decode)?;
    let matted = decoded.into_rgba8().remove_background(params)?;

    let mut output = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(matted)
        .write_to(&mut output, ImageFormat::Png)
        .map_err(RemoveBackgroundError::Encode)?;

    Ok(output.into_inner())
}
