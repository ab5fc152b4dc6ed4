mod error;
mod flood_matte;
mod utils;

#[cfg(test)]
mod test_utils;

use image::{ImageBuffer, Pixel};

pub use error::{AlphaClearError, FloodFillError, RemoveBackgroundError};
pub use flood_matte::clear_alpha::ClearBackgroundAlpha;
pub use flood_matte::edge_detect::{DetectEdges, DEFAULT_EDGE_THRESHOLD};
pub use flood_matte::estimate_background::EstimateBackground;
pub use flood_matte::flood_fill::{BackgroundRegion, FloodFillBackground};
pub use flood_matte::remove_background::{
    remove_background_from_bytes, RemovalParams, RemoveBackground, DEFAULT_COLOR_TOLERANCE,
};

pub type Image<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;
