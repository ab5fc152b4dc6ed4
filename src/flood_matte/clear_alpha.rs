use image::Rgba;
use imageproc::definitions::Image;

use crate::flood_matte::flood_fill::BackgroundRegion;
use crate::{error::AlphaClearError, utils::validate_matching_dimensions};

/// Trait for making background pixels transparent
///
/// Sets the alpha channel to 0 for every pixel in a [`BackgroundRegion`]
/// while leaving color channels and all other pixels byte-identical.
/// Clearing is idempotent.
pub trait ClearBackgroundAlpha {
    /// Clears the alpha channel over the region, consuming the image
    ///
    /// # Errors
    ///
    /// * `AlphaClearError::DimensionMismatch` - When the region was computed
    ///   for an image of different dimensions
    fn clear_background_alpha(self, region: &BackgroundRegion) -> Result<Self, AlphaClearError>
    where
        Self: Sized;

    /// Clears the alpha channel over the region in place
    ///
    /// # Errors
    ///
    /// * `AlphaClearError::DimensionMismatch` - When the region was computed
    ///   for an image of different dimensions
    fn clear_background_alpha_mut(
        &mut self,
        region: &BackgroundRegion,
    ) -> Result<&mut Self, AlphaClearError>;
}

impl ClearBackgroundAlpha for Image<Rgba<u8>> {
    fn clear_background_alpha(
        mut self,
        region: &BackgroundRegion,
    ) -> Result<Self, AlphaClearError> {
        self.clear_background_alpha_mut(region)?;
        Ok(self)
    }

    fn clear_background_alpha_mut(
        &mut self,
        region: &BackgroundRegion,
    ) -> Result<&mut Self, AlphaClearError> {
        let (width, height) = self.dimensions();
        let (region_width, region_height) = region.dimensions();
        validate_matching_dimensions(width, height, region_width, region_height, "ClearAlpha")
            .map_err(|_| AlphaClearError::DimensionMismatch {
                expected: (width, height),
                actual: (region_width, region_height),
            })?;

        let stride = width as usize;
        for index in region.indices() {
            let x = (index % stride) as u32;
            let y = (index / stride) as u32;
            self.get_pixel_mut(x, y)[3] = 0;
        }

        Ok(self)
    }
}
