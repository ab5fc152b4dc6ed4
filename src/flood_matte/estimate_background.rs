use image::{Pixel, Rgb};
use imageproc::definitions::Image;

/// Number of boundary samples averaged into the background estimate.
const SAMPLE_COUNT: u32 = 6;

/// Trait for estimating the background color of an image
///
/// The estimate is the per-channel arithmetic mean (floor-truncated) of six
/// boundary samples: the four corners plus the top-middle and left-middle
/// boundary pixels. This assumes a photo whose subject is centered against a
/// roughly uniform backdrop touching the image boundary; when the samples
/// disagree the mean is still returned as a silent best effort.
pub trait EstimateBackground {
    /// Estimates the background color from fixed boundary samples
    ///
    /// Deterministic and O(1). Requires a non-empty image.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use flood_matte::{EstimateBackground, Image};
    /// use image::{ImageBuffer, Rgb, Rgba};
    ///
    /// let image: Image<Rgba<u8>> = ImageBuffer::from_pixel(4, 4, Rgba([10, 20, 30, 255]));
    /// assert_eq!(image.estimate_background(), Rgb([10, 20, 30]));
    /// ```
    fn estimate_background(&self) -> Rgb<u8>;
}

impl<P> EstimateBackground for Image<P>
where
    P: Pixel<Subpixel = u8>,
{
    fn estimate_background(&self) -> Rgb<u8> {
        let (width, height) = self.dimensions();
        let right = width.saturating_sub(1);
        let bottom = height.saturating_sub(1);

        let samples = [
            (0, 0),
            (right, 0),
            (0, bottom),
            (right, bottom),
            (width / 2, 0),
            (0, height / 2),
        ];

        let mut sum = [0u32; 3];
        for (x, y) in samples {
            let Rgb([red, green, blue]) = self.get_pixel(x, y).to_rgb();
            sum[0] += u32::from(red);
            sum[1] += u32::from(green);
            sum[2] += u32::from(blue);
        }

        Rgb([
            (sum[0] / SAMPLE_COUNT) as u8,
            (sum[1] / SAMPLE_COUNT) as u8,
            (sum[2] / SAMPLE_COUNT) as u8,
        ])
    }
}
