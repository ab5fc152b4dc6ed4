use image::{Luma, Pixel, Rgb, Rgba};
use imageproc::definitions::Image;
use imageproc::map::map_colors;

/// Default gradient-magnitude threshold above which a pixel counts as an edge.
pub const DEFAULT_EDGE_THRESHOLD: f32 = 50.0;

/// Mask value marking an edge pixel.
const EDGE: u8 = 255;

/// Trait for computing a binary edge mask from an image
///
/// Edges are detected with the 3x3 Sobel operator applied to perceptual
/// luminance (`Y = 0.299R + 0.587G + 0.114B`). A pixel is an edge iff the
/// gradient magnitude `sqrt(Gx^2 + Gy^2)` strictly exceeds the threshold.
///
/// The mask has the same dimensions as the image, with 255 marking edge
/// pixels and 0 everything else. Border pixels have no full 3x3
/// neighborhood and are never flagged; images narrower than 3 pixels in
/// either dimension produce an all-zero mask.
pub trait DetectEdges {
    /// Computes the binary edge mask for this image
    ///
    /// # Arguments
    ///
    /// * `threshold` - Gradient magnitude above which a pixel is an edge
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use flood_matte::{DetectEdges, Image, DEFAULT_EDGE_THRESHOLD};
    /// use image::{ImageBuffer, Rgba};
    ///
    /// let image: Image<Rgba<u8>> = ImageBuffer::new(10, 10);
    /// let edges = image.detect_edges(DEFAULT_EDGE_THRESHOLD);
    /// assert_eq!(edges.dimensions(), (10, 10));
    /// ```
    fn detect_edges(&self, threshold: f32) -> Image<Luma<u8>>;
}

impl DetectEdges for Image<Rgba<u8>> {
    fn detect_edges(&self, threshold: f32) -> Image<Luma<u8>> {
        let luma = map_colors(self, |pixel| Luma([luminance(&pixel.to_rgb())]));
        sobel_mask(&luma, threshold)
    }
}

impl DetectEdges for Image<Rgb<u8>> {
    fn detect_edges(&self, threshold: f32) -> Image<Luma<u8>> {
        let luma = map_colors(self, |pixel| Luma([luminance(&pixel)]));
        sobel_mask(&luma, threshold)
    }
}

/// Rec. 601 luma weights, matching the original capture pipeline.
#[inline]
fn luminance(Rgb([red, green, blue]): &Rgb<u8>) -> f32 {
    0.299 * f32::from(*red) + 0.587 * f32::from(*green) + 0.114 * f32::from(*blue)
}

/// Applies the Sobel kernel pair to a luminance plane and thresholds the
/// gradient magnitude into a binary mask.
fn sobel_mask(luma: &Image<Luma<f32>>, threshold: f32) -> Image<Luma<u8>> {
    let (width, height) = luma.dimensions();
    let mut mask: Image<Luma<u8>> = Image::new(width, height);

    if width < 3 || height < 3 {
        return mask;
    }

    let at = |x: u32, y: u32| luma.get_pixel(x, y)[0];

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let tl = at(x - 1, y - 1);
            let tc = at(x, y - 1);
            let tr = at(x + 1, y - 1);
            let ml = at(x - 1, y);
            let mr = at(x + 1, y);
            let bl = at(x - 1, y + 1);
            let bc = at(x, y + 1);
            let br = at(x + 1, y + 1);

            // Sobel X kernel:  -1 0 +1        Sobel Y kernel:  -1 -2 -1
            //                  -2 0 +2                          0  0  0
            //                  -1 0 +1                         +1 +2 +1
            let gx = -tl + tr - 2.0 * ml + 2.0 * mr - bl + br;
            let gy = -tl - 2.0 * tc - tr + bl + 2.0 * bc + br;

            if gx.hypot(gy) > threshold {
                mask.put_pixel(x, y, Luma([EDGE]));
            }
        }
    }

    mask
}
