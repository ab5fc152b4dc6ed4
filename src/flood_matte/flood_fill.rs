use image::{Luma, Rgb, Rgba};
use imageproc::definitions::Image;
use itertools::Itertools;

use crate::{error::FloodFillError, utils::validate_matching_dimensions};

/// Set of pixel indices identified as background by the flood fill
///
/// Indices are flat row-major pixel positions (`y * width + x`). The set
/// deduplicates insertions, so its length is at most `width * height`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundRegion {
    width: u32,
    height: u32,
    mask: Vec<bool>,
    len: usize,
}

impl BackgroundRegion {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            mask: vec![false; width as usize * height as usize],
            len: 0,
        }
    }

    /// Dimensions of the image this region was computed for.
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels in the region.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns whether the flat pixel index belongs to the region.
    pub fn contains_index(&self, index: usize) -> bool {
        self.mask.get(index).copied().unwrap_or(false)
    }

    /// Returns whether the pixel at `(x, y)` belongs to the region.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width
            && y < self.height
            && self.mask[y as usize * self.width as usize + x as usize]
    }

    /// Iterates the flat pixel indices of the region in ascending order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.mask.iter().positions(|&member| member)
    }

    fn insert(&mut self, index: usize) {
        if !self.mask[index] {
            self.mask[index] = true;
            self.len += 1;
        }
    }
}

/// Trait for collecting background pixels by edge-protected flood fill
///
/// The fill starts independently from the four image corners and expands
/// across 4-connected neighbors whose color is within `tolerance` of the
/// background color on every channel. Pixels flagged in the edge mask are
/// never entered, so detected object outlines stop the fill even where the
/// colors inside would otherwise match the background.
pub trait FloodFillBackground {
    /// Flood fills from the image corners, collecting background pixels
    ///
    /// Uses an explicit stack rather than recursion, so large images cannot
    /// overflow the call stack. A pixel is visited at most once; the fill
    /// terminates when the stack empties. An image whose corners do not
    /// match the background yields an empty region, which is accepted
    /// behavior rather than an error.
    ///
    /// # Arguments
    ///
    /// * `edges` - Binary edge mask, non-zero meaning "edge, do not enter"
    /// * `background` - Estimated background color
    /// * `tolerance` - Maximum per-channel absolute difference to count as
    ///   background
    ///
    /// # Errors
    ///
    /// * `FloodFillError::DimensionMismatch` - When the edge mask dimensions
    ///   do not match the image
    fn flood_fill_background(
        &self,
        edges: &Image<Luma<u8>>,
        background: Rgb<u8>,
        tolerance: u8,
    ) -> Result<BackgroundRegion, FloodFillError>;
}

impl FloodFillBackground for Image<Rgba<u8>> {
    fn flood_fill_background(
        &self,
        edges: &Image<Luma<u8>>,
        background: Rgb<u8>,
        tolerance: u8,
    ) -> Result<BackgroundRegion, FloodFillError> {
        let (width, height) = self.dimensions();
        let (mask_width, mask_height) = edges.dimensions();
        validate_matching_dimensions(width, height, mask_width, mask_height, "FloodFill").map_err(
            |_| FloodFillError::DimensionMismatch {
                expected: (width, height),
                actual: (mask_width, mask_height),
            },
        )?;

        let mut region = BackgroundRegion::new(width, height);
        let (w, h) = (i64::from(width), i64::from(height));

        // Corner seeds; duplicates (degenerate sizes) are deduplicated on pop.
        let mut stack: Vec<(i64, i64)> =
            vec![(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)];

        while let Some((x, y)) = stack.pop() {
            if x < 0 || y < 0 || x >= w || y >= h {
                continue;
            }

            let (ux, uy) = (x as u32, y as u32);
            let index = uy as usize * width as usize + ux as usize;
            if region.contains_index(index) {
                continue;
            }

            // Edge protection: the fill never crosses a detected edge.
            if edges.get_pixel(ux, uy)[0] != 0 {
                continue;
            }

            let Rgba([red, green, blue, _]) = *self.get_pixel(ux, uy);
            if is_color_similar(Rgb([red, green, blue]), background, tolerance) {
                region.insert(index);
                stack.push((x + 1, y));
                stack.push((x - 1, y));
                stack.push((x, y + 1));
                stack.push((x, y - 1));
            }
        }

        Ok(region)
    }
}

/// Per-channel absolute-difference color match.
#[inline]
fn is_color_similar(color: Rgb<u8>, reference: Rgb<u8>, tolerance: u8) -> bool {
    let Rgb([r1, g1, b1]) = color;
    let Rgb([r2, g2, b2]) = reference;
    r1.abs_diff(r2) <= tolerance && g1.abs_diff(g2) <= tolerance && b1.abs_diff(b2) <= tolerance
}
