//! Test utilities for flood-matte
//!
//! Synthetic images shared by the unit tests. Only compiled for tests.

use image::Rgba;
use imageproc::definitions::Image;

/// Creates an image filled with a single color.
pub fn solid_rgba_image(width: u32, height: u32, color: Rgba<u8>) -> Image<Rgba<u8>> {
    Image::from_pixel(width, height, color)
}

/// Creates an image with a `border`-pixel frame around a centered block.
///
/// The layout mirrors a garment photographed against a uniform backdrop:
/// `frame` is the backdrop color touching every corner, `center` the subject.
pub fn framed_rgba_image(
    width: u32,
    height: u32,
    border: u32,
    frame: Rgba<u8>,
    center: Rgba<u8>,
) -> Image<Rgba<u8>> {
    let mut image = Image::from_pixel(width, height, frame);
    for y in border..height.saturating_sub(border) {
        for x in border..width.saturating_sub(border) {
            image.put_pixel(x, y, center);
        }
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_image_is_uniform() {
        let image = solid_rgba_image(3, 2, Rgba([1, 2, 3, 4]));
        assert_eq!(image.dimensions(), (3, 2));
        assert!(image.pixels().all(|p| *p == Rgba([1, 2, 3, 4])));
    }

    #[test]
    fn framed_image_places_the_block_inside_the_border() {
        let frame = Rgba([255, 255, 255, 255]);
        let center = Rgba([255, 0, 0, 255]);
        let image = framed_rgba_image(10, 10, 2, frame, center);

        assert_eq!(image.get_pixel(0, 0), &frame);
        assert_eq!(image.get_pixel(1, 1), &frame);
        assert_eq!(image.get_pixel(2, 2), &center);
        assert_eq!(image.get_pixel(7, 7), &center);
        assert_eq!(image.get_pixel(8, 8), &frame);
        assert_eq!(image.get_pixel(9, 9), &frame);
    }
}
