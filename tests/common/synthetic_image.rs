use image::{Rgb, RgbImage};

/// Background color used by [`solid_rgb`].
pub const BACKGROUND: Rgb<u8> = Rgb([24, 24, 24]);

/// Generates a uniform dark background image, so any marker pixel is
/// distinguishable from the untouched area.
pub fn solid_rgb(width: u32, height: u32) -> RgbImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    RgbImage::from_pixel(width, height, BACKGROUND)
}
