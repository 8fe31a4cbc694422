//! Lane color palette.

use image::Rgb;

/// Default marker palette: pure red, green, blue.
///
/// A read-only constant so every caller starts from the same colors; palette
/// overrides are supplied explicitly per run.
pub const DEFAULT_PALETTE: [Rgb<u8>; 3] = [Rgb([255, 0, 0]), Rgb([0, 255, 0]), Rgb([0, 0, 255])];

/// Returns the color for lane `index`, cycling through `palette`.
///
/// Palettes shorter than the lane count wrap around, so lane `i` and lane
/// `i + palette.len()` share a color. `palette` must be non-empty.
#[inline]
pub fn lane_color(palette: &[Rgb<u8>], index: usize) -> Rgb<u8> {
    palette[index % palette.len()]
}
