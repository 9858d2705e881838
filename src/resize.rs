//! Width capping.

use image::DynamicImage;
use image::imageops::FilterType;

/// Resampling filter used when shrinking.
pub const FILTER: FilterType = FilterType::Lanczos3;

/// Compute the output size for an image that must fit within `max_width`.
///
/// Returns `None` when no resize is needed. Otherwise the width becomes
/// `max_width` and the height is `round(height * max_width / width)`,
/// never less than one pixel.
pub fn target_dimensions(width: u32, height: u32, max_width: u32) -> Option<(u32, u32)> {
    if width <= max_width {
        return None;
    }

    // Integer round-half-up of height * max_width / width.
    let numerator = u128::from(height) * u128::from(max_width);
    let width = u128::from(width);
    let new_height = (2 * numerator + width) / (2 * width);

    // width > max_width, so the quotient is at most height.
    Some((max_width, new_height.max(1) as u32))
}

/// Downsample `image` to `max_width` if it is wider, keeping the aspect ratio.
pub fn fit_to_width(image: DynamicImage, max_width: u32) -> DynamicImage {
    match target_dimensions(image.width(), image.height(), max_width) {
        Some((width, height)) => image.resize_exact(width, height, FILTER),
        None => image,
    }
}
