//! JPEG selection, decoding and re-encoding.
//!
//! Files are selected by name alone: anything whose name ends in `.jpg`
//! (ASCII case-insensitive) is treated as a JPEG, without looking at its
//! contents. Decoding goes through the `image` crate, which sniffs the
//! actual format, so a PNG saved under a `.jpg` name is still converted. Encoding uses
//! `jpeg-encoder` so the Huffman tables can be optimized per image, which
//! the `image` crate's own encoder does not offer.

use crate::error::{Error, Result};
use image::{DynamicImage, GenericImageView};
use jpeg_encoder::{ColorType, Encoder};
use std::path::Path;

/// File name suffix that selects a file for optimization.
pub const SUFFIX: &str = ".jpg";

/// Check if a path names a JPEG by its suffix.
///
/// `.jpeg`, `.jpe` and `.jfif` are deliberately not matched.
pub fn is_jpeg_path(path: &Path) -> bool {
    let Some(name) = path.file_name() else {
        return false;
    };
    let name = name.as_encoded_bytes();
    let suffix = SUFFIX.as_bytes();

    name.len() >= suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
}

/// Decode the bytes read from `path`, detecting the format from its content.
pub fn decode(data: &[u8], path: &Path) -> Result<DynamicImage> {
    image::load_from_memory(data).map_err(|e| Error::decode(path, e))
}

/// Encode `image` as a baseline JPEG with optimized Huffman tables.
///
/// Grayscale input stays single-channel; every other color type is
/// flattened to 8-bit RGB. `quality` is passed through unchecked.
pub fn encode(image: &DynamicImage, quality: u8, path: &Path) -> Result<Vec<u8>> {
    let (width, height) = image.dimensions();
    let (Ok(w), Ok(h)) = (u16::try_from(width), u16::try_from(height)) else {
        return Err(Error::DimensionsTooLarge {
            path: path.to_path_buf(),
            width,
            height,
        });
    };

    let mut buffer = Vec::new();
    let mut encoder = Encoder::new(&mut buffer, quality);
    encoder.set_optimized_huffman_tables(true);

    let res = match image {
        DynamicImage::ImageLuma8(gray) => encoder.encode(gray.as_raw(), w, h, ColorType::Luma),
        _ => {
            let rgb = image.to_rgb8();
            encoder.encode(rgb.as_raw(), w, h, ColorType::Rgb)
        }
    };
    res.map_err(|e| Error::encode(path, e))?;

    Ok(buffer)
}
