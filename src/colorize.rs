use crate::error::{AppError, Result};
use crate::utils::{luma_601, multiply_channel};

use image::{DynamicImage, ImageBuffer, Rgb, RgbImage};
use palette::Srgb;

/// Tints `img` with `color`: the image is reduced to luminance and then
/// multiply-blended with a flat layer of `color`. Black stays black and white
/// takes on the full color.
pub fn colorize(img: &DynamicImage, color: Srgb<u8>) -> RgbImage {
    let gray = grayscale(img);
    let (width, height) = gray.dimensions();
    let layer = color_layer(width, height, color);

    // Both buffers come from the same dimensions.
    multiply_unchecked(&gray, &layer)
}

/// Single-channel luminance expanded back to three identical channels.
/// Alpha is dropped before conversion.
pub fn grayscale(img: &DynamicImage) -> RgbImage {
    let mut gray = img.to_rgb8();
    for pixel in gray.pixels_mut() {
        let l = luma_601(pixel.0);
        *pixel = Rgb([l, l, l]);
    }
    gray
}

pub fn color_layer(width: u32, height: u32, color: Srgb<u8>) -> RgbImage {
    ImageBuffer::from_pixel(width, height, Rgb([color.red, color.green, color.blue]))
}

/// Per-channel multiply blend of two images of equal size.
pub fn multiply(base: &RgbImage, layer: &RgbImage) -> Result<RgbImage> {
    if base.dimensions() != layer.dimensions() {
        return Err(AppError::DimensionMismatch {
            left: base.dimensions(),
            right: layer.dimensions(),
        });
    }
    Ok(multiply_unchecked(base, layer))
}

fn multiply_unchecked(base: &RgbImage, layer: &RgbImage) -> RgbImage {
    let (width, height) = base.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| {
        let a = base.get_pixel(x, y);
        let b = layer.get_pixel(x, y);
        Rgb([
            multiply_channel(a[0], b[0]),
            multiply_channel(a[1], b[1]),
            multiply_channel(a[2], b[2]),
        ])
    })
}
