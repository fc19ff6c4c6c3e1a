//! Variant processing implementation
//!
//! Handles the transformation steps: decode → cover resize → center crop.
//! Encoding lives in the encoder module.

use std::io::Cursor;
use std::num::NonZeroU32;

use fast_image_resize::{FilterType, Image, PixelType, ResizeAlg, Resizer};
use image::io::Reader as ImageReader;
use image::{DynamicImage, RgbaImage};

use super::error::ImageError;

/// Decode image data into a DynamicImage
pub fn decode_image(data: &[u8]) -> Result<DynamicImage, ImageError> {
    ImageReader::new(Cursor::new(data))
        .with_guessed_format()
        .map_err(|e| ImageError::decode_failed(e.to_string()))?
        .decode()
        .map_err(|e| ImageError::decode_failed(e.to_string()))
}

/// Detect the source container format, for reporting only
pub fn detect_format(data: &[u8]) -> &'static str {
    match image::guess_format(data) {
        Ok(fmt) => match fmt {
            image::ImageFormat::Png => "png",
            image::ImageFormat::Jpeg => "jpeg",
            image::ImageFormat::WebP => "webp",
            image::ImageFormat::Gif => "gif",
            _ => "other",
        },
        Err(_) => "unknown",
    }
}

/// Scaled dimensions for a cover fit
///
/// The scale factor is the larger of the two axis ratios, so the scaled
/// image fully covers the target window. Rounding never undershoots the
/// target.
pub fn cover_dimensions(src_w: u32, src_h: u32, dst_w: u32, dst_h: u32) -> (u32, u32) {
    let scale = f64::max(dst_w as f64 / src_w as f64, dst_h as f64 / src_h as f64);
    let scaled_w = ((src_w as f64 * scale).round() as u32).max(dst_w);
    let scaled_h = ((src_h as f64 * scale).round() as u32).max(dst_h);
    (scaled_w, scaled_h)
}

/// Resize with a cover fit anchored at the center
///
/// Scales the full image to cover `dst_w × dst_h`, then crops the
/// centered window to the exact target dimensions. A source smaller
/// than the target is upscaled.
pub fn cover_resize(
    img: &DynamicImage,
    dst_w: u32,
    dst_h: u32,
) -> Result<RgbaImage, ImageError> {
    let (scaled_w, scaled_h) = cover_dimensions(img.width(), img.height(), dst_w, dst_h);

    let scaled = if (scaled_w, scaled_h) == (img.width(), img.height()) {
        img.to_rgba8()
    } else {
        resize_exact(img, scaled_w, scaled_h)?
    };

    let left = (scaled_w - dst_w) / 2;
    let top = (scaled_h - dst_h) / 2;
    Ok(image::imageops::crop_imm(&scaled, left, top, dst_w, dst_h).to_image())
}

/// Resize to exact dimensions using fast-image-resize with Lanczos3 filter
fn resize_exact(
    img: &DynamicImage,
    target_w: u32,
    target_h: u32,
) -> Result<RgbaImage, ImageError> {
    let src_width = NonZeroU32::new(img.width())
        .ok_or_else(|| ImageError::resize_failed("Source width is 0"))?;
    let src_height = NonZeroU32::new(img.height())
        .ok_or_else(|| ImageError::resize_failed("Source height is 0"))?;
    let dst_width = NonZeroU32::new(target_w)
        .ok_or_else(|| ImageError::resize_failed("Target width is 0"))?;
    let dst_height = NonZeroU32::new(target_h)
        .ok_or_else(|| ImageError::resize_failed("Target height is 0"))?;

    let src_image = Image::from_vec_u8(
        src_width,
        src_height,
        img.to_rgba8().into_raw(),
        PixelType::U8x4,
    )
    .map_err(|e| ImageError::resize_failed(format!("Failed to create source image: {:?}", e)))?;

    let mut dst_image = Image::new(dst_width, dst_height, PixelType::U8x4);

    let mut resizer = Resizer::new(ResizeAlg::Convolution(FilterType::Lanczos3));

    resizer
        .resize(&src_image.view(), &mut dst_image.view_mut())
        .map_err(|e| ImageError::resize_failed(format!("Resize operation failed: {:?}", e)))?;

    RgbaImage::from_raw(target_w, target_h, dst_image.into_vec())
        .ok_or_else(|| ImageError::resize_failed("Failed to create output image buffer"))
}
