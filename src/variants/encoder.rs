//! Lossy WebP encoding
//!
//! The image crate only writes lossless WebP, so quality-bearing output
//! goes through the webp crate's libwebp bindings.

use image::RgbaImage;

use super::error::ImageError;
use crate::config::WEBP_QUALITY;

/// Quality settings for WebP encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderQuality {
    /// Quality value (1-100, where 100 is best quality)
    pub quality: u8,
}

impl Default for EncoderQuality {
    fn default() -> Self {
        Self {
            quality: WEBP_QUALITY,
        }
    }
}

impl EncoderQuality {
    /// Create quality settings with the value clamped to 1-100
    pub fn with_quality(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }
}

/// WebP encoder over raw RGBA pixels
pub struct WebPEncoder;

impl WebPEncoder {
    /// Encode an RGBA image as lossy WebP at the given quality
    pub fn encode(img: &RgbaImage, quality: EncoderQuality) -> Result<Vec<u8>, ImageError> {
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(ImageError::encode_failed("webp", "empty image"));
        }

        let encoder = webp::Encoder::from_rgba(img.as_raw(), width, height);
        Ok(encoder.encode(quality.quality as f32).to_vec())
    }
}
