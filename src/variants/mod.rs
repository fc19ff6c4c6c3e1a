//! Image variant pipeline
//!
//! Provides the transformation half of the generator:
//! - Decode with guessed format
//! - Cover-fit resize anchored at the center (scale so the image fully
//!   covers the target square, then crop symmetrically to the exact
//!   dimensions; aspect ratio is preserved by crop, never by stretch)
//! - Lossy WebP encoding

pub mod encoder;
pub mod error;
pub mod processor;

// Re-export commonly used types
pub use encoder::{EncoderQuality, WebPEncoder};
pub use error::ImageError;
pub use processor::{cover_dimensions, cover_resize, decode_image, detect_format};
