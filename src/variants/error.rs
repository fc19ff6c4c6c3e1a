//! Image pipeline error types

use std::fmt;

/// Errors that can occur while producing a variant
#[derive(Debug, Clone)]
pub enum ImageError {
    /// Failed to decode the source image data
    DecodeFailed { message: String },
    /// Resize operation failed
    ResizeFailed { message: String },
    /// Encoding to the output format failed
    EncodeFailed { format: String, message: String },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::DecodeFailed { message } => {
                write!(f, "Failed to decode image: {}", message)
            }
            ImageError::ResizeFailed { message } => {
                write!(f, "Resize failed: {}", message)
            }
            ImageError::EncodeFailed { format, message } => {
                write!(f, "Failed to encode to {}: {}", format, message)
            }
        }
    }
}

impl std::error::Error for ImageError {}

impl ImageError {
    /// Helper constructors for common error patterns
    pub fn decode_failed(message: impl Into<String>) -> Self {
        ImageError::DecodeFailed {
            message: message.into(),
        }
    }

    pub fn resize_failed(message: impl Into<String>) -> Self {
        ImageError::ResizeFailed {
            message: message.into(),
        }
    }

    pub fn encode_failed(format: impl Into<String>, message: impl Into<String>) -> Self {
        ImageError::EncodeFailed {
            format: format.into(),
            message: message.into(),
        }
    }
}
