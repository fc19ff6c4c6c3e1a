// Error types module

use std::path::PathBuf;

use thiserror::Error;

use crate::variants::ImageError;

/// Centralized error type for a generator run
///
/// Two observable kinds: the source file is missing, or some processing
/// step failed. Both terminate the run with a non-zero exit.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The source image does not exist at the expected path
    #[error("source image not found at {}", .path.display())]
    MissingSource { path: PathBuf },

    /// Decode, resize, or encode failure in the image pipeline
    #[error("{0}")]
    Image(#[from] ImageError),

    /// Filesystem failure while reading the source or writing a variant
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_display() {
        let err = GeneratorError::MissingSource {
            path: PathBuf::from("public/profile.png"),
        };
        assert_eq!(
            err.to_string(),
            "source image not found at public/profile.png"
        );
    }

    #[test]
    fn test_image_error_passes_message_through() {
        let err = GeneratorError::from(ImageError::decode_failed("bad header"));
        assert_eq!(err.to_string(), "Failed to decode image: bad header");
    }

    #[test]
    fn test_io_error_display() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = GeneratorError::from(io);
        assert!(err.to_string().starts_with("I/O error:"));
    }
}
