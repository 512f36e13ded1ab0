use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by image file operations.
///
/// Drawing itself never fails; only the file boundary does.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode or encode image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unsupported image format: {}", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("Screen capture produced an empty image")]
    EmptyCapture,
}

impl SketchError {
    pub(crate) fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        let path = path.into();
        // The image crate wraps plain I/O failures; surface those as Io.
        match source {
            image::ImageError::IoError(source) => Self::Io { path, source },
            source => Self::Image { path, source },
        }
    }
}

/// Result type for file operations
pub type SketchResult<T> = Result<T, SketchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_unwrapped_from_image_errors() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = SketchError::image("missing.png", image::ImageError::IoError(io));
        assert!(matches!(err, SketchError::Io { .. }));
        assert!(err.to_string().contains("missing.png"));
    }
}
