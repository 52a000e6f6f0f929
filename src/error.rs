//! Error types for the cat/dog classifier

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// Model artifact does not exist on disk
    #[error("model not found: {0}")]
    ModelNotFound(PathBuf),

    /// Inference backend is not compiled into this build
    #[error("inference backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Model artifact exists but could not be loaded
    #[error("model failed to load: {0}")]
    ModelLoad(String),

    /// Forward pass failed
    #[error("inference failed: {0}")]
    Inference(String),

    /// Image decoding or processing error
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV output error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Dataset download error
    #[error("dataset download failed: {0}")]
    Download(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::ModelNotFound(PathBuf::from("models/cat_dog_model.pt"));
        assert_eq!(err.to_string(), "model not found: models/cat_dog_model.pt");

        let err = Error::BackendUnavailable("no torch".to_string());
        assert!(err.to_string().starts_with("inference backend unavailable"));
    }

    #[test]
    fn test_io_error_conversion() {
        fn read() -> Result<String> {
            Ok(std::fs::read_to_string("does/not/exist")?)
        }
        assert!(matches!(read().unwrap_err(), Error::Io(_)));
    }
}
