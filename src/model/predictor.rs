//! Inference adapter seam
//!
//! The evaluator and the CLIs talk to a [`Predictor`] rather than to a
//! concrete framework, so evaluation logic can be exercised without a
//! trained artifact.

use crate::data::image_loader::ImageInput;
use crate::error::Result;
use crate::model::output::OutputHead;
use crate::utils::config::ModelConfig;

/// A loaded model ready for batch-of-one inference
pub trait Predictor {
    /// Output head resolved when the model was loaded
    fn output_head(&self) -> OutputHead;

    /// Run a forward pass on one image, returning raw output values
    fn predict(&self, input: &ImageInput) -> Result<Vec<f32>>;
}

impl std::fmt::Debug for dyn Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn Predictor")
    }
}

/// Load the configured inference backend.
///
/// Fails before any evaluation work when the artifact is missing or the
/// backend is not compiled into this build.
#[cfg(feature = "torch")]
pub fn load_predictor(config: &ModelConfig) -> Result<Box<dyn Predictor>> {
    let predictor = crate::model::torch::TorchPredictor::load(config)?;
    Ok(Box::new(predictor))
}

#[cfg(not(feature = "torch"))]
pub fn load_predictor(_config: &ModelConfig) -> Result<Box<dyn Predictor>> {
    Err(crate::error::Error::BackendUnavailable(
        "built without the `torch` feature; rebuild with --features torch".to_string(),
    ))
}

#[cfg(all(test, not(feature = "torch")))]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_backend_unavailable_without_torch() {
        let err = load_predictor(&ModelConfig::default()).unwrap_err();
        assert!(matches!(err, Error::BackendUnavailable(_)));
    }
}
