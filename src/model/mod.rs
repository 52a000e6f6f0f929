//! Model output interpretation and inference backends

pub mod output;
pub mod predictor;
#[cfg(feature = "torch")]
pub mod torch;

pub use output::{OutputHead, Prediction};
pub use predictor::{load_predictor, Predictor};
