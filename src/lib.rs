//! # Cat/Dog Classifier
//!
//! A small pipeline for binary image classification (cats vs. dogs):
//! dataset acquisition via the external Kaggle CLI, single-image inference
//! from the command line, and evaluation of a trained model against a
//! labeled test directory.
//!
//! ## Modules
//!
//! - `data`: dataset download/verification, image loading, test-set enumeration
//! - `model`: raw output interpretation and the inference backend seam
//! - `evaluation`: confusion-count metrics, reports, and the evaluation pass
//! - `utils`: configuration and logging
//!
//! ## Example
//!
//! ```no_run
//! use cat_dog_classifier::{load_predictor, Config, Evaluator};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load_or_default("config/default.toml");
//!
//!     let predictor = load_predictor(&config.model)?;
//!     let evaluator = Evaluator::new(config.model.img_width, config.model.img_height);
//!     let report = evaluator.run(&config.evaluation.test_dir, predictor.as_ref())?;
//!
//!     println!("{}", report.summary());
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod error;
pub mod evaluation;
pub mod model;
pub mod utils;

// Re-export main types for convenience
pub use data::{class_name, load_image, ImageInput, CLASS_NAMES};
pub use error::{Error, Result};
pub use evaluation::{ConfusionCounts, EvaluationReport, Evaluator, SampleRecord};
pub use model::{load_predictor, OutputHead, Prediction, Predictor};
pub use utils::{setup_logging, Config};
