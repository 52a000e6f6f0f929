//! Metrics, reports, and the evaluation pass

pub mod evaluator;
pub mod metrics;
pub mod report;

pub use evaluator::Evaluator;
pub use metrics::ConfusionCounts;
pub use report::{EvaluationReport, SampleRecord};
