//! Evaluation report and per-sample prediction table

use std::path::Path;

use crate::data::test_set::class_name;
use crate::error::Result;
use crate::evaluation::metrics::ConfusionCounts;

/// One evaluated sample, in processing order
#[derive(Debug, Clone)]
pub struct SampleRecord {
    /// Image path as evaluated
    pub image: String,
    /// Ground-truth class name
    pub true_class: String,
    /// Predicted class name
    pub predicted: String,
    /// Probability of the predicted class
    pub score: f32,
    /// Whether the prediction matched the ground truth
    pub correct: bool,
}

impl SampleRecord {
    pub fn new(image: String, true_label: usize, predicted_label: usize, score: f32) -> Self {
        Self {
            image,
            true_class: class_name(true_label).to_string(),
            predicted: class_name(predicted_label).to_string(),
            score,
            correct: true_label == predicted_label,
        }
    }
}

/// Final result of one evaluation run, immutable after construction
#[derive(Debug, Clone)]
pub struct EvaluationReport {
    pub total: usize,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub tp: usize,
    pub fp: usize,
    pub tn: usize,
    pub fn_: usize,
    /// Per-sample records in processing order
    pub samples: Vec<SampleRecord>,
}

impl EvaluationReport {
    pub fn new(counts: &ConfusionCounts, samples: Vec<SampleRecord>) -> Self {
        Self {
            total: counts.total(),
            accuracy: counts.accuracy(),
            precision: counts.precision(),
            recall: counts.recall(),
            f1: counts.f1(),
            tp: counts.tp,
            fp: counts.fp,
            tn: counts.tn,
            fn_: counts.fn_,
            samples,
        }
    }

    /// Write the per-sample prediction table, creating parent directories
    pub fn write_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["image", "true", "predicted", "score", "correct"])?;

        for sample in &self.samples {
            writer.write_record(&[
                sample.image.clone(),
                sample.true_class.clone(),
                sample.predicted.clone(),
                sample.score.to_string(),
                sample.correct.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Human-readable summary block for the console
    pub fn summary(&self) -> String {
        let mut s = String::new();
        s.push_str("Evaluation results:\n");
        s.push_str(&format!("  Total images: {}\n", self.total));
        s.push_str(&format!("  Accuracy: {:.4}\n", self.accuracy));
        s.push_str(&format!("  Precision (dogs): {:.4}\n", self.precision));
        s.push_str(&format!("  Recall (dogs): {:.4}\n", self.recall));
        s.push_str(&format!("  F1 (dogs): {:.4}\n", self.f1));
        s.push_str("  Confusion matrix:\n");
        s.push_str(&format!("    TP={}  FP={}\n", self.tp, self.fp));
        s.push_str(&format!("    FN={}  TN={}\n", self.fn_, self.tn));
        s
    }
}
