//! Evaluation pass over the labeled test directory
//!
//! Ties together image loading, inference, output interpretation, and
//! metric accumulation. Per-sample failures are logged and skipped; only
//! a missing model or backend aborts a run.

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tracing::{info, warn};

use crate::data::image_loader::load_image;
use crate::data::test_set::{labeled_samples, CLASS_NAMES};
use crate::error::Result;
use crate::evaluation::metrics::ConfusionCounts;
use crate::evaluation::report::{EvaluationReport, SampleRecord};
use crate::model::predictor::Predictor;

/// Runs a full sequential pass over the test set with a loaded predictor
pub struct Evaluator {
    img_width: u32,
    img_height: u32,
}

impl Evaluator {
    pub fn new(img_width: u32, img_height: u32) -> Self {
        Self {
            img_width,
            img_height,
        }
    }

    /// Evaluate `predictor` against `test_dir`, one image per forward pass.
    ///
    /// Samples that fail to load or infer are skipped with a warning and
    /// excluded from the report's total.
    pub fn run(&self, test_dir: &Path, predictor: &dyn Predictor) -> Result<EvaluationReport> {
        let samples = labeled_samples(test_dir);
        let head = predictor.output_head();

        let mut counts = ConfusionCounts::new();
        let mut records = Vec::with_capacity(samples.len());

        let pb = ProgressBar::new(samples.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})")
                .unwrap()
                .progress_chars("#>-"),
        );

        for (path, true_label) in samples {
            let input = match load_image(&path, self.img_width, self.img_height) {
                Ok(input) => input,
                Err(e) => {
                    warn!("could not load image {}: {}", path.display(), e);
                    pb.inc(1);
                    continue;
                }
            };

            let values = match predictor.predict(&input) {
                Ok(values) => values,
                Err(e) => {
                    warn!("inference failed for {}: {}", path.display(), e);
                    pb.inc(1);
                    continue;
                }
            };

            let prediction = head.interpret(&values);

            // A softmax over more than two classes can point outside the
            // cat/dog label set; skip such samples like unreadable ones so
            // the report total always matches the record count
            if prediction.label >= CLASS_NAMES.len() {
                warn!(
                    "prediction for {} has class index {} outside the label set",
                    path.display(),
                    prediction.label
                );
                pb.inc(1);
                continue;
            }

            counts.record(true_label, prediction.label);
            records.push(SampleRecord::new(
                path.display().to_string(),
                true_label,
                prediction.label,
                prediction.score,
            ));
            pb.inc(1);
        }

        pb.finish_and_clear();
        info!("evaluated {} samples", records.len());

        Ok(EvaluationReport::new(&counts, records))
    }

    /// Evaluate and also write the per-sample table to `output_csv`
    pub fn run_with_output(
        &self,
        test_dir: &Path,
        predictor: &dyn Predictor,
        output_csv: &Path,
    ) -> Result<EvaluationReport> {
        let report = self.run(test_dir, predictor)?;
        report.write_csv(output_csv)?;
        info!("predictions written to {}", output_csv.display());
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::image_loader::ImageInput;
    use crate::model::output::OutputHead;
    use tempfile::tempdir;

    struct ConstantPredictor {
        value: f32,
    }

    impl Predictor for ConstantPredictor {
        fn output_head(&self) -> OutputHead {
            OutputHead::SingleUnit
        }

        fn predict(&self, _input: &ImageInput) -> Result<Vec<f32>> {
            Ok(vec![self.value])
        }
    }

    #[test]
    fn test_run_on_empty_directory() {
        let dir = tempdir().unwrap();
        let evaluator = Evaluator::new(8, 8);
        let predictor = ConstantPredictor { value: 0.9 };

        let report = evaluator.run(dir.path(), &predictor).unwrap();

        assert_eq!(report.total, 0);
        assert_eq!(report.accuracy, 0.0);
        assert!(report.samples.is_empty());
    }

    struct ThreeClassPredictor;

    impl Predictor for ThreeClassPredictor {
        fn output_head(&self) -> OutputHead {
            OutputHead::MultiClass(3)
        }

        fn predict(&self, _input: &ImageInput) -> Result<Vec<f32>> {
            Ok(vec![0.1, 0.1, 0.8])
        }
    }

    #[test]
    fn test_out_of_range_label_is_skipped() {
        let dir = tempdir().unwrap();
        let cats = dir.path().join("cats");
        std::fs::create_dir(&cats).unwrap();
        image::RgbImage::from_pixel(8, 8, image::Rgb([10, 10, 10]))
            .save(cats.join("cat1.png"))
            .unwrap();

        let evaluator = Evaluator::new(8, 8);
        let report = evaluator.run(dir.path(), &ThreeClassPredictor).unwrap();

        // Argmax landed on class index 2, outside the cat/dog label set
        assert_eq!(report.total, 0);
        assert!(report.samples.is_empty());
        assert_eq!(report.total, report.samples.len());
    }

    #[test]
    fn test_run_skips_unreadable_images() {
        let dir = tempdir().unwrap();
        let cats = dir.path().join("cats");
        std::fs::create_dir(&cats).unwrap();
        std::fs::write(cats.join("broken.jpg"), b"definitely not a jpeg").unwrap();

        let evaluator = Evaluator::new(8, 8);
        let predictor = ConstantPredictor { value: 0.2 };

        let report = evaluator.run(dir.path(), &predictor).unwrap();
        assert_eq!(report.total, 0);
    }
}
