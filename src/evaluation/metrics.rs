//! Binary classification metrics
//!
//! Confusion counts with "dogs" (label 1) as the positive class. All
//! derived metrics fall back to 0.0 on a zero denominator instead of
//! failing, so an empty evaluation run reports zeros.

/// Running tally of binary classification outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfusionCounts {
    /// True positives
    pub tp: usize,
    /// False positives
    pub fp: usize,
    /// True negatives
    pub tn: usize,
    /// False negatives
    pub fn_: usize,
}

impl ConfusionCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one (true, predicted) label pair
    pub fn record(&mut self, true_label: usize, predicted_label: usize) {
        match (true_label, predicted_label) {
            (1, 1) => self.tp += 1,
            (0, 1) => self.fp += 1,
            (0, 0) => self.tn += 1,
            (1, 0) => self.fn_ += 1,
            _ => {}
        }
    }

    /// Total samples recorded
    pub fn total(&self) -> usize {
        self.tp + self.fp + self.tn + self.fn_
    }

    /// (TP + TN) / Total, 0.0 when no samples were recorded
    pub fn accuracy(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        (self.tp + self.tn) as f64 / total as f64
    }

    /// TP / (TP + FP), 0.0 when nothing was predicted positive
    pub fn precision(&self) -> f64 {
        let denom = self.tp + self.fp;
        if denom == 0 {
            return 0.0;
        }
        self.tp as f64 / denom as f64
    }

    /// TP / (TP + FN), 0.0 when no actual positives were seen
    pub fn recall(&self) -> f64 {
        let denom = self.tp + self.fn_;
        if denom == 0 {
            return 0.0;
        }
        self.tp as f64 / denom as f64
    }

    /// Harmonic mean of precision and recall, 0.0 when both are zero
    pub fn f1(&self) -> f64 {
        let precision = self.precision();
        let recall = self.recall();
        let denom = precision + recall;
        if denom == 0.0 {
            return 0.0;
        }
        2.0 * precision * recall / denom
    }
}
