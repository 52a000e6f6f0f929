//! Raw model output interpretation
//!
//! A trained artifact can end in a single sigmoid unit or a softmax over
//! two or more classes. The head is resolved once from the declared output
//! shape and then applied to every sample.

/// Decision threshold for sigmoid outputs. A value of exactly 0.5
/// classifies as dog; the `>=` comparison is a compatibility guarantee.
const SIGMOID_THRESHOLD: f32 = 0.5;

/// A single classification outcome.
///
/// `score` is the probability of the *predicted* class, not necessarily
/// of the positive class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Predicted class index (0 = cats, 1 = dogs)
    pub label: usize,
    /// Probability of the predicted class
    pub score: f32,
}

/// Output-layer shape of a loaded model
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputHead {
    /// Single sigmoid unit emitting P(dog)
    SingleUnit,
    /// Softmax over `n >= 2` classes
    MultiClass(usize),
    /// Shape not recognized; threshold the first flattened value
    Unrecognized,
}

impl OutputHead {
    /// Resolve the head from a declared output shape, e.g. `[1, 1]` or `[1, 2]`
    pub fn from_shape(shape: &[i64]) -> Self {
        match shape {
            [_, 1] => OutputHead::SingleUnit,
            [_, n] if *n >= 2 => OutputHead::MultiClass(*n as usize),
            _ => OutputHead::Unrecognized,
        }
    }

    /// Interpret raw output values as a (label, score) pair.
    ///
    /// Pure function of its input; an empty slice degenerates to
    /// label 0 with score 0.0.
    pub fn interpret(&self, values: &[f32]) -> Prediction {
        match self {
            OutputHead::SingleUnit | OutputHead::Unrecognized => {
                let prob = values.first().copied().unwrap_or(0.0);
                let label = usize::from(prob >= SIGMOID_THRESHOLD);
                Prediction { label, score: prob }
            }
            OutputHead::MultiClass(_) => {
                // First maximum wins on exact ties, matching argmax semantics
                let mut label = 0;
                let mut score = values.first().copied().unwrap_or(0.0);
                for (i, &v) in values.iter().enumerate().skip(1) {
                    if v > score {
                        label = i;
                        score = v;
                    }
                }
                Prediction { label, score }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_shape() {
        assert_eq!(OutputHead::from_shape(&[1, 1]), OutputHead::SingleUnit);
        assert_eq!(OutputHead::from_shape(&[1, 2]), OutputHead::MultiClass(2));
        assert_eq!(OutputHead::from_shape(&[1, 5]), OutputHead::MultiClass(5));
        assert_eq!(OutputHead::from_shape(&[4]), OutputHead::Unrecognized);
        assert_eq!(OutputHead::from_shape(&[1, 1, 1]), OutputHead::Unrecognized);
        assert_eq!(OutputHead::from_shape(&[]), OutputHead::Unrecognized);
    }

    #[test]
    fn test_sigmoid_above_threshold() {
        let p = OutputHead::SingleUnit.interpret(&[0.7]);
        assert_eq!(p.label, 1);
        assert!((p.score - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_sigmoid_below_threshold() {
        let p = OutputHead::SingleUnit.interpret(&[0.3]);
        assert_eq!(p.label, 0);
        assert!((p.score - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_sigmoid_tie_favors_dog() {
        let p = OutputHead::SingleUnit.interpret(&[0.5]);
        assert_eq!(p.label, 1);
        assert!((p.score - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_softmax_argmax() {
        let p = OutputHead::MultiClass(2).interpret(&[0.2, 0.8]);
        assert_eq!(p.label, 1);
        assert!((p.score - 0.8).abs() < 1e-6);

        let p = OutputHead::MultiClass(3).interpret(&[0.9, 0.05, 0.05]);
        assert_eq!(p.label, 0);
        assert!((p.score - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_softmax_tie_takes_first_max() {
        let p = OutputHead::MultiClass(2).interpret(&[0.5, 0.5]);
        assert_eq!(p.label, 0);
    }

    #[test]
    fn test_unrecognized_falls_back_to_threshold() {
        let p = OutputHead::Unrecognized.interpret(&[0.6, 0.1]);
        assert_eq!(p.label, 1);
        assert!((p.score - 0.6).abs() < 1e-6);
    }

    #[test]
    fn test_empty_output_degenerates() {
        let p = OutputHead::SingleUnit.interpret(&[]);
        assert_eq!(p.label, 0);
        assert_eq!(p.score, 0.0);

        let p = OutputHead::MultiClass(2).interpret(&[]);
        assert_eq!(p.label, 0);
        assert_eq!(p.score, 0.0);
    }
}
