//! Labeled test-set enumeration
//!
//! The test directory encodes ground truth in its layout: one
//! subdirectory per class, `cats` -> label 0 and `dogs` -> label 1.

use std::path::{Path, PathBuf};
use tracing::warn;

/// Class names in label order; index 1 ("dogs") is the positive class
pub const CLASS_NAMES: [&str; 2] = ["cats", "dogs"];

/// Name of the class with the given label index
pub fn class_name(label: usize) -> &'static str {
    CLASS_NAMES.get(label).copied().unwrap_or("unknown")
}

/// Enumerate labeled image paths under `test_dir`.
///
/// Files within each class are returned in sorted order so repeated runs
/// evaluate samples in the same sequence. A missing class directory is
/// skipped with a warning rather than failing the run.
pub fn labeled_samples(test_dir: &Path) -> Vec<(PathBuf, usize)> {
    let mut samples = Vec::new();

    for (label, class) in CLASS_NAMES.iter().enumerate() {
        let class_dir = test_dir.join(class);
        if !class_dir.is_dir() {
            warn!("test class folder not found: {}", class_dir.display());
            continue;
        }

        let entries = match std::fs::read_dir(&class_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("could not read {}: {}", class_dir.display(), e);
                continue;
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.path())
            .filter(|p| p.is_file())
            .collect();
        files.sort();

        samples.extend(files.into_iter().map(|p| (p, label)));
    }

    samples
}
