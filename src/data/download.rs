//! Dataset acquisition via the Kaggle CLI
//!
//! Downloading is delegated entirely to the external `kaggle` binary; this
//! module invokes it and verifies the resulting directory layout. Kaggle
//! credentials are the caller's responsibility (`KAGGLE_CONFIG_DIR` or
//! `~/.kaggle/kaggle.json`) and are never read here.

use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::info;

use crate::error::{Error, Result};
use crate::utils::config::DataConfig;

/// File counts found by [`verify_layout`]
#[derive(Debug, Clone)]
pub struct LayoutSummary {
    pub training_dir: PathBuf,
    pub test_dir: PathBuf,
    pub train_cats: usize,
    pub train_dogs: usize,
}

/// Download and extract the dataset with the external Kaggle CLI
pub fn download_dataset(config: &DataConfig) -> Result<()> {
    std::fs::create_dir_all(&config.data_dir)?;

    info!("downloading {} from Kaggle", config.kaggle_dataset);

    let output = Command::new("kaggle")
        .args(["datasets", "download", "-d", &config.kaggle_dataset, "-p"])
        .arg(&config.data_dir)
        .arg("--unzip")
        .output()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::Download(
                "kaggle CLI not found; install it with `pip install kaggle`".to_string(),
            ),
            _ => Error::Download(e.to_string()),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Download(format!(
            "kaggle exited with {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    info!("dataset downloaded and extracted");
    Ok(())
}

/// Verify the extracted directory structure and count training files per class
pub fn verify_layout(config: &DataConfig) -> Result<LayoutSummary> {
    let training_dir = config.data_dir.join("training_set").join("training_set");
    let test_dir = config.data_dir.join("test_set").join("test_set");

    if !training_dir.exists() {
        return Err(Error::Download(format!(
            "training data not found at {}",
            training_dir.display()
        )));
    }

    let summary = LayoutSummary {
        train_cats: count_files(&training_dir.join("cats")),
        train_dogs: count_files(&training_dir.join("dogs")),
        training_dir,
        test_dir,
    };

    info!(
        "training data: {} cats, {} dogs",
        summary.train_cats, summary.train_dogs
    );

    Ok(summary)
}

fn count_files(dir: &Path) -> usize {
    std::fs::read_dir(dir)
        .map(|entries| {
            entries
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file())
                .count()
        })
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_count_files() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("a.jpg"), b"x").unwrap();
        std::fs::write(dir.path().join("b.jpg"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("sub")).unwrap();

        assert_eq!(count_files(dir.path()), 2);
        assert_eq!(count_files(&dir.path().join("missing")), 0);
    }

    #[test]
    fn test_verify_layout_missing_training_set() {
        let dir = tempdir().unwrap();
        let config = DataConfig {
            data_dir: dir.path().to_path_buf(),
            kaggle_dataset: "tongpython/cat-and-dog".to_string(),
        };

        assert!(verify_layout(&config).is_err());
    }

    #[test]
    fn test_verify_layout_counts() {
        let dir = tempdir().unwrap();
        let training = dir.path().join("training_set").join("training_set");
        std::fs::create_dir_all(training.join("cats")).unwrap();
        std::fs::create_dir_all(training.join("dogs")).unwrap();
        std::fs::write(training.join("cats").join("c1.jpg"), b"x").unwrap();
        std::fs::write(training.join("dogs").join("d1.jpg"), b"x").unwrap();
        std::fs::write(training.join("dogs").join("d2.jpg"), b"x").unwrap();

        let config = DataConfig {
            data_dir: dir.path().to_path_buf(),
            kaggle_dataset: "tongpython/cat-and-dog".to_string(),
        };

        let summary = verify_layout(&config).unwrap();
        assert_eq!(summary.train_cats, 1);
        assert_eq!(summary.train_dogs, 2);
    }
}
