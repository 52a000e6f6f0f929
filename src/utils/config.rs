//! Configuration management
//!
//! This module handles loading and managing configuration.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Dataset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Root directory for downloaded data
    pub data_dir: PathBuf,
    /// Kaggle dataset identifier
    pub kaggle_dataset: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            kaggle_dataset: "tongpython/cat-and-dog".to_string(),
        }
    }
}

/// Model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Input image height expected by the model
    pub img_height: u32,
    /// Input image width expected by the model
    pub img_width: u32,
    /// Path to the trained model artifact (TorchScript)
    pub model_path: PathBuf,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            img_height: 150,
            img_width: 150,
            model_path: PathBuf::from("models/cat_dog_model.pt"),
        }
    }
}

/// Evaluation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationConfig {
    /// Labeled test directory with cats/ and dogs/ subdirectories
    pub test_dir: PathBuf,
    /// Optional per-sample prediction CSV output
    pub output_csv: Option<PathBuf>,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            test_dir: PathBuf::from("data/test_set/test_set"),
            output_csv: Some(PathBuf::from("models/evaluation_predictions.csv")),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub data: DataConfig,
    pub model: ModelConfig,
    pub evaluation: EvaluationConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from file or use default
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Save configuration to file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data.kaggle_dataset, "tongpython/cat-and-dog");
        assert_eq!(config.model.img_height, 150);
        assert_eq!(config.model.img_width, 150);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.data.kaggle_dataset, config.data.kaggle_dataset);
        assert_eq!(parsed.model.model_path, config.model.model_path);
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = Config::load_or_default("does/not/exist.toml");
        assert_eq!(config.model.img_width, 150);
    }
}
