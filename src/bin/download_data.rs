//! Download the cat-and-dog dataset
//!
//! Invokes the external Kaggle CLI and verifies the resulting layout.
//! Kaggle credentials must already be in place (KAGGLE_CONFIG_DIR or
//! ~/.kaggle/kaggle.json).

use anyhow::Result;
use clap::Parser;

use cat_dog_classifier::data::{download_dataset, verify_layout};
use cat_dog_classifier::{setup_logging, Config};

#[derive(Parser)]
#[command(name = "download_data")]
#[command(about = "Download the cat-and-dog dataset via the Kaggle CLI")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// Skip the download and only verify the directory layout
    #[arg(long)]
    verify_only: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = Config::load_or_default(&args.config);
    setup_logging(&config.logging.level)?;

    println!("[CONFIG] Dataset: {}", config.data.kaggle_dataset);
    println!("[CONFIG] Data directory: {}", config.data.data_dir.display());
    println!();

    if !args.verify_only {
        if let Err(e) = download_dataset(&config.data) {
            eprintln!("Data preparation failed: {}", e);
            return Err(e.into());
        }
    }

    match verify_layout(&config.data) {
        Ok(summary) => {
            println!("[DATA] Training data: {}", summary.training_dir.display());
            println!("[DATA] Test data: {}", summary.test_dir.display());
            println!(
                "[DATA] Training: {} cats, {} dogs",
                summary.train_cats, summary.train_dogs
            );
            println!();
            println!("Data preparation completed");
            Ok(())
        }
        Err(e) => {
            eprintln!("Data structure not as expected: {}", e);
            Err(e.into())
        }
    }
}
