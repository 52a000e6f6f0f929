//! Evaluate a trained model on the labeled test set
//!
//! Computes accuracy, precision, recall, F1, and the confusion matrix,
//! and optionally writes a per-sample prediction CSV.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use cat_dog_classifier::{load_predictor, setup_logging, Config, Evaluator};

#[derive(Parser)]
#[command(name = "evaluate")]
#[command(about = "Evaluate a trained cat/dog model on the test set")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// Path to the trained model artifact (overrides config)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Test directory with cats/ and dogs/ subdirectories (overrides config)
    #[arg(short, long)]
    test_dir: Option<PathBuf>,

    /// Per-sample prediction CSV output (overrides config)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load_or_default(&args.config);
    setup_logging(&config.logging.level)?;

    if let Some(model) = args.model {
        config.model.model_path = model;
    }
    if let Some(test_dir) = args.test_dir {
        config.evaluation.test_dir = test_dir;
    }
    if let Some(output) = args.output {
        config.evaluation.output_csv = Some(output);
    }

    println!("[CONFIG] Model: {}", config.model.model_path.display());
    println!(
        "[CONFIG] Test directory: {}",
        config.evaluation.test_dir.display()
    );
    println!(
        "[CONFIG] Input size: {}x{}",
        config.model.img_width, config.model.img_height
    );
    println!();

    // Fatal pre-run errors: missing artifact or missing backend
    let predictor = match load_predictor(&config.model) {
        Ok(predictor) => predictor,
        Err(e) => {
            eprintln!("Error during evaluation: {}", e);
            std::process::exit(1);
        }
    };

    let evaluator = Evaluator::new(config.model.img_width, config.model.img_height);

    let report = match &config.evaluation.output_csv {
        Some(csv_path) => {
            evaluator.run_with_output(&config.evaluation.test_dir, predictor.as_ref(), csv_path)?
        }
        None => evaluator.run(&config.evaluation.test_dir, predictor.as_ref())?,
    };

    println!("{}", report.summary());

    if let Some(csv_path) = &config.evaluation.output_csv {
        println!("Predictions written to: {}", csv_path.display());
    }

    Ok(())
}
