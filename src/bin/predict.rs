//! Classify a single image from the command line

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use cat_dog_classifier::{class_name, load_image, load_predictor, setup_logging, Config};

#[derive(Parser)]
#[command(name = "predict")]
#[command(about = "Classify a single image as cat or dog")]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    config: String,

    /// Path to the trained model artifact (overrides config)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Image to classify
    image: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = Config::load_or_default(&args.config);
    setup_logging(&config.logging.level)?;

    if let Some(model) = args.model {
        config.model.model_path = model;
    }

    let predictor = load_predictor(&config.model)?;
    let input = load_image(&args.image, config.model.img_width, config.model.img_height)?;

    let values = predictor.predict(&input)?;
    let prediction = predictor.output_head().interpret(&values);

    println!(
        "{}: {} ({:.1}% confidence)",
        args.image.display(),
        class_name(prediction.label),
        prediction.score * 100.0
    );

    Ok(())
}
