//! Trainer Binary
//!
//! Fits both forests from the dataset, reports holdout scores, and writes
//! the artifacts the dashboard serves with `--strategy load`.

use clap::Parser;
use std::path::PathBuf;
use viralcast::dataset::Dataset;
use viralcast::encoding::HandleUnknown;
use viralcast::models::Metrics;
use viralcast::models::Provider;
use viralcast::models::Trainer;

#[derive(Parser)]
#[command(author, version, about = "Fit and save the virality and engagement models", long_about = None)]
struct Args {
    /// CSV dataset to fit on
    #[arg(long, default_value = viralcast::DATASET_PATH)]
    data: PathBuf,
    /// Output directory for the artifacts
    #[arg(long, default_value = viralcast::MODELS_DIR)]
    models: PathBuf,
    /// Handling of unseen categories baked into the artifacts
    #[arg(long, value_enum, default_value_t = HandleUnknown::Ignore)]
    unknown: HandleUnknown,
    /// Skip the holdout evaluation
    #[arg(long)]
    skip_holdout: bool,
}

fn main() -> anyhow::Result<()> {
    viralcast::log();
    let args = Args::parse();
    let dataset = Dataset::load(&args.data)?;
    let trainer = Trainer::new(args.unknown);
    if !args.skip_holdout {
        let (train, test) = dataset.holdout(viralcast::HOLDOUT_RATIO, viralcast::FOREST_SEED);
        let models = trainer.provide(&train)?;
        log::info!("holdout: {}", Metrics::evaluate(&models, &test)?);
    }
    let models = trainer.provide(&dataset)?;
    for (name, importance) in models.classifier.pipeline().ranking().into_iter().take(5) {
        log::info!("virality   feature {:<32} {:.4}", name, importance);
    }
    for (name, importance) in models.regressor.pipeline().ranking().into_iter().take(5) {
        log::info!("engagement feature {:<32} {:.4}", name, importance);
    }
    models.save(&args.models)?;
    log::info!("models written to {}", args.models.display());
    Ok(())
}
