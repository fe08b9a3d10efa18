//! Virality and engagement prediction for social-media posts.
//!
//! A static dataset feeds two random-forest models behind a small
//! dashboard: a classifier for the probability that a post goes viral
//! and a regressor for its normalized engagement.

pub mod dataset;
pub mod encoding;
pub mod error;
pub mod features;
pub mod forest;
pub mod models;
pub mod prediction;
pub mod presentation;
#[cfg(feature = "server")]
pub mod server;

pub use error::Error;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Classifier output: probability of the positive (viral) class.
pub type Probability = f64;
/// Regressor output: predicted normalized engagement.
pub type Engagement = f64;
/// Encoded feature value fed to the trees.
pub type Feature = f64;

// ============================================================================
// DEFAULT LOCATIONS
// ============================================================================
/// Dataset read at startup.
pub const DATASET_PATH: &str = "data/final_instagram_model_data.csv";
/// Directory holding the serialized model artifacts.
pub const MODELS_DIR: &str = "models";
/// Default HTTP bind address when BIND_ADDR is unset.
pub const BIND_ADDR: &str = "127.0.0.1:8080";

// ============================================================================
// RANDOM FOREST PARAMETERS
// ============================================================================
/// Trees per forest, both for the classifier and the regressor.
pub const FOREST_TREES: usize = 150;
/// Master seed. Per-tree seeds are drawn from an RNG seeded with this.
pub const FOREST_SEED: u64 = 42;
/// Nodes with fewer samples are not split.
pub const MIN_SAMPLES_SPLIT: usize = 2;
/// Each child of a split keeps at least this many samples.
pub const MIN_SAMPLES_LEAF: usize = 1;
/// Share of rows held out by the trainer for evaluation.
pub const HOLDOUT_RATIO: f64 = 0.2;

// ============================================================================
// VIRALITY TIERS
// Lower bounds are inclusive: 0.7 is high, 0.4 is moderate.
// ============================================================================
/// Probability at or above which a post has high virality potential.
pub const TIER_HIGH: Probability = 0.7;
/// Probability at or above which a post has moderate virality.
pub const TIER_MODERATE: Probability = 0.4;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}

/// Register Ctrl+C handler for immediate termination.
#[cfg(feature = "server")]
pub fn kys() {
    tokio::spawn(async move {
        tokio::signal::ctrl_c().await.expect("listen for ctrl+c");
        println!();
        log::warn!("interrupt received, exiting immediately");
        std::process::exit(0);
    });
}
