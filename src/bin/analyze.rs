//! Analyze Binary
//!
//! One-shot analysis of a single post configuration from the terminal.
//! Flags mirror the dashboard sidebar and share its bounds and defaults.

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use viralcast::dataset::Dataset;
use viralcast::features::Form;
use viralcast::models::Loader;
use viralcast::models::Provider;
use viralcast::models::Trainer;
use viralcast::prediction::Dashboard;
use viralcast::presentation::Kpi;
use viralcast::presentation::Tier;

#[derive(Parser)]
#[command(author, version, about = "Predict virality and engagement for one post", long_about = None)]
struct Args {
    #[arg(long, default_value = viralcast::DATASET_PATH)]
    data: PathBuf,
    /// Load artifacts from this directory instead of training
    #[arg(long)]
    models: Option<PathBuf>,
    #[arg(long)]
    account_type: Option<String>,
    #[arg(long)]
    media_type: Option<String>,
    #[arg(long)]
    content_category: Option<String>,
    #[arg(long)]
    traffic_source: Option<String>,
    #[arg(long)]
    follower_count: Option<i64>,
    #[arg(long)]
    hashtags_count: Option<i64>,
    #[arg(long)]
    caption_length: Option<i64>,
    #[arg(long)]
    has_cta: Option<i64>,
    #[arg(long)]
    is_weekend: Option<i64>,
    #[arg(long)]
    post_hour: Option<i64>,
    #[arg(long)]
    likes: Option<i64>,
    #[arg(long)]
    comments: Option<i64>,
    #[arg(long)]
    shares: Option<i64>,
    #[arg(long)]
    saves: Option<i64>,
}

impl From<Args> for Form {
    fn from(a: Args) -> Self {
        Self {
            account_type: a.account_type,
            media_type: a.media_type,
            content_category: a.content_category,
            traffic_source: a.traffic_source,
            follower_count: a.follower_count,
            hashtags_count: a.hashtags_count,
            caption_length: a.caption_length,
            has_cta: a.has_cta,
            is_weekend: a.is_weekend,
            post_hour: a.post_hour,
            likes: a.likes,
            comments: a.comments,
            shares: a.shares,
            saves: a.saves,
        }
    }
}

fn main() -> anyhow::Result<()> {
    viralcast::log();
    let args = Args::parse();
    let dataset = Dataset::load(&args.data)?;
    let models = match args.models.as_ref() {
        Some(dir) => Loader::new(dir).provide(&dataset)?,
        None => Trainer::default().provide(&dataset)?,
    };
    let dashboard = Dashboard::new(&dataset, models);
    let (post, analysis) = dashboard.analyze(&Form::from(args))?;
    println!(
        "{} {} / {} / {} / {}",
        "post".bold(),
        post.account_type,
        post.media_type,
        post.content_category,
        post.traffic_source
    );
    for kpi in Kpi::cards(Some(&analysis)) {
        println!("{:<28} {}", kpi.label, kpi.text().bold());
    }
    let message = analysis.tier.message();
    println!(
        "{}",
        match analysis.tier {
            Tier::High => message.green(),
            Tier::Moderate => message.yellow(),
            Tier::Low => message.red(),
        }
    );
    Ok(())
}
