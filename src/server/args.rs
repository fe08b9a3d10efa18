use crate::encoding::HandleUnknown;
use crate::models::Loader;
use crate::models::Provider;
use crate::models::Trainer;
use clap::Parser;
use clap::ValueEnum;
use std::path::PathBuf;

/// Where the dashboard gets its models from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Strategy {
    /// Deserialize artifacts written by the trainer.
    Load,
    /// Fit both forests from the dataset at startup.
    Train,
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Serve the virality and engagement dashboard", long_about = None)]
pub struct Args {
    /// CSV dataset read at startup
    #[arg(long, default_value = crate::DATASET_PATH)]
    pub data: PathBuf,
    /// Directory of serialized models
    #[arg(long, default_value = crate::MODELS_DIR)]
    pub models: PathBuf,
    #[arg(long, value_enum, default_value_t = Strategy::Train)]
    pub strategy: Strategy,
    /// Handling of categories unseen at fit time (artifacts keep their own unless set)
    #[arg(long, value_enum)]
    pub unknown: Option<HandleUnknown>,
    /// Address to listen on (falls back to BIND_ADDR, then 127.0.0.1:8080)
    #[arg(long)]
    pub bind: Option<String>,
}

impl Args {
    pub fn provider(&self) -> Box<dyn Provider> {
        match self.strategy {
            Strategy::Load => Box::new(Loader::new(&self.models)),
            Strategy::Train => Box::new(Trainer::new(self.unknown.unwrap_or_default())),
        }
    }

    pub fn bind(&self) -> String {
        self.bind
            .clone()
            .or_else(|| std::env::var("BIND_ADDR").ok())
            .unwrap_or_else(|| crate::BIND_ADDR.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_bundled_paths() {
        let args = Args::try_parse_from(["dashboard"]).unwrap();
        assert_eq!(args.data, PathBuf::from(crate::DATASET_PATH));
        assert_eq!(args.models, PathBuf::from(crate::MODELS_DIR));
        assert_eq!(args.strategy, Strategy::Train);
        assert_eq!(args.unknown, None);
    }

    #[test]
    fn parses_strategy_and_policy() {
        let args = Args::try_parse_from([
            "dashboard",
            "--strategy",
            "load",
            "--unknown",
            "error",
            "--bind",
            "0.0.0.0:9000",
        ])
        .unwrap();
        assert_eq!(args.strategy, Strategy::Load);
        assert_eq!(args.unknown, Some(HandleUnknown::Error));
        assert_eq!(args.bind(), "0.0.0.0:9000");
    }

    #[test]
    fn rejects_unknown_strategy() {
        assert!(Args::try_parse_from(["dashboard", "--strategy", "guess"]).is_err());
    }
}
