use super::*;
use crate::Error;
use crate::Probability;
use crate::dataset::Dataset;
use crate::encoding::HandleUnknown;
use crate::features::PostFeatures;
use crate::features::SchemaError;
use crate::forest::Config;
use serde::Deserialize;
use serde::Serialize;

/// Probability that a post goes viral.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViralClassifier(Pipeline);

impl ViralClassifier {
    pub fn fit(dataset: &Dataset, policy: HandleUnknown) -> Result<Self, Error> {
        Self::fit_with(dataset, Config::classifier(), policy)
    }
    pub fn fit_with(dataset: &Dataset, config: Config, policy: HandleUnknown) -> Result<Self, Error> {
        log::info!("fitting viral classifier ({} trees)", config.trees);
        Pipeline::fit(&dataset.posts(), &dataset.labels(), config, policy).map(Self)
    }
    /// Probability of the positive (viral) class.
    pub fn predict_proba(&self, post: &PostFeatures) -> Result<Probability, SchemaError> {
        self.0.output(post)
    }
    pub fn pipeline(&self) -> &Pipeline {
        &self.0
    }
    pub fn with_policy(self, policy: HandleUnknown) -> Self {
        Self(self.0.with_policy(policy))
    }
}

impl Artifact for ViralClassifier {
    fn name() -> &'static str {
        "viral_classifier"
    }
}
