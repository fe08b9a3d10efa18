use super::*;
use crate::Engagement;
use crate::Error;
use crate::dataset::Dataset;
use crate::encoding::HandleUnknown;
use crate::features::PostFeatures;
use crate::features::SchemaError;
use crate::forest::Config;
use serde::Deserialize;
use serde::Serialize;

/// Normalized engagement a post is expected to reach.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagementRegressor(Pipeline);

impl EngagementRegressor {
    pub fn fit(dataset: &Dataset, policy: HandleUnknown) -> Result<Self, Error> {
        Self::fit_with(dataset, Config::regressor(), policy)
    }
    pub fn fit_with(dataset: &Dataset, config: Config, policy: HandleUnknown) -> Result<Self, Error> {
        log::info!("fitting engagement regressor ({} trees)", config.trees);
        Pipeline::fit(&dataset.posts(), &dataset.targets(), config, policy).map(Self)
    }
    pub fn predict(&self, post: &PostFeatures) -> Result<Engagement, SchemaError> {
        self.0.output(post)
    }
    pub fn pipeline(&self) -> &Pipeline {
        &self.0
    }
    pub fn with_policy(self, policy: HandleUnknown) -> Self {
        Self(self.0.with_policy(policy))
    }
}

impl Artifact for EngagementRegressor {
    fn name() -> &'static str {
        "engagement_regressor"
    }
}
