use super::*;
use serde::Deserialize;
use serde::Serialize;

/// How many features each split may consider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaxFeatures {
    /// `floor(sqrt(d))`, at least one.
    Sqrt,
    /// Every feature.
    All,
}

impl MaxFeatures {
    pub fn of(&self, d: usize) -> usize {
        let k = match self {
            Self::Sqrt => ((d as f64).sqrt().floor() as usize).max(1),
            Self::All => d,
        };
        k.min(d)
    }
}

/// Forest hyperparameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub trees: usize,
    pub seed: u64,
    pub impurity: Impurity,
    pub max_features: MaxFeatures,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub max_depth: Option<usize>,
}

impl Config {
    /// Virality classifier: Gini splits over sqrt(d) features.
    pub const fn classifier() -> Self {
        Self {
            trees: crate::FOREST_TREES,
            seed: crate::FOREST_SEED,
            impurity: Impurity::Gini,
            max_features: MaxFeatures::Sqrt,
            min_samples_split: crate::MIN_SAMPLES_SPLIT,
            min_samples_leaf: crate::MIN_SAMPLES_LEAF,
            max_depth: None,
        }
    }
    /// Engagement regressor: variance splits over all features.
    pub const fn regressor() -> Self {
        Self {
            impurity: Impurity::Variance,
            max_features: MaxFeatures::All,
            ..Self::classifier()
        }
    }
    pub const fn with_trees(self, trees: usize) -> Self {
        Self { trees, ..self }
    }
    pub const fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }
}
