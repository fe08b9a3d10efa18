use crate::Error;
use crate::encoding::HandleUnknown;
use crate::encoding::Preprocessor;
use crate::features::PostFeatures;
use crate::features::Schema;
use crate::features::SchemaError;
use crate::forest::Config;
use crate::forest::Forest;
use serde::Deserialize;
use serde::Serialize;

/// Schema check, preprocessing and forest, fitted together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    schema: Schema,
    preprocessor: Preprocessor,
    forest: Forest,
}

impl Pipeline {
    pub fn fit(
        posts: &[PostFeatures],
        targets: &[f64],
        config: Config,
        policy: HandleUnknown,
    ) -> Result<Self, Error> {
        let schema = Schema::default();
        let preprocessor = Preprocessor::fit(posts, policy);
        let x = preprocessor.transform_all(posts)?;
        let forest = Forest::fit(&x, targets, config)?;
        Ok(Self {
            schema,
            preprocessor,
            forest,
        })
    }

    /// Validate, encode and run the forest on one row.
    pub fn output(&self, post: &PostFeatures) -> Result<f64, SchemaError> {
        self.schema.validate(post)?;
        let row = self.preprocessor.transform(post)?;
        self.forest.predict(&row)
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }
    pub fn preprocessor(&self) -> &Preprocessor {
        &self.preprocessor
    }
    pub fn forest(&self) -> &Forest {
        &self.forest
    }
    pub fn with_policy(self, policy: HandleUnknown) -> Self {
        Self {
            preprocessor: self.preprocessor.with_policy(policy),
            ..self
        }
    }

    /// Encoded feature names paired with their importance, most important first.
    pub fn ranking(&self) -> Vec<(String, f64)> {
        let mut ranking = self
            .preprocessor
            .names()
            .into_iter()
            .zip(self.forest.importances())
            .collect::<Vec<_>>();
        ranking.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranking
    }
}
