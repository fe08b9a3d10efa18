use crate::Engagement;
use crate::Error;
use crate::Probability;
use crate::dataset::Dataset;
use crate::dataset::Trend;
use crate::features::Form;
use crate::features::Options;
use crate::features::PostFeatures;
use crate::models::Models;
use crate::presentation::Tier;
use serde::Serialize;

/// Outcome of one explicit "Analyze" request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub virality: Probability,
    pub engagement: Engagement,
    pub tier: Tier,
    pub followers: u32,
}

/// Everything a request needs, constructed once at startup.
///
/// Holds the select-box options and the hourly trend derived from the
/// dataset plus both fitted models. Immutable, so it is shared across
/// workers without locking.
pub struct Dashboard {
    options: Options,
    trend: Trend,
    models: Models,
}

impl Dashboard {
    pub fn new(dataset: &Dataset, models: Models) -> Self {
        Self {
            options: dataset.options(),
            trend: dataset.trend(),
            models,
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
    pub fn trend(&self) -> &Trend {
        &self.trend
    }
    pub fn models(&self) -> &Models {
        &self.models
    }

    /// Assemble the row from form state and run both models on it.
    pub fn analyze(&self, form: &Form) -> Result<(PostFeatures, Analysis), Error> {
        let post = form.assemble(&self.options)?;
        let analysis = self.predict(&post)?;
        Ok((post, analysis))
    }

    pub fn predict(&self, post: &PostFeatures) -> Result<Analysis, Error> {
        let virality = self.models.classifier.predict_proba(post)?;
        let engagement = self.models.regressor.predict(post)?;
        log::debug!(
            "analyzed {} {} post: virality {:.4}, engagement {:.4}",
            post.account_type,
            post.media_type,
            virality,
            engagement
        );
        Ok(Analysis {
            virality,
            engagement,
            tier: Tier::from(virality),
            followers: post.follower_count,
        })
    }
}

#[cfg(test)]
pub(crate) fn fixture() -> Dashboard {
    use crate::encoding::HandleUnknown;
    use crate::forest::Config;
    use crate::models::EngagementRegressor;
    use crate::models::ViralClassifier;
    let dataset = crate::dataset::dataset::synthetic(160, 13);
    let models = Models {
        classifier: ViralClassifier::fit_with(
            &dataset,
            Config::classifier().with_trees(10),
            HandleUnknown::Ignore,
        )
        .expect("fit classifier"),
        regressor: EngagementRegressor::fit_with(
            &dataset,
            Config::regressor().with_trees(10),
            HandleUnknown::Ignore,
        )
        .expect("fit regressor"),
    };
    Dashboard::new(&dataset, models)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::HandleUnknown;

    #[test]
    fn example_form_analyzes() {
        let dashboard = fixture();
        let form = Form::from(&crate::features::post::example());
        let (post, analysis) = dashboard.analyze(&form).unwrap();
        assert_eq!(post, crate::features::post::example());
        assert!((0.0..=1.0).contains(&analysis.virality));
        assert_eq!(analysis.tier, Tier::from(analysis.virality));
        assert_eq!(analysis.followers, 10_000);
    }

    #[test]
    fn out_of_range_input_never_reaches_the_models() {
        let dashboard = fixture();
        let form = Form {
            follower_count: Some(50),
            ..Form::default()
        };
        assert!(matches!(dashboard.analyze(&form), Err(Error::Input(_))));
    }

    #[test]
    fn strict_policy_surfaces_a_schema_error() {
        let dataset = crate::dataset::dataset::synthetic(160, 13);
        let dashboard = fixture();
        let models = dashboard.models().clone().with_policy(HandleUnknown::Error);
        let strict = Dashboard::new(&dataset, models);
        let form = Form {
            content_category: Some("Gardening".into()),
            ..Form::default()
        };
        assert!(matches!(strict.analyze(&form), Err(Error::Schema(_))));
        assert!(dashboard.analyze(&form).is_ok());
    }
}
