use super::*;
use crate::Error;
use crate::dataset::Dataset;
use crate::encoding::HandleUnknown;
use std::path::Path;
use std::path::PathBuf;

/// Both fitted models, built once per process and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Models {
    pub classifier: ViralClassifier,
    pub regressor: EngagementRegressor,
}

impl Models {
    pub fn save(&self, dir: &Path) -> Result<(), Error> {
        self.classifier.save(dir)?;
        self.regressor.save(dir)
    }
    pub fn with_policy(self, policy: HandleUnknown) -> Self {
        Self {
            classifier: self.classifier.with_policy(policy),
            regressor: self.regressor.with_policy(policy),
        }
    }
}

/// Where a deployment gets its models from.
pub trait Provider {
    fn provide(&self, dataset: &Dataset) -> Result<Models, Error>;
}

/// Deserialize previously fitted artifacts from a directory.
pub struct Loader {
    dir: PathBuf,
}

impl Loader {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }
}

impl Provider for Loader {
    fn provide(&self, _: &Dataset) -> Result<Models, Error> {
        Ok(Models {
            classifier: ViralClassifier::load(&self.dir)?,
            regressor: EngagementRegressor::load(&self.dir)?,
        })
    }
}

/// Fit both forests in-process from the dataset.
pub struct Trainer {
    policy: HandleUnknown,
}

impl Trainer {
    pub fn new(policy: HandleUnknown) -> Self {
        Self { policy }
    }
}

impl Default for Trainer {
    fn default() -> Self {
        Self::new(HandleUnknown::default())
    }
}

impl Provider for Trainer {
    fn provide(&self, dataset: &Dataset) -> Result<Models, Error> {
        Ok(Models {
            classifier: ViralClassifier::fit(dataset, self.policy)?,
            regressor: EngagementRegressor::fit(dataset, self.policy)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::dataset::synthetic;
    use crate::forest::Config;

    fn small(dataset: &Dataset) -> Models {
        Models {
            classifier: ViralClassifier::fit_with(
                dataset,
                Config::classifier().with_trees(12),
                HandleUnknown::Ignore,
            )
            .unwrap(),
            regressor: EngagementRegressor::fit_with(
                dataset,
                Config::regressor().with_trees(12),
                HandleUnknown::Ignore,
            )
            .unwrap(),
        }
    }

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("viralcast-{}-{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn trained_models_predict_on_example_row() {
        let dataset = synthetic(150, 5);
        let models = Trainer::default().provide(&dataset).unwrap();
        let post = crate::features::post::example();
        let p = models.classifier.predict_proba(&post).unwrap();
        let e = models.regressor.predict(&post).unwrap();
        assert!((0.0..=1.0).contains(&p));
        assert!(e.is_finite());
    }

    #[test]
    fn training_is_deterministic() {
        let dataset = synthetic(150, 5);
        let post = crate::features::post::example();
        let a = small(&dataset);
        let b = small(&dataset);
        assert_eq!(
            a.classifier.predict_proba(&post).unwrap(),
            b.classifier.predict_proba(&post).unwrap()
        );
        assert_eq!(
            a.regressor.predict(&post).unwrap(),
            b.regressor.predict(&post).unwrap()
        );
    }

    #[test]
    fn saved_models_load_and_predict_identically() {
        let dataset = synthetic(120, 9);
        let models = small(&dataset);
        let dir = scratch("roundtrip");
        models.save(&dir).unwrap();
        assert!(ViralClassifier::done(&dir));
        assert!(EngagementRegressor::done(&dir));
        let loaded = Loader::new(&dir).provide(&Dataset::default()).unwrap();
        assert_eq!(loaded, models);
        let post = crate::features::post::example();
        assert_eq!(
            loaded.classifier.predict_proba(&post).unwrap(),
            models.classifier.predict_proba(&post).unwrap()
        );
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_artifacts_are_fatal() {
        let dir = scratch("missing");
        assert!(matches!(
            Loader::new(&dir).provide(&Dataset::default()),
            Err(Error::Artifact(_))
        ));
    }

    #[test]
    fn corrupt_artifact_is_fatal() {
        let dir = scratch("corrupt");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(ViralClassifier::path(&dir), b"{\"not\": \"a model\"}").unwrap();
        assert!(matches!(ViralClassifier::load(&dir), Err(Error::Artifact(_))));
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn policy_override_reaches_both_models() {
        let dataset = synthetic(80, 2);
        let models = small(&dataset).with_policy(HandleUnknown::Error);
        let mut post = crate::features::post::example();
        post.media_type = "Story".to_string();
        assert!(models.classifier.predict_proba(&post).is_err());
        assert!(models.regressor.predict(&post).is_err());
    }
}
