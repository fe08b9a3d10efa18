use super::*;
use crate::dataset::Dataset;
use crate::features::PostFeatures;
use crate::features::SchemaError;

/// Holdout scores of a pair of fitted models.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    pub rows: usize,
    /// Share of rows where `p >= 0.5` agrees with the virality label.
    pub accuracy: f64,
    /// Coefficient of determination of the engagement regressor.
    pub r2: f64,
}

impl Metrics {
    pub fn evaluate(models: &Models, holdout: &Dataset) -> Result<Self, SchemaError> {
        let posts = holdout.posts();
        let labels = holdout.labels();
        let targets = holdout.targets();
        let probabilities = posts
            .iter()
            .map(|p| models.classifier.predict_proba(p))
            .collect::<Result<Vec<f64>, _>>()?;
        let estimates = posts
            .iter()
            .map(|p: &PostFeatures| models.regressor.predict(p))
            .collect::<Result<Vec<f64>, _>>()?;
        Ok(Self {
            rows: posts.len(),
            accuracy: accuracy(&probabilities, &labels),
            r2: r2(&estimates, &targets),
        })
    }
}

impl std::fmt::Display for Metrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rows, accuracy {:.4}, r2 {:.4}",
            self.rows, self.accuracy, self.r2
        )
    }
}

fn accuracy(probabilities: &[f64], labels: &[f64]) -> f64 {
    if labels.is_empty() {
        return 0.0;
    }
    let hits = probabilities
        .iter()
        .zip(labels.iter())
        .filter(|(p, y)| (**p >= 0.5) == (**y >= 0.5))
        .count();
    hits as f64 / labels.len() as f64
}

fn r2(estimates: &[f64], targets: &[f64]) -> f64 {
    if targets.is_empty() {
        return 0.0;
    }
    let mean = targets.iter().sum::<f64>() / targets.len() as f64;
    let total = targets.iter().map(|y| (y - mean).powi(2)).sum::<f64>();
    let residual = estimates
        .iter()
        .zip(targets.iter())
        .map(|(e, y)| (y - e).powi(2))
        .sum::<f64>();
    if total == 0.0 {
        return if residual == 0.0 { 1.0 } else { 0.0 };
    }
    1.0 - residual / total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::dataset::synthetic;

    #[test]
    fn accuracy_thresholds_at_one_half() {
        assert_eq!(accuracy(&[0.5, 0.49, 0.9, 0.1], &[1.0, 0.0, 0.0, 0.0]), 0.75);
        assert_eq!(accuracy(&[], &[]), 0.0);
    }

    #[test]
    fn perfect_estimates_have_unit_r2() {
        assert_eq!(r2(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]), 1.0);
        assert!((r2(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0])).abs() < 1e-12);
    }

    #[test]
    fn forests_beat_chance_on_learnable_data() {
        let dataset = synthetic(400, 21);
        let (train, test) = dataset.holdout(crate::HOLDOUT_RATIO, crate::FOREST_SEED);
        let models = Trainer::default().provide(&train).unwrap();
        let metrics = Metrics::evaluate(&models, &test).unwrap();
        assert_eq!(metrics.rows, 80);
        assert!(metrics.accuracy > 0.8, "{}", metrics);
        assert!(metrics.r2 > 0.5, "{}", metrics);
    }
}
