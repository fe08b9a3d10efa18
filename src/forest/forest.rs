use super::*;
use crate::Error;
use crate::Feature;
use crate::features::SchemaError;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rayon::prelude::*;
use serde::Deserialize;
use serde::Serialize;

/// Bagged ensemble of [`Tree`]s whose prediction is the mean over trees.
///
/// Per-tree seeds are drawn up front from the master seed and results are
/// aggregated in tree order, so a fit is reproducible regardless of how
/// rayon schedules the trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forest {
    config: Config,
    trees: Vec<Tree>,
}

impl Forest {
    pub fn fit(x: &[Vec<Feature>], y: &[f64], config: Config) -> Result<Self, Error> {
        if x.is_empty() || x.len() != y.len() {
            return Err(Error::Training(format!(
                "{} rows for {} targets",
                x.len(),
                y.len()
            )));
        }
        if config.trees == 0 {
            return Err(Error::Training("forest needs at least one tree".to_string()));
        }
        let n = x.len();
        let ref mut rng = SmallRng::seed_from_u64(config.seed);
        let seeds = (0..config.trees)
            .map(|_| rng.random::<u64>())
            .collect::<Vec<u64>>();
        let trees = seeds
            .into_par_iter()
            .map(|seed| {
                let ref mut rng = SmallRng::seed_from_u64(seed);
                let sample = (0..n)
                    .map(|_| rng.random_range(0..n))
                    .collect::<Vec<usize>>();
                match config.impurity {
                    Impurity::Gini => Tree::grow::<Gini, _>(x, y, sample, &config, rng),
                    Impurity::Variance => Tree::grow::<Variance, _>(x, y, sample, &config, rng),
                }
            })
            .collect::<Vec<Tree>>();
        log::debug!(
            "fitted {} trees ({:?}), mean depth {:.1}",
            trees.len(),
            config.impurity,
            trees.iter().map(Tree::depth).sum::<usize>() as f64 / trees.len() as f64
        );
        Ok(Self { config, trees })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
    pub fn trees(&self) -> &[Tree] {
        &self.trees
    }
    pub fn width(&self) -> usize {
        self.trees.first().map(Tree::width).unwrap_or_default()
    }

    /// Mean leaf value over trees. For a Gini forest on 0/1 labels this
    /// is the probability of the positive class.
    pub fn predict(&self, row: &[Feature]) -> Result<f64, SchemaError> {
        if row.len() != self.width() {
            return Err(SchemaError::Width {
                expected: self.width(),
                found: row.len(),
            });
        }
        Ok(self.trees.iter().map(|t| t.predict(row)).sum::<f64>() / self.trees.len() as f64)
    }

    /// Mean decrease in impurity per feature, normalized to sum to one.
    pub fn importances(&self) -> Vec<f64> {
        let mut total = vec![0.0; self.width()];
        for tree in self.trees.iter() {
            let gains = tree.gains();
            let sum = gains.iter().sum::<f64>();
            if sum > 0.0 {
                total
                    .iter_mut()
                    .zip(gains.iter())
                    .for_each(|(t, g)| *t += g / sum);
            }
        }
        let sum = total.iter().sum::<f64>();
        if sum > 0.0 {
            total.iter_mut().for_each(|t| *t /= sum);
        }
        total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold() -> (Vec<Vec<Feature>>, Vec<f64>) {
        let x = (0..60)
            .map(|i| vec![i as f64, (i % 7) as f64])
            .collect::<Vec<_>>();
        let y = (0..60).map(|i| if i >= 30 { 1.0 } else { 0.0 }).collect();
        (x, y)
    }

    #[test]
    fn classifier_separates_a_threshold() {
        let (x, y) = threshold();
        let forest = Forest::fit(&x, &y, Config::classifier().with_trees(25)).unwrap();
        assert_eq!(forest.trees().len(), 25);
        assert!(forest.predict(&[55.0, 6.0]).unwrap() > 0.9);
        assert!(forest.predict(&[4.0, 4.0]).unwrap() < 0.1);
    }

    #[test]
    fn probabilities_stay_in_unit_interval() {
        let (x, y) = threshold();
        let forest = Forest::fit(&x, &y, Config::classifier().with_trees(15)).unwrap();
        for row in x.iter() {
            let p = forest.predict(row).unwrap();
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn same_seed_same_forest() {
        let (x, y) = threshold();
        let a = Forest::fit(&x, &y, Config::regressor().with_trees(10)).unwrap();
        let b = Forest::fit(&x, &y, Config::regressor().with_trees(10)).unwrap();
        assert_eq!(a, b);
        let c = Forest::fit(&x, &y, Config::regressor().with_trees(10).with_seed(7)).unwrap();
        assert_ne!(a, c);
    }

    #[test]
    fn wrong_width_is_a_schema_error() {
        let (x, y) = threshold();
        let forest = Forest::fit(&x, &y, Config::regressor().with_trees(3)).unwrap();
        assert_eq!(
            forest.predict(&[1.0]),
            Err(SchemaError::Width {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn importances_favor_the_informative_feature() {
        let (x, y) = threshold();
        let forest = Forest::fit(&x, &y, Config::regressor().with_trees(20)).unwrap();
        let importances = forest.importances();
        assert!((importances.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(importances[0] > importances[1]);
    }

    #[test]
    fn empty_training_set_is_refused() {
        assert!(matches!(
            Forest::fit(&[], &[], Config::classifier()),
            Err(Error::Training(_))
        ));
    }
}
