use serde::Deserialize;
use serde::Serialize;

/// Running sufficient statistics of the targets reaching a node.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Stats {
    pub n: usize,
    pub sum: f64,
    pub sumsq: f64,
}

impl Stats {
    pub fn add(&mut self, y: f64) {
        self.n += 1;
        self.sum += y;
        self.sumsq += y * y;
    }
    pub fn sub(&mut self, y: f64) {
        self.n -= 1;
        self.sum -= y;
        self.sumsq -= y * y;
    }
    pub fn mean(&self) -> f64 {
        if self.n == 0 {
            0.0
        } else {
            self.sum / self.n as f64
        }
    }
}

impl FromIterator<f64> for Stats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        iter.into_iter().fold(Self::default(), |mut s, y| {
            s.add(y);
            s
        })
    }
}

/// Node impurity, the quantity a split tries to reduce.
pub trait Criterion {
    fn impurity(stats: &Stats) -> f64;
}

/// Gini impurity of 0/1 labels.
pub struct Gini;

impl Criterion for Gini {
    fn impurity(stats: &Stats) -> f64 {
        let p = stats.mean().clamp(0.0, 1.0);
        2.0 * p * (1.0 - p)
    }
}

/// Mean squared deviation from the node mean.
pub struct Variance;

impl Criterion for Variance {
    fn impurity(stats: &Stats) -> f64 {
        if stats.n == 0 {
            return 0.0;
        }
        let mean = stats.mean();
        (stats.sumsq / stats.n as f64 - mean * mean).max(0.0)
    }
}

/// Serializable choice of [`Criterion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Impurity {
    Gini,
    Variance,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_nodes_have_zero_impurity() {
        let ones = [1.0; 5].into_iter().collect::<Stats>();
        let zeros = [0.0; 5].into_iter().collect::<Stats>();
        assert_eq!(Gini::impurity(&ones), 0.0);
        assert_eq!(Gini::impurity(&zeros), 0.0);
        assert_eq!(Variance::impurity(&ones), 0.0);
    }

    #[test]
    fn balanced_labels_maximize_gini() {
        let stats = [0.0, 1.0, 0.0, 1.0].into_iter().collect::<Stats>();
        assert!((Gini::impurity(&stats) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn variance_matches_definition() {
        let stats = [1.0, 2.0, 3.0, 4.0].into_iter().collect::<Stats>();
        assert!((Variance::impurity(&stats) - 1.25).abs() < 1e-12);
    }

    #[test]
    fn sub_undoes_add() {
        let mut stats = [0.5, 0.25].into_iter().collect::<Stats>();
        stats.add(3.0);
        stats.sub(3.0);
        assert_eq!(stats.n, 2);
        assert!((stats.mean() - 0.375).abs() < 1e-12);
    }
}
