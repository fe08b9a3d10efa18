use super::*;
use crate::Feature;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;
use serde::Serialize;

/// Arena node. Children are indices into [`Tree::nodes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Leaf {
        value: f64,
        samples: usize,
    },
    Split {
        feature: usize,
        threshold: Feature,
        left: usize,
        right: usize,
        /// Weighted impurity decrease achieved by this split.
        gain: f64,
    },
}

/// A CART tree. Leaves hold the mean target of their samples, which for
/// 0/1 labels is the positive-class fraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    nodes: Vec<Node>,
    width: usize,
}

/// Best split found at one node.
struct Cut {
    feature: usize,
    threshold: Feature,
    score: f64,
}

impl Tree {
    /// Grow a tree on the rows listed in `sample`, duplicates allowed.
    pub fn grow<C, R>(x: &[Vec<Feature>], y: &[f64], sample: Vec<usize>, config: &Config, rng: &mut R) -> Self
    where
        C: Criterion,
        R: Rng,
    {
        let width = x.first().map(Vec::len).unwrap_or_default();
        let k = config.max_features.of(width);
        let mut nodes = vec![Node::Leaf {
            value: 0.0,
            samples: 0,
        }];
        let mut stack = vec![(0usize, sample, 0usize)];
        while let Some((id, rows, depth)) = stack.pop() {
            let stats = rows.iter().map(|&i| y[i]).collect::<Stats>();
            let parent = C::impurity(&stats) * stats.n as f64;
            let leaf = Node::Leaf {
                value: stats.mean(),
                samples: stats.n,
            };
            let splittable = stats.n >= config.min_samples_split
                && parent > f64::EPSILON
                && config.max_depth.map_or(true, |d| depth < d);
            let cut = if splittable {
                Self::cut::<C, R>(x, y, &rows, width, k, config, rng)
            } else {
                None
            };
            match cut.filter(|cut| parent - cut.score > f64::EPSILON) {
                None => nodes[id] = leaf,
                Some(cut) => {
                    let (l, r) = rows
                        .into_iter()
                        .partition::<Vec<usize>, _>(|&i| x[i][cut.feature] <= cut.threshold);
                    let left = nodes.len();
                    let right = left + 1;
                    nodes.push(leaf.clone());
                    nodes.push(leaf);
                    nodes[id] = Node::Split {
                        feature: cut.feature,
                        threshold: cut.threshold,
                        left,
                        right,
                        gain: parent - cut.score,
                    };
                    stack.push((right, r, depth + 1));
                    stack.push((left, l, depth + 1));
                }
            }
        }
        Self { nodes, width }
    }

    /// Search features in random order until `k` non-constant ones have
    /// been scanned, keeping the split with the lowest weighted impurity.
    fn cut<C, R>(
        x: &[Vec<Feature>],
        y: &[f64],
        rows: &[usize],
        width: usize,
        k: usize,
        config: &Config,
        rng: &mut R,
    ) -> Option<Cut>
    where
        C: Criterion,
        R: Rng,
    {
        let mut order = (0..width).collect::<Vec<usize>>();
        order.shuffle(rng);
        let mut best = None::<Cut>;
        let mut scanned = 0;
        let mut sorted = Vec::with_capacity(rows.len());
        for feature in order {
            if scanned == k {
                break;
            }
            sorted.clear();
            sorted.extend(rows.iter().map(|&i| (x[i][feature], y[i])));
            sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
            let lo = sorted.first().map(|p| p.0);
            let hi = sorted.last().map(|p| p.0);
            if lo == hi {
                continue;
            }
            scanned += 1;
            let mut left = Stats::default();
            let mut right = sorted.iter().map(|p| p.1).collect::<Stats>();
            for j in 0..sorted.len().saturating_sub(1) {
                left.add(sorted[j].1);
                right.sub(sorted[j].1);
                if sorted[j].0 >= sorted[j + 1].0 {
                    continue;
                }
                if left.n < config.min_samples_leaf || right.n < config.min_samples_leaf {
                    continue;
                }
                let score = C::impurity(&left) * left.n as f64 + C::impurity(&right) * right.n as f64;
                if best.as_ref().map_or(true, |b| score < b.score) {
                    let (a, b) = (sorted[j].0, sorted[j + 1].0);
                    let mid = a + (b - a) / 2.0;
                    let threshold = if mid >= b { a } else { mid };
                    best = Some(Cut {
                        feature,
                        threshold,
                        score,
                    });
                }
            }
        }
        best
    }

    pub fn predict(&self, row: &[Feature]) -> f64 {
        let mut id = 0;
        loop {
            match &self.nodes[id] {
                Node::Leaf { value, .. } => return *value,
                Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                    ..
                } => id = if row[*feature] <= *threshold { *left } else { *right },
            }
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }
    pub fn depth(&self) -> usize {
        fn walk(nodes: &[Node], id: usize) -> usize {
            match &nodes[id] {
                Node::Leaf { .. } => 0,
                Node::Split { left, right, .. } => 1 + walk(nodes, *left).max(walk(nodes, *right)),
            }
        }
        walk(&self.nodes, 0)
    }

    /// Total impurity decrease per feature.
    pub fn gains(&self) -> Vec<f64> {
        let mut gains = vec![0.0; self.width];
        for node in self.nodes.iter() {
            if let Node::Split { feature, gain, .. } = node {
                gains[*feature] += gain;
            }
        }
        gains
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn and() -> (Vec<Vec<Feature>>, Vec<f64>) {
        let x = vec![
            vec![0.0, 0.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![1.0, 1.0],
        ];
        let y = vec![0.0, 0.0, 0.0, 1.0];
        (x, y)
    }

    #[test]
    fn full_depth_tree_memorizes_training_rows() {
        let (x, y) = and();
        let ref mut rng = SmallRng::seed_from_u64(0);
        let config = Config::classifier().with_trees(1);
        let config = Config {
            max_features: MaxFeatures::All,
            ..config
        };
        let tree = Tree::grow::<Gini, _>(&x, &y, vec![0, 1, 2, 3], &config, rng);
        for (row, label) in x.iter().zip(y.iter()) {
            assert_eq!(tree.predict(row), *label);
        }
        assert_eq!(tree.depth(), 2);
    }

    #[test]
    fn thresholds_sit_between_distinct_values() {
        let x = vec![vec![1.0], vec![2.0], vec![3.0], vec![10.0]];
        let y = vec![0.0, 0.0, 0.0, 5.0];
        let ref mut rng = SmallRng::seed_from_u64(0);
        let tree = Tree::grow::<Variance, _>(&x, &y, vec![0, 1, 2, 3], &Config::regressor(), rng);
        match &tree.nodes()[0] {
            Node::Split { threshold, .. } => assert_eq!(*threshold, 6.5),
            leaf => panic!("expected split, found {:?}", leaf),
        }
        assert_eq!(tree.predict(&[7.0]), 5.0);
        assert_eq!(tree.predict(&[6.0]), 0.0);
    }

    #[test]
    fn constant_features_make_a_leaf() {
        let x = vec![vec![3.0], vec![3.0], vec![3.0]];
        let y = vec![0.0, 1.0, 1.0];
        let ref mut rng = SmallRng::seed_from_u64(0);
        let tree = Tree::grow::<Gini, _>(&x, &y, vec![0, 1, 2], &Config::classifier(), rng);
        assert_eq!(tree.nodes().len(), 1);
        assert!((tree.predict(&[3.0]) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(tree.gains(), vec![0.0]);
    }

    #[test]
    fn bootstrap_duplicates_weigh_in() {
        let x = vec![vec![0.0], vec![1.0]];
        let y = vec![0.0, 1.0];
        let ref mut rng = SmallRng::seed_from_u64(0);
        let tree = Tree::grow::<Gini, _>(&x, &y, vec![1, 1, 1], &Config::classifier(), rng);
        assert_eq!(tree.predict(&[0.0]), 1.0);
        assert_eq!(
            tree.nodes()[0],
            Node::Leaf {
                value: 1.0,
                samples: 3
            }
        );
    }
}
