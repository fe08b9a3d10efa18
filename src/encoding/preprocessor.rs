use super::*;
use crate::Feature;
use crate::features::Column;
use crate::features::PostFeatures;
use crate::features::SchemaError;
use serde::Deserialize;
use serde::Serialize;

/// Turns a feature row into the flat vector the trees split on.
///
/// Categorical columns come first, one indicator block each, followed
/// by the numeric columns passed through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessor {
    encoders: Vec<OneHot>,
    numeric: Vec<Column>,
    policy: HandleUnknown,
}

impl Preprocessor {
    pub fn fit(posts: &[PostFeatures], policy: HandleUnknown) -> Self {
        let encoders = Column::categorical()
            .iter()
            .map(|&column| {
                OneHot::fit(
                    column,
                    posts
                        .iter()
                        .map(move |p| p.text(column).expect("categorical column")),
                )
            })
            .collect::<Vec<OneHot>>();
        let numeric = Column::numeric().collect::<Vec<Column>>();
        log::debug!(
            "fitted preprocessor: {} categorical, {} numeric, width {}",
            encoders.len(),
            numeric.len(),
            encoders.iter().map(OneHot::width).sum::<usize>() + numeric.len()
        );
        Self {
            encoders,
            numeric,
            policy,
        }
    }

    pub fn policy(&self) -> HandleUnknown {
        self.policy
    }
    pub fn with_policy(self, policy: HandleUnknown) -> Self {
        Self { policy, ..self }
    }
    pub fn encoders(&self) -> &[OneHot] {
        &self.encoders
    }

    /// Length of every encoded row.
    pub fn width(&self) -> usize {
        self.encoders.iter().map(OneHot::width).sum::<usize>() + self.numeric.len()
    }

    pub fn transform(&self, post: &PostFeatures) -> Result<Vec<Feature>, SchemaError> {
        let mut row = Vec::with_capacity(self.width());
        for encoder in self.encoders.iter() {
            let value = post.text(encoder.column()).ok_or_else(|| self.mismatch())?;
            encoder.encode(value, self.policy, &mut row)?;
        }
        for &column in self.numeric.iter() {
            let value = post.number(column).ok_or_else(|| self.mismatch())?;
            row.push(value);
        }
        Ok(row)
    }

    /// Encode many rows. Used at fit time, where unknown categories cannot occur.
    pub fn transform_all(&self, posts: &[PostFeatures]) -> Result<Vec<Vec<Feature>>, SchemaError> {
        posts.iter().map(|p| self.transform(p)).collect()
    }

    /// Name of every encoded feature, in row order.
    pub fn names(&self) -> Vec<String> {
        self.encoders
            .iter()
            .flat_map(OneHot::names)
            .chain(self.numeric.iter().map(|c| c.name().to_string()))
            .collect()
    }

    fn mismatch(&self) -> SchemaError {
        SchemaError::Columns {
            expected: self
                .encoders
                .iter()
                .map(OneHot::column)
                .chain(self.numeric.iter().copied())
                .collect(),
            found: PostFeatures::columns().to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitted(policy: HandleUnknown) -> Preprocessor {
        Preprocessor::fit(&crate::dataset::dataset::synthetic(120, 11).posts(), policy)
    }

    #[test]
    fn width_is_categories_plus_numerics() {
        let pre = fitted(HandleUnknown::Ignore);
        // 3 accounts + 4 medias + 3 categories + 3 sources + 10 numerics
        assert_eq!(pre.width(), 23);
        assert_eq!(pre.names().len(), 23);
        assert_eq!(pre.names()[0], "account_type=Business");
        assert_eq!(pre.names()[13], "follower_count");
    }

    #[test]
    fn numerics_pass_through_unchanged() {
        let pre = fitted(HandleUnknown::Ignore);
        let post = crate::features::post::example();
        let row = pre.transform(&post).unwrap();
        assert_eq!(row.len(), pre.width());
        assert_eq!(&row[13..], &[10_000.0, 10.0, 50.0, 1.0, 0.0, 18.0, 500.0, 50.0, 20.0, 30.0]);
        // Business, Reel, Technology are known; Explore is known
        assert_eq!(row[..13].iter().sum::<f64>(), 4.0);
    }

    #[test]
    fn unknown_category_follows_policy() {
        let mut post = crate::features::post::example();
        post.traffic_source = "Stories".to_string();
        let row = fitted(HandleUnknown::Ignore).transform(&post).unwrap();
        assert_eq!(row[..13].iter().sum::<f64>(), 3.0);
        assert!(matches!(
            fitted(HandleUnknown::Error).transform(&post),
            Err(SchemaError::UnknownCategory {
                column: Column::TrafficSource,
                ..
            })
        ));
    }

    #[test]
    fn policy_can_be_swapped_after_fit() {
        let pre = fitted(HandleUnknown::Error).with_policy(HandleUnknown::Ignore);
        assert_eq!(pre.policy(), HandleUnknown::Ignore);
    }
}
