use crate::Feature;
use crate::features::Column;
use crate::features::SchemaError;
use serde::Deserialize;
use serde::Serialize;

/// What to do with a category that was not seen at fit time.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "server", derive(clap::ValueEnum))]
#[serde(rename_all = "snake_case")]
pub enum HandleUnknown {
    /// Encode as an all-zero block.
    #[default]
    Ignore,
    /// Refuse the row.
    Error,
}

/// Indicator encoding of one categorical column over its fitted categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OneHot {
    column: Column,
    categories: Vec<String>,
}

impl OneHot {
    /// Learn the sorted unique categories of `values`.
    pub fn fit<'a, I>(column: Column, values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut categories = values
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<String>>();
        categories.sort();
        categories.dedup();
        Self { column, categories }
    }

    pub fn column(&self) -> Column {
        self.column
    }
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
    pub fn width(&self) -> usize {
        self.categories.len()
    }

    /// Append this column's indicator block to `out`.
    pub fn encode(
        &self,
        value: &str,
        policy: HandleUnknown,
        out: &mut Vec<Feature>,
    ) -> Result<(), SchemaError> {
        let hit = self.categories.binary_search_by(|c| c.as_str().cmp(value)).ok();
        match (hit, policy) {
            (None, HandleUnknown::Error) => Err(SchemaError::UnknownCategory {
                column: self.column,
                value: value.to_string(),
            }),
            (hit, _) => {
                out.extend((0..self.width()).map(|i| if Some(i) == hit { 1.0 } else { 0.0 }));
                Ok(())
            }
        }
    }

    /// `column=category` names for each indicator.
    pub fn names(&self) -> impl Iterator<Item = String> + '_ {
        self.categories
            .iter()
            .map(move |c| format!("{}={}", self.column, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn media() -> OneHot {
        OneHot::fit(Column::MediaType, ["Reel", "Image", "Video", "Reel"])
    }

    #[test]
    fn known_category_sets_one_indicator() {
        let ref mut out = Vec::new();
        media().encode("Reel", HandleUnknown::Ignore, out).unwrap();
        assert_eq!(out, &[0.0, 1.0, 0.0]);
    }

    #[test]
    fn unknown_category_is_all_zero_when_ignored() {
        let ref mut out = vec![7.0];
        media().encode("Story", HandleUnknown::Ignore, out).unwrap();
        assert_eq!(out, &[7.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn unknown_category_fails_when_strict() {
        let ref mut out = Vec::new();
        assert_eq!(
            media().encode("Story", HandleUnknown::Error, out),
            Err(SchemaError::UnknownCategory {
                column: Column::MediaType,
                value: "Story".to_string(),
            })
        );
        assert!(out.is_empty());
    }

    #[test]
    fn names_follow_sorted_categories() {
        assert_eq!(
            media().names().collect::<Vec<_>>(),
            ["media_type=Image", "media_type=Reel", "media_type=Video"]
        );
    }
}
