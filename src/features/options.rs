use super::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Select-box choices for each categorical column, sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Options(BTreeMap<Column, Vec<String>>);

impl Options {
    pub fn get(&self, column: Column) -> &[String] {
        self.0.get(&column).map(Vec::as_slice).unwrap_or_default()
    }
    /// The preselected choice: first in sorted order.
    pub fn first(&self, column: Column) -> Option<&str> {
        self.get(column).first().map(String::as_str)
    }
}

impl<I, S> FromIterator<(Column, I)> for Options
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (Column, I)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(column, values)| {
                    let mut values = values.into_iter().map(Into::into).collect::<Vec<String>>();
                    values.sort();
                    values.dedup();
                    (column, values)
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choices_are_sorted_and_unique() {
        let options = Options::from_iter([(Column::MediaType, vec!["Reel", "Image", "Reel"])]);
        assert_eq!(options.get(Column::MediaType), ["Image", "Reel"]);
        assert_eq!(options.first(Column::MediaType), Some("Image"));
        assert!(options.get(Column::AccountType).is_empty());
        assert_eq!(options.first(Column::AccountType), None);
    }
}
