use super::*;
use serde::Deserialize;
use serde::Serialize;

/// The column contract a fitted pipeline was built against.
///
/// Stored alongside each model artifact and checked before every
/// prediction, so a row that does not fit surfaces as a [`SchemaError`]
/// instead of a failure deep inside the forest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Default for Schema {
    fn default() -> Self {
        Self {
            columns: PostFeatures::columns().to_vec(),
        }
    }
}

impl Schema {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn validate(&self, post: &PostFeatures) -> Result<(), SchemaError> {
        if self.columns != PostFeatures::columns() {
            return Err(SchemaError::Columns {
                expected: self.columns.clone(),
                found: PostFeatures::columns().to_vec(),
            });
        }
        for (column, value) in [
            (Column::HasCta, post.has_cta),
            (Column::IsWeekend, post.is_weekend),
        ] {
            if value > 1 {
                return Err(SchemaError::NotBinary { column, value });
            }
        }
        Ok(())
    }
}

/// A feature row the fitted pipeline cannot consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// Column set or order differs from the one seen at fit time.
    Columns {
        expected: Vec<Column>,
        found: Vec<Column>,
    },
    /// Category never seen at fit time, under the strict policy.
    UnknownCategory { column: Column, value: String },
    /// Binary column holding something other than 0 or 1.
    NotBinary { column: Column, value: u8 },
    /// Encoded row width differs from what the forest was trained on.
    Width { expected: usize, found: usize },
}

impl std::fmt::Display for SchemaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = |cs: &[Column]| cs.iter().map(Column::name).collect::<Vec<_>>().join(",");
        match self {
            Self::Columns { expected, found } => write!(
                f,
                "columns mismatch: expected [{}], found [{}]",
                names(expected),
                names(found)
            ),
            Self::UnknownCategory { column, value } => {
                write!(f, "unknown category {:?} for {}", value, column)
            }
            Self::NotBinary { column, value } => {
                write!(f, "{} must be 0 or 1, found {}", column, value)
            }
            Self::Width { expected, found } => {
                write!(f, "expected {} encoded features, found {}", expected, found)
            }
        }
    }
}

impl std::error::Error for SchemaError {}
