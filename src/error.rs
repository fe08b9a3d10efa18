use crate::features::InputError;
use crate::features::SchemaError;

/// Everything that can go wrong between reading the dataset and
/// answering an analysis request.
#[derive(Debug)]
pub enum Error {
    /// Dataset missing, unreadable, malformed or empty.
    Dataset(String),
    /// Model artifact missing, unreadable or incompatible.
    Artifact(String),
    /// Form value rejected before assembly.
    Input(InputError),
    /// Feature row incompatible with a fitted pipeline.
    Schema(SchemaError),
    /// Not enough usable rows to fit a model.
    Training(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dataset(s) => write!(f, "dataset: {}", s),
            Self::Artifact(s) => write!(f, "artifact: {}", s),
            Self::Input(e) => write!(f, "input: {}", e),
            Self::Schema(e) => write!(f, "schema: {}", e),
            Self::Training(s) => write!(f, "training: {}", s),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input(e) => Some(e),
            Self::Schema(e) => Some(e),
            _ => None,
        }
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Self::Input(e)
    }
}

impl From<SchemaError> for Error {
    fn from(e: SchemaError) -> Self {
        Self::Schema(e)
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::Dataset(e.to_string())
    }
}
