pub mod onehot;
pub mod preprocessor;

pub use onehot::*;
pub use preprocessor::*;
