pub mod dataset;
pub mod record;
pub mod trend;

pub use dataset::*;
pub use record::*;
pub use trend::*;
