pub mod artifact;
pub mod classifier;
pub mod metrics;
pub mod pipeline;
pub mod provider;
pub mod regressor;

pub use artifact::*;
pub use classifier::*;
pub use metrics::*;
pub use pipeline::*;
pub use provider::*;
pub use regressor::*;
