pub mod config;
pub mod criterion;
pub mod forest;
pub mod tree;

pub use config::*;
pub use criterion::*;
pub use forest::*;
pub use tree::*;
