pub mod args;
pub mod server;

pub use args::*;
pub use server::*;
