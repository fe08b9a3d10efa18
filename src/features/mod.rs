pub mod column;
pub mod form;
pub mod options;
pub mod post;
pub mod schema;
pub mod slider;

pub use column::*;
pub use form::*;
pub use options::*;
pub use post::*;
pub use schema::*;
pub use slider::*;
