pub mod cs;
pub mod error;

pub use cs::sort;
pub use cs::sort::{select, select_with_rng, sort_with_rng};
pub use error::{Error, Result};
