//! Builder style entry points, one per use case.

pub mod analyze;
pub mod hide;
mod shared;
pub mod unveil;

pub use shared::*;
