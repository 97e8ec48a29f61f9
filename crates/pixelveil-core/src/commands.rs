//! File based variants of the api, used by the command line.

mod analyze;
mod capacity;
mod hide;
mod unveil;

pub use analyze::*;
pub use capacity::*;
pub use hide::*;
pub use unveil::*;
