//! Domain models for the medquery system.

mod catalog;
mod resolution;

pub use catalog::*;
pub use resolution::*;
