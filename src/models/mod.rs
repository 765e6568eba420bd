//! Core data models for the form guide.

mod football_match;
mod outcome;
mod roster;
mod selection;
mod summary;

pub use football_match::*;
pub use outcome::*;
pub use roster::*;
pub use selection::*;
pub use summary::*;
