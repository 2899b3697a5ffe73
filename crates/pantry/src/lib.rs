//! Pantry mode: the user marks ingredients they have, and catalog recipes are
//! ranked by how many of those ingredients they use.

mod matcher;
mod query;
mod selection;

pub use matcher::*;
pub use query::*;
pub use selection::*;
