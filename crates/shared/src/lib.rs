mod command;
pub mod pantry;
pub mod recipe;

pub use command::*;
