//! Budget meal plans: pick one affordable catalog recipe per day.

mod budget;
mod random;

pub use budget::*;
pub use random::*;
