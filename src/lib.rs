pub mod cli;
pub mod cs;

pub use cs::error::{Error, Result};
pub use cs::{combinatorial, compression, dynamic, greedy, sort};
