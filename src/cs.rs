pub mod combinatorial;
pub mod compression;
pub mod dynamic;
pub mod error;
pub mod greedy;
pub mod sort;

// Re-export all modules
pub use combinatorial::*;
pub use compression::*;
pub use dynamic::*;
pub use greedy::*;
pub use sort::*;
