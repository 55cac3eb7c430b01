pub mod fibonacci;
pub mod knapsack;

// Re-export dynamic programming algorithms with descriptive names
pub use fibonacci::{fib_big, fib_iterative, fib_recursive, fib_series};
pub use knapsack::{knapsack_01, knapsack_01_items, KnapsackSolution};
