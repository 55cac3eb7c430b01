pub mod fractional_knapsack;

pub use fractional_knapsack::{fractional_knapsack, FractionalSolution, Pick};
