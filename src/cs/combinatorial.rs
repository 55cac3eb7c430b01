pub mod n_queens;

pub use n_queens::{is_safe, is_valid_solution, solve, solve_with_first_queen, Board};
