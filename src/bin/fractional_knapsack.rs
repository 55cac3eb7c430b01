//! Greedy fractional knapsack over items read from stdin.

fn main() {
    daa::cli::main_with(daa::cli::fractional_knapsack::run);
}
