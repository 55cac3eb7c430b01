//! 0/1 knapsack by dynamic programming over items read from stdin.

fn main() {
    daa::cli::main_with(daa::cli::knapsack_01::run);
}
