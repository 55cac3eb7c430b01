//! Deterministic vs. randomized quicksort on integers read from stdin.

fn main() {
    daa::cli::main_with(daa::cli::quicksort::run);
}
