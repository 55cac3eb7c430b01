//! Prints a Fibonacci series computed iteratively and recursively.

fn main() {
    daa::cli::main_with(daa::cli::fibonacci::run);
}
