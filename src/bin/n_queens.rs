//! N-Queens by backtracking from a user-placed first queen.

fn main() {
    daa::cli::main_with(daa::cli::n_queens::run);
}
