use std::io::{BufRead, Write};

use crate::cli::{write_complexity, Prompter};
use crate::cs::combinatorial::n_queens::{seeded_board, solve};
use crate::cs::error::Result;

const COMPLEXITY: &str = "\
Time Complexity: O(N!)   (each row tries the columns left by the rows above)
Space Complexity: O(N^2) (for the board, plus O(N) recursion stack)";

/// Reads a board size and the first queen's column, then backtracks over the
/// remaining rows.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<()> {
    let n = p.read_count("Enter the size of the chessboard (N): ", "board size")?;
    let first_col = p.read_count(
        "Enter the column number (0 to N-1) to place the first Queen: ",
        "first queen column",
    )?;

    let mut board = seeded_board(n, first_col)?;

    let out = p.output();
    writeln!(out)?;
    writeln!(out, "Initial board with first Queen placed:")?;
    writeln!(out, "{}", board)?;

    if solve(&mut board, 1) {
        writeln!(out)?;
        writeln!(out, "One of the possible solutions:")?;
        writeln!(out, "{}", board)?;
    } else {
        writeln!(out, "No solution exists for this configuration.")?;
    }

    write_complexity(out, "--- Time and Space Complexity ---", COMPLEXITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::tests::transcript;
    use crate::cs::error::Error;

    #[test]
    fn test_four_from_column_one() {
        let out = transcript(run, "4\n1\n").unwrap();
        let expected = "\n\
            Initial board with first Queen placed:\n\
            0 1 0 0\n\
            0 0 0 0\n\
            0 0 0 0\n\
            0 0 0 0\n\
            \n\
            \n\
            One of the possible solutions:\n\
            0 1 0 0\n\
            0 0 0 1\n\
            1 0 0 0\n\
            0 0 1 0\n\
            \n";
        assert!(out.contains(expected), "got:\n{}", out);
    }

    #[test]
    fn test_four_from_corner() {
        let out = transcript(run, "4\n0\n").unwrap();
        assert!(out.contains("No solution exists for this configuration.\n"));
        assert!(!out.contains("One of the possible solutions:"));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            transcript(run, "0\n0\n"),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            transcript(run, "4\n7\n"),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            transcript(run, "-4\n"),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            transcript(run, "5000000000\n0\n"),
            Err(Error::InvalidDimension(_))
        ));
    }
}
