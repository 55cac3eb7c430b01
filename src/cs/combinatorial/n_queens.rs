//! N-Queens by row-by-row backtracking.
//!
//! The first queen is seeded by the caller in row 0; the search then fills
//! rows 1..n one at a time, trying columns left to right and undoing any
//! placement whose remaining rows cannot be completed. Only the first
//! solution found is reported.
//!
//! # Examples
//! ```
//! use daa::cs::combinatorial::n_queens::{is_valid_solution, solve_with_first_queen};
//!
//! let board = solve_with_first_queen(4, 1).unwrap().expect("4-queens is solvable from column 1");
//! assert!(is_valid_solution(&board));
//! assert_eq!(board.to_string(), "0 1 0 0\n0 0 0 1\n1 0 0 0\n0 0 1 0\n");
//! ```

use std::fmt;

use log::{debug, trace};
use ndarray::Array2;

use crate::cs::error::{Error, Result};

/// Largest board size accepted by `seeded_board`.
pub const MAX_BOARD_SIZE: usize = 256;

/// An `n x n` chessboard where `1` marks a queen and `0` an empty square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Array2<u8>,
}

impl Board {
    /// Creates an empty board.
    pub fn new(n: usize) -> Self {
        Self {
            cells: Array2::zeros((n, n)),
        }
    }

    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    pub fn has_queen(&self, row: usize, col: usize) -> bool {
        self.cells[[row, col]] == 1
    }

    pub fn place(&mut self, row: usize, col: usize) {
        self.cells[[row, col]] = 1;
    }

    pub fn remove(&mut self, row: usize, col: usize) {
        self.cells[[row, col]] = 0;
    }

    /// Number of queens on the board.
    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == 1).count()
    }

    /// Column of the queen in `row`, if any.
    pub fn queen_in_row(&self, row: usize) -> Option<usize> {
        self.cells.row(row).iter().position(|&c| c == 1)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.rows() {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

/// Returns true if a queen at `(row, col)` is not attacked by any queen in rows
/// `0..row` along its column or either upward diagonal.
pub fn is_safe(board: &Board, row: usize, col: usize) -> bool {
    let n = board.size();

    // Same column above
    if (0..row).any(|r| board.has_queen(r, col)) {
        return false;
    }

    // Upper-left diagonal
    if (0..row).rev().zip((0..col).rev()).any(|(r, c)| board.has_queen(r, c)) {
        return false;
    }

    // Upper-right diagonal
    if (0..row).rev().zip(col + 1..n).any(|(r, c)| board.has_queen(r, c)) {
        return false;
    }

    true
}

/// Places queens in rows `row..n`, leaving the board holding the first
/// complete placement found. Returns false, with rows `row..n` empty again,
/// when no placement exists.
pub fn solve(board: &mut Board, row: usize) -> bool {
    let n = board.size();
    if row >= n {
        return true;
    }

    for col in 0..n {
        if is_safe(board, row, col) {
            board.place(row, col);
            trace!("placed queen at ({}, {})", row, col);
            if solve(board, row + 1) {
                return true;
            }
            // Backtrack
            board.remove(row, col);
            trace!("removed queen at ({}, {})", row, col);
        }
    }

    false
}

/// Seeds a queen at row 0, column `first_col` of an `n x n` board and searches
/// for the remaining queens.
///
/// # Returns
/// * `Ok(Some(board))` - the first solution found
/// * `Ok(None)` - no solution extends the seeded queen
///
/// # Errors
/// * `Error::InvalidDimension` - if `n == 0` or `first_col >= n`
pub fn solve_with_first_queen(n: usize, first_col: usize) -> Result<Option<Board>> {
    let mut board = seeded_board(n, first_col)?;
    if solve(&mut board, 1) {
        debug!("{}-queens solved from column {}", n, first_col);
        Ok(Some(board))
    } else {
        debug!("{}-queens has no solution from column {}", n, first_col);
        Ok(None)
    }
}

/// Returns an empty `n x n` board with a queen at row 0, column `first_col`.
///
/// # Errors
/// * `Error::InvalidDimension` - if `n` is zero or above `MAX_BOARD_SIZE`, or
///   `first_col` is not below `n`
pub fn seeded_board(n: usize, first_col: usize) -> Result<Board> {
    if n == 0 {
        return Err(Error::invalid_dimension("board size must be at least 1"));
    }
    if n > MAX_BOARD_SIZE || n.checked_mul(n).is_none() {
        return Err(Error::invalid_dimension(format!(
            "board size {} exceeds the maximum of {}",
            n, MAX_BOARD_SIZE
        )));
    }
    if first_col >= n {
        return Err(Error::invalid_dimension(format!(
            "first queen column {} is outside 0..{}",
            first_col,
            n - 1
        )));
    }
    let mut board = Board::new(n);
    board.place(0, first_col);
    Ok(board)
}

/// Checks a full board: exactly one queen per row and no queen attacked by any
/// queen above it.
pub fn is_valid_solution(board: &Board) -> bool {
    let n = board.size();
    if board.queen_count() != n {
        return false;
    }
    (0..n).all(|row| match board.queen_in_row(row) {
        Some(col) => is_safe(board, row, col),
        None => false,
    })
}
