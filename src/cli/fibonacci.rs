use std::io::{BufRead, Write};

use crate::cli::{join, write_complexity, Prompter};
use crate::cs::dynamic::fibonacci::{fib_series, Method};
use crate::cs::error::{Error, Result};

const COMPLEXITY: &str = "\
Iterative Method:
   Time Complexity: O(n)
   Space Complexity: O(1)

Recursive Method:
   Time Complexity: O(2^n)
   Space Complexity: O(n)";

/// Prints the first `n` Fibonacci terms with both methods.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<()> {
    let count = p.read_count("Enter number of terms: ", "number of terms")?;
    let count = u32::try_from(count)
        .map_err(|_| Error::invalid_dimension(format!("{} terms is too many", count)))?;

    let iterative = fib_series(count, Method::Iterative)?;
    let recursive = fib_series(count, Method::Recursive)?;

    let out = p.output();
    writeln!(out)?;
    writeln!(out, "Fibonacci Series using Iteration:")?;
    writeln!(out, "{}", join(&iterative))?;
    writeln!(out)?;
    writeln!(out, "Fibonacci Series using Recursion:")?;
    writeln!(out, "{}", join(&recursive))?;

    write_complexity(out, "--- Time and Space Complexity ---", COMPLEXITY)
}
