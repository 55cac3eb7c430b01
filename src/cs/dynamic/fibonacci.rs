//! Fibonacci numbers computed bottom-up and by plain recursion.
//!
//! The two fixed-width variants exist side by side to contrast an O(n) loop
//! that keeps only the last two terms with the O(2^n) naive recursion that
//! recomputes every subproblem. [`fib_big`] uses the same loop over
//! arbitrary-precision integers for terms past `u64`.

use log::warn;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::cs::error::{Error, Result};

/// Largest index whose Fibonacci number fits in a `u64`.
pub const MAX_U64_TERM: u32 = 93;

/// Above this index the recursive variant takes noticeably long.
pub const SLOW_RECURSION_TERM: u32 = 35;

/// Returns the `n`th Fibonacci number (`F(0) = 0`, `F(1) = 1`) using a rolling
/// pair of predecessors.
///
/// # Errors
/// * `Error::Overflow` - if `n > MAX_U64_TERM`
///
/// # Examples
/// ```
/// use daa::cs::dynamic::fibonacci::fib_iterative;
///
/// assert_eq!(fib_iterative(10).unwrap(), 55);
/// ```
///
/// # Complexity
/// * Time: O(n)
/// * Space: O(1)
pub fn fib_iterative(n: u32) -> Result<u64> {
    if n <= 1 {
        return Ok(u64::from(n));
    }

    let (mut a, mut b) = (0u64, 1u64);
    for _ in 2..=n {
        let c = a
            .checked_add(b)
            .ok_or_else(|| Error::overflow(format!("F({}) does not fit in u64", n)))?;
        a = b;
        b = c;
    }
    Ok(b)
}

/// Returns the `n`th Fibonacci number by direct recursion, without memoization.
///
/// # Errors
/// * `Error::Overflow` - if `n > MAX_U64_TERM`
///
/// # Complexity
/// * Time: O(2^n)
/// * Space: O(n) call stack
pub fn fib_recursive(n: u32) -> Result<u64> {
    if n > MAX_U64_TERM {
        return Err(Error::overflow(format!("F({}) does not fit in u64", n)));
    }
    Ok(fib_recursive_unchecked(n))
}

fn fib_recursive_unchecked(n: u32) -> u64 {
    if n <= 1 {
        return u64::from(n);
    }
    fib_recursive_unchecked(n - 1) + fib_recursive_unchecked(n - 2)
}

/// Returns the `n`th Fibonacci number with no upper bound on `n`.
///
/// ```
/// use daa::cs::dynamic::fibonacci::fib_big;
///
/// assert_eq!(fib_big(100).to_string(), "354224848179261915075");
/// ```
pub fn fib_big(n: u32) -> BigUint {
    let mut a = BigUint::zero();
    let mut b = BigUint::one();
    for _ in 0..n {
        let c = &a + &b;
        a = std::mem::replace(&mut b, c);
    }
    a
}

/// Which of the two fixed-width implementations to use for a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Iterative,
    Recursive,
}

/// Returns the first `count` terms, `F(0)..F(count - 1)`.
pub fn fib_series(count: u32, method: Method) -> Result<Vec<u64>> {
    if method == Method::Recursive && count > SLOW_RECURSION_TERM {
        warn!(
            "recursive Fibonacci series of {} terms grows as O(2^n) and may take a long time",
            count
        );
    }
    (0..count)
        .map(|i| match method {
            Method::Iterative => fib_iterative(i),
            Method::Recursive => fib_recursive(i),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_cases() {
        assert_eq!(fib_iterative(0).unwrap(), 0);
        assert_eq!(fib_iterative(1).unwrap(), 1);
        assert_eq!(fib_recursive(0).unwrap(), 0);
        assert_eq!(fib_recursive(1).unwrap(), 1);
    }

    #[test]
    fn test_methods_agree() {
        for n in 0..=25 {
            assert_eq!(fib_iterative(n).unwrap(), fib_recursive(n).unwrap(), "n = {}", n);
        }
    }

    #[test]
    fn test_recurrence_holds() {
        for n in 2..=MAX_U64_TERM {
            let f = fib_iterative(n).unwrap();
            let f1 = fib_iterative(n - 1).unwrap();
            let f2 = fib_iterative(n - 2).unwrap();
            assert_eq!(f, f1 + f2);
        }
    }

    #[test]
    fn test_series_of_seven() {
        let expected = vec![0, 1, 1, 2, 3, 5, 8];
        assert_eq!(fib_series(7, Method::Iterative).unwrap(), expected);
        assert_eq!(fib_series(7, Method::Recursive).unwrap(), expected);
        assert!(fib_series(0, Method::Iterative).unwrap().is_empty());
    }

    #[test]
    fn test_largest_u64_term() {
        assert_eq!(fib_iterative(MAX_U64_TERM).unwrap(), 12_200_160_415_121_876_738);
        assert!(matches!(
            fib_iterative(MAX_U64_TERM + 1),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            fib_recursive(MAX_U64_TERM + 1),
            Err(Error::Overflow(_))
        ));
    }

    #[test]
    fn test_big_matches_fixed_width() {
        for n in [0, 1, 2, 10, 50, MAX_U64_TERM] {
            assert_eq!(fib_big(n), BigUint::from(fib_iterative(n).unwrap()));
        }
        assert_eq!(
            fib_big(MAX_U64_TERM + 1).to_string(),
            "19740274219868223167"
        );
    }
}
