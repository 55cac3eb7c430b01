use log::debug;
use ndarray::Array2;

use crate::cs::error::{Error, Result};

/// Largest DP table, in cells, that `build_table` will allocate (256 MiB of `u64`).
pub const MAX_TABLE_CELLS: usize = 1 << 25;

/// Optimal 0/1 knapsack selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackSolution {
    /// Best achievable total value.
    pub max_value: u64,
    /// Zero-based indices of the chosen items, ascending.
    pub items: Vec<usize>,
    /// Combined weight of the chosen items.
    pub total_weight: usize,
}

/// Fills the `(items + 1) x (capacity + 1)` table where cell `[i][w]` holds the
/// best value using the first `i` items within capacity `w`.
///
/// Row 0 and column 0 stay zero. Every other cell is
/// `max(table[i-1][w], value[i-1] + table[i-1][w - weight[i-1]])` when the
/// item fits and `table[i-1][w]` otherwise.
///
/// # Errors
/// * `Error::InvalidInput` - if `values` and `weights` differ in length
/// * `Error::InvalidDimension` - if the table would exceed `MAX_TABLE_CELLS`
pub fn build_table(values: &[u64], weights: &[usize], capacity: usize) -> Result<Array2<u64>> {
    if values.len() != weights.len() {
        return Err(Error::invalid_input(format!(
            "got {} values but {} weights",
            values.len(),
            weights.len()
        )));
    }

    let n = values.len();
    let cells = capacity
        .checked_add(1)
        .and_then(|cols| cols.checked_mul(n + 1))
        .filter(|&cells| cells <= MAX_TABLE_CELLS)
        .ok_or_else(|| {
            Error::invalid_dimension(format!(
                "a table of {} items by capacity {} exceeds {} cells",
                n, capacity, MAX_TABLE_CELLS
            ))
        })?;
    debug!("allocating knapsack table of {} cells", cells);
    let mut table = Array2::<u64>::zeros((n + 1, capacity + 1));

    for i in 1..=n {
        let (value, weight) = (values[i - 1], weights[i - 1]);
        for w in 1..=capacity {
            let exclude = table[[i - 1, w]];
            table[[i, w]] = if weight <= w {
                let include = value
                    .checked_add(table[[i - 1, w - weight]])
                    .ok_or_else(|| Error::overflow("knapsack value exceeds u64"))?;
                include.max(exclude)
            } else {
                exclude
            };
        }
    }

    debug!("knapsack table filled: {} x {}", n + 1, capacity + 1);
    Ok(table)
}

/// Returns the maximum total value of items fitting in `capacity` when each
/// item is either taken whole or left out.
///
/// # Errors
/// * `Error::InvalidInput` - if `values` and `weights` differ in length
/// * `Error::InvalidDimension` - if the table would exceed `MAX_TABLE_CELLS`
///
/// # Examples
/// ```
/// use daa::cs::dynamic::knapsack::knapsack_01;
///
/// let best = knapsack_01(&[60, 100, 120], &[10, 20, 30], 50).unwrap();
/// assert_eq!(best, 220);
/// ```
///
/// # Complexity
/// * Time: O(n * W)
/// * Space: O(n * W)
pub fn knapsack_01(values: &[u64], weights: &[usize], capacity: usize) -> Result<u64> {
    let table = build_table(values, weights, capacity)?;
    Ok(table[[values.len(), capacity]])
}

/// Like [`knapsack_01`] but also walks the table backwards to recover which
/// items make up the optimum.
pub fn knapsack_01_items(
    values: &[u64],
    weights: &[usize],
    capacity: usize,
) -> Result<KnapsackSolution> {
    let table = build_table(values, weights, capacity)?;
    let n = values.len();

    let mut items = Vec::new();
    let mut w = capacity;
    for i in (1..=n).rev() {
        // A changed cell means item i-1 was part of the optimum for this row.
        if table[[i, w]] != table[[i - 1, w]] {
            items.push(i - 1);
            w -= weights[i - 1];
        }
    }
    items.reverse();

    let total_weight = items.iter().map(|&idx| weights[idx]).sum();
    Ok(KnapsackSolution {
        max_value: table[[n, capacity]],
        items,
        total_weight,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_instance() {
        assert_eq!(knapsack_01(&[60, 100, 120], &[10, 20, 30], 50).unwrap(), 220);
    }

    #[test]
    fn test_reconstructs_items() {
        let solution = knapsack_01_items(&[60, 100, 120], &[10, 20, 30], 50).unwrap();
        assert_eq!(solution.max_value, 220);
        assert_eq!(solution.items, vec![1, 2]);
        assert_eq!(solution.total_weight, 50);
    }

    #[test]
    fn test_zero_items_or_capacity() {
        assert_eq!(knapsack_01(&[], &[], 50).unwrap(), 0);
        assert_eq!(knapsack_01(&[60, 100], &[10, 20], 0).unwrap(), 0);
        let solution = knapsack_01_items(&[], &[], 0).unwrap();
        assert!(solution.items.is_empty());
        assert_eq!(solution.total_weight, 0);
    }

    #[test]
    fn test_item_heavier_than_capacity() {
        assert_eq!(knapsack_01(&[500], &[11], 10).unwrap(), 0);
        assert_eq!(knapsack_01(&[500, 3], &[11, 10], 10).unwrap(), 3);
    }

    #[test]
    fn test_table_shape_and_borders() {
        let table = build_table(&[1, 2, 3], &[1, 2, 3], 4).unwrap();
        assert_eq!(table.dim(), (4, 5));
        assert!(table.row(0).iter().all(|&v| v == 0));
        assert!(table.column(0).iter().all(|&v| v == 0));
    }

    #[test]
    fn test_oversized_table_rejected() {
        assert!(matches!(
            knapsack_01(&[1], &[1], i64::MAX as usize),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            knapsack_01_items(&[1], &[1], usize::MAX),
            Err(Error::InvalidDimension(_))
        ));
        assert!(matches!(
            knapsack_01(&[1], &[1], MAX_TABLE_CELLS / 2),
            Err(Error::InvalidDimension(_))
        ));
    }

    #[test]
    fn test_length_mismatch() {
        assert!(matches!(
            knapsack_01(&[1, 2], &[1], 5),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_matches_brute_force() {
        let values = [12u64, 7, 19, 4, 25, 9];
        let weights = [4usize, 3, 6, 1, 8, 2];
        for capacity in 0..=24 {
            let mut best = 0;
            for mask in 0u32..(1 << values.len()) {
                let (mut v, mut w) = (0, 0);
                for i in 0..values.len() {
                    if mask & (1 << i) != 0 {
                        v += values[i];
                        w += weights[i];
                    }
                }
                if w <= capacity {
                    best = best.max(v);
                }
            }
            let solution = knapsack_01_items(&values, &weights, capacity).unwrap();
            assert_eq!(solution.max_value, best, "capacity {}", capacity);
            assert!(solution.total_weight <= capacity);
            let picked: u64 = solution.items.iter().map(|&i| values[i]).sum();
            assert_eq!(picked, best);
        }
    }
}
