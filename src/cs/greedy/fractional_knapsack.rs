use std::cmp::Ordering;
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;

use crate::cs::error::{Error, Result};

/// One item taken into the knapsack, whole or in part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pick<F> {
    /// Position of the item in the caller's input.
    pub index: usize,
    pub value: F,
    pub weight: F,
    /// Share of the item taken, in `(0, 1]`.
    pub fraction: F,
}

/// Result of the greedy fractional knapsack.
#[derive(Debug, Clone, PartialEq)]
pub struct FractionalSolution<F> {
    pub total_value: F,
    /// Items in the order they were taken (non-increasing value/weight ratio).
    pub picks: Vec<Pick<F>>,
}

impl<F: Float> FractionalSolution<F> {
    /// Combined weight of everything taken.
    pub fn total_weight(&self) -> F {
        self.picks
            .iter()
            .fold(F::zero(), |acc, p| acc + p.weight * p.fraction)
    }
}

fn check_non_negative<F: Float + Debug>(what: &str, index: usize, x: F) -> Result<()> {
    if !x.is_finite() || x < F::zero() {
        return Err(Error::invalid_input(format!(
            "{} of item {} must be a finite non-negative number, got {:?}",
            what, index, x
        )));
    }
    Ok(())
}

/// Fills a knapsack of `capacity` greedily by value/weight ratio, allowing the
/// last item taken to be split.
///
/// Items are sorted by descending ratio; equal ratios keep their input order.
/// Each item is taken whole while it fits; the first one that does not fit is
/// taken in the fraction `remaining / weight` and the search stops.
///
/// # Errors
/// * `Error::InvalidInput` - mismatched lengths, or a negative or non-finite
///   value, weight or capacity
/// * `Error::ZeroWeight` - an item weighs zero, so it has no ratio
///
/// # Examples
/// ```
/// use daa::cs::greedy::fractional_knapsack::fractional_knapsack;
///
/// let solution = fractional_knapsack::<f64>(&[60.0, 100.0, 120.0], &[10.0, 20.0, 30.0], 50.0).unwrap();
/// assert!((solution.total_value - 240.0).abs() < 1e-9);
/// ```
///
/// # Complexity
/// * Time: O(n log n) for the sort
/// * Space: O(n)
pub fn fractional_knapsack<F>(
    values: &[F],
    weights: &[F],
    capacity: F,
) -> Result<FractionalSolution<F>>
where
    F: Float + Debug,
{
    if values.len() != weights.len() {
        return Err(Error::invalid_input(format!(
            "got {} values but {} weights",
            values.len(),
            weights.len()
        )));
    }
    if !capacity.is_finite() || capacity < F::zero() {
        return Err(Error::invalid_input(format!(
            "capacity must be a finite non-negative number, got {:?}",
            capacity
        )));
    }

    let mut items = Vec::with_capacity(values.len());
    for (index, (&value, &weight)) in values.iter().zip(weights).enumerate() {
        check_non_negative("value", index, value)?;
        check_non_negative("weight", index, weight)?;
        if weight == F::zero() {
            return Err(Error::ZeroWeight { index });
        }
        items.push((index, value, weight, value / weight));
    }

    // Stable sort: equal ratios stay in input order.
    items.sort_by(|a, b| b.3.partial_cmp(&a.3).unwrap_or(Ordering::Equal));

    let mut total_value = F::zero();
    let mut remaining = capacity;
    let mut picks = Vec::new();

    for (index, value, weight, ratio) in items {
        if remaining == F::zero() {
            break;
        }

        if weight <= remaining {
            total_value = total_value + value;
            remaining = remaining - weight;
            trace!("took item {} whole (ratio {:?})", index, ratio);
            picks.push(Pick {
                index,
                value,
                weight,
                fraction: F::one(),
            });
        } else {
            let fraction = remaining / weight;
            total_value = total_value + value * fraction;
            trace!("took {:?} of item {} (ratio {:?})", fraction, index, ratio);
            picks.push(Pick {
                index,
                value,
                weight,
                fraction,
            });
            remaining = F::zero();
        }
    }

    debug!(
        "fractional knapsack: {} of {} items taken, total {:?}",
        picks.len(),
        values.len(),
        total_value
    );
    Ok(FractionalSolution { total_value, picks })
}
