use std::io::{BufRead, Write};

use crate::cli::{write_complexity, Prompter};
use crate::cs::error::Result;
use crate::cs::greedy::fractional_knapsack::fractional_knapsack;

const COMPLEXITY: &str = "\
Time Complexity: O(n log n)  (due to sorting of items based on ratio)
Space Complexity: O(n)       (for storing value, weight, and ratio lists)";

/// Reads items and a capacity, then fills the knapsack greedily.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<()> {
    let n = p.read_count("Enter number of items: ", "number of items")?;

    let mut values = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);
    for i in 1..=n {
        values.push(p.read_number::<f64>(
            &format!("Enter value of item {}: ", i),
            &format!("value of item {}", i),
        )?);
        weights.push(p.read_number::<f64>(
            &format!("Enter weight of item {}: ", i),
            &format!("weight of item {}", i),
        )?);
    }
    let capacity: f64 = p.read_number("Enter capacity of knapsack: ", "capacity")?;

    let solution = fractional_knapsack(&values, &weights, capacity)?;

    let out = p.output();
    writeln!(out)?;
    for pick in &solution.picks {
        if pick.fraction >= 1.0 {
            writeln!(
                out,
                "Took 100% of item (value={}, weight={})",
                pick.value, pick.weight
            )?;
        } else {
            writeln!(
                out,
                "Took {:.2}% of item (value={}, weight={})",
                pick.fraction * 100.0,
                pick.value,
                pick.weight
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Maximum value in Knapsack = {:.2}", solution.total_value)?;

    write_complexity(out, "--- Time and Space Complexity ---", COMPLEXITY)
}
