use std::io::{BufRead, Write};

use crate::cli::{write_complexity, Prompter};
use crate::cs::dynamic::knapsack::knapsack_01_items;
use crate::cs::error::Result;

const COMPLEXITY: &str = "\
Time Complexity: O(n * W)  (where n = number of items, W = knapsack capacity)
Space Complexity: O(n * W)  (for storing DP table)";

/// Reads integral items and a capacity, then solves the 0/1 knapsack.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<()> {
    let n = p.read_count("Enter number of items: ", "number of items")?;

    let mut values = Vec::with_capacity(n);
    let mut weights = Vec::with_capacity(n);
    for i in 1..=n {
        values.push(p.read_number::<u64>(
            &format!("Enter value of item {}: ", i),
            &format!("value of item {}", i),
        )?);
        weights.push(p.read_count(
            &format!("Enter weight of item {}: ", i),
            &format!("weight of item {}", i),
        )?);
    }
    let capacity = p.read_count("Enter capacity of knapsack: ", "capacity")?;

    let solution = knapsack_01_items(&values, &weights, capacity)?;

    let out = p.output();
    writeln!(out)?;
    writeln!(
        out,
        "Maximum value that can be placed in the knapsack = {}",
        solution.max_value
    )?;
    let chosen: Vec<String> = solution.items.iter().map(|i| (i + 1).to_string()).collect();
    if chosen.is_empty() {
        writeln!(out, "Selected items: none")?;
    } else {
        writeln!(
            out,
            "Selected items: {} (total weight {})",
            chosen.join(", "),
            solution.total_weight
        )?;
    }

    write_complexity(out, "--- Time and Space Complexity ---", COMPLEXITY)
}
