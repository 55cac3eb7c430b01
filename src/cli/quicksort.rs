use std::io::{BufRead, Write};
use std::time::Instant;

use log::debug;

use crate::cli::{write_complexity, Prompter};
use crate::cs::error::Result;
use crate::cs::sort::quicksort::{quicksort_deterministic, quicksort_randomized};

const COMPLEXITY: &str = "\
Deterministic Quick Sort:
   Best Case Time Complexity: O(n log n)
   Average Case Time Complexity: O(n log n)
   Worst Case Time Complexity: O(n²) (when pivot always picks smallest/largest element)
   Space Complexity: O(log n) due to recursion stack

Randomized Quick Sort:
   Best Case Time Complexity: O(n log n)
   Average Case Time Complexity: O(n log n)
   Worst Case Time Complexity: O(n²) (very rare due to random pivot)
   Space Complexity: O(log n)";

/// Reads integers and sorts copies with both pivot strategies, timing each.
pub fn run<R: BufRead, W: Write>(p: &mut Prompter<R, W>) -> Result<()> {
    let n = p.read_count("Enter number of elements: ", "number of elements")?;
    let mut arr = Vec::with_capacity(n);
    for i in 1..=n {
        arr.push(p.read_number::<i64>(
            &format!("Enter element {}: ", i),
            &format!("element {}", i),
        )?);
    }

    let mut deterministic = arr.clone();
    let mut randomized = arr;

    let start = Instant::now();
    quicksort_deterministic(&mut deterministic);
    let det_elapsed = start.elapsed();

    let start = Instant::now();
    quicksort_randomized(&mut randomized);
    let rand_elapsed = start.elapsed();
    debug!(
        "sorted {} elements: deterministic {:?}, randomized {:?}",
        n, det_elapsed, rand_elapsed
    );

    let out = p.output();
    writeln!(out)?;
    writeln!(out, "--- Sorted Arrays ---")?;
    writeln!(out, "Deterministic Quick Sort Result: {:?}", deterministic)?;
    writeln!(out, "Randomized Quick Sort Result: {:?}", randomized)?;

    writeln!(out)?;
    writeln!(out, "--- Time Analysis ---")?;
    writeln!(
        out,
        "Deterministic Quick Sort Time: {:.2} microseconds",
        det_elapsed.as_secs_f64() * 1_000_000.0
    )?;
    writeln!(
        out,
        "Randomized Quick Sort Time: {:.2} microseconds",
        rand_elapsed.as_secs_f64() * 1_000_000.0
    )?;

    write_complexity(out, "--- Complexity Analysis ---", COMPLEXITY)
}
