pub mod quicksort;

pub use quicksort::{
    par_quicksort, partition, quicksort_deterministic, quicksort_randomized,
    quicksort_randomized_with_rng,
};
