use log::trace;
use rand::Rng;

/// Below this length the parallel sort stops spawning tasks.
const PARALLEL_CUTOFF: usize = 2048;

/// Lomuto partition around `arr[pivot_index]`.
///
/// The pivot is swapped to the end, every element `<= pivot` is moved in front
/// of a growing boundary, and the pivot is swapped onto that boundary. Returns
/// the pivot's final position: everything before it is `<=` the pivot,
/// everything after it is `>=`.
///
/// # Panics
/// Panics if `pivot_index` is out of bounds.
pub fn partition<T: Ord>(arr: &mut [T], pivot_index: usize) -> usize {
    let last = arr.len() - 1;
    arr.swap(pivot_index, last);
    let mut i = 0;
    for j in 0..last {
        if arr[j] <= arr[last] {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, last);
    i
}

/// Sorts `arr` in place, always choosing the last element as pivot.
///
/// Already sorted or reverse-sorted input hits the O(n²) worst case.
///
/// ```
/// use daa::cs::sort::quicksort::quicksort_deterministic;
///
/// let mut arr = vec![45, 12, 7, 89, 32, 50];
/// quicksort_deterministic(&mut arr);
/// assert_eq!(arr, vec![7, 12, 32, 45, 50, 89]);
/// ```
pub fn quicksort_deterministic<T: Ord>(arr: &mut [T]) {
    quicksort_by_pivot(arr, &mut |slice: &[T]| slice.len() - 1);
}

/// Sorts `arr` in place, choosing each pivot uniformly at random.
pub fn quicksort_randomized<T: Ord>(arr: &mut [T]) {
    quicksort_randomized_with_rng(arr, &mut rand::thread_rng());
}

/// Randomized quicksort drawing pivots from `rng`, for reproducible runs.
pub fn quicksort_randomized_with_rng<T: Ord, R: Rng + ?Sized>(arr: &mut [T], rng: &mut R) {
    quicksort_by_pivot(arr, &mut |slice: &[T]| rng.gen_range(0..slice.len()));
}

/// Partitions with the index chosen by `choose`, then recurses into the
/// smaller side and loops on the larger so the stack stays O(log n).
fn quicksort_by_pivot<T, P>(mut arr: &mut [T], choose: &mut P)
where
    T: Ord,
    P: FnMut(&[T]) -> usize,
{
    while arr.len() > 1 {
        let pivot_index = choose(&*arr);
        let p = partition(arr, pivot_index);
        trace!("partitioned {} elements at {}", arr.len(), p);

        let (left, rest) = std::mem::take(&mut arr).split_at_mut(p);
        let right = &mut rest[1..];
        if left.len() < right.len() {
            quicksort_by_pivot(left, choose);
            arr = right;
        } else {
            quicksort_by_pivot(right, choose);
            arr = left;
        }
    }
}

/// Randomized quicksort that sorts the two sides of each partition in
/// parallel with `rayon::join`.
pub fn par_quicksort<T: Ord + Send>(arr: &mut [T]) {
    if arr.len() <= PARALLEL_CUTOFF {
        quicksort_randomized(arr);
        return;
    }
    let pivot_index = rand::thread_rng().gen_range(0..arr.len());
    let p = partition(arr, pivot_index);
    let (left, rest) = arr.split_at_mut(p);
    rayon::join(|| par_quicksort(left), || par_quicksort(&mut rest[1..]));
}
