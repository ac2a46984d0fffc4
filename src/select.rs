use num::{One, Zero};
use rand::distr::uniform::SampleUniform;
use rand::Rng;
use std::fmt;
use std::ops::SubAssign;

/// Types that can be used as selection weights.
///
/// Satisfied by the ordinary numeric types (`f64` for wheel weights, the
/// unsigned integers for count-style tables). This trait is automatically
/// implemented on any type satisfying the constraints.
pub trait Weight: Zero + One + Copy + PartialOrd + SampleUniform + SubAssign {}
impl<T> Weight for T where T: Zero + One + Copy + PartialOrd + SampleUniform + SubAssign {}

/// Select an index from a slice of weights such that index `k` is chosen
/// with probability `w_k / Σw`.
///
/// Cumulative inversion: draw `r` uniformly from `[0, total)` and walk the
/// weights in order until the draw falls inside a segment's cumulative span.
/// O(N) per call; no precomputed prefix sums.
///
/// If the weights sum to zero (or below, for signed types) the total is
/// substituted with 1 so the draw remains well-defined; with all-zero
/// weights the walk then falls through and the last index is returned. This
/// is a defined fallback, not an error.
///
/// # Panics
///
/// Panics if `weights` is empty: selection over no candidates is undefined.
/// The crate's own callers never hit this ([crate::segment::SegmentSet] and
/// [WeightedTable] cannot be empty).
pub fn pick_weighted<W: Weight, R: Rng>(weights: &[W], rng: &mut R) -> usize {
    assert!(!weights.is_empty(), "weights must be non-empty");

    let mut total = W::zero();
    for w in weights {
        total = total + *w;
    }
    if total <= W::zero() {
        total = W::one();
    }

    let mut r = rng.random_range(W::zero()..total);
    for (i, w) in weights.iter().enumerate() {
        if r < *w {
            return i;
        }
        r -= *w;
    }
    weights.len() - 1
}

/// Errors that may occur when constructing a [WeightedTable].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableError {
    /// The item list is empty.
    Empty,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Empty => write!(f, "weighted table has no items"),
        }
    }
}

impl std::error::Error for TableError {}

/// A table of weighted items that can be randomly sampled from.
///
/// # Examples
///
/// ```
/// use fortuna::select::WeightedTable;
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let t = WeightedTable::new(vec![("common", 8u32), ("rare", 1u32)]).unwrap();
/// let mut rng = StdRng::seed_from_u64(7);
/// let item = t.roll(&mut rng);
/// assert!(*item == "common" || *item == "rare");
/// ```
pub struct WeightedTable<T, W: Weight> {
    items: Vec<T>,
    weights: Vec<W>,
}

impl<T, W: Weight> WeightedTable<T, W> {
    /// Create a new table from a list of items with their weights.
    pub fn new(entries: Vec<(T, W)>) -> Result<WeightedTable<T, W>, TableError> {
        if entries.is_empty() {
            return Err(TableError::Empty);
        }
        let mut items = Vec::with_capacity(entries.len());
        let mut weights = Vec::with_capacity(entries.len());
        for (item, weight) in entries {
            items.push(item);
            weights.push(weight);
        }
        Ok(WeightedTable { items, weights })
    }

    /// Return a random item from this table, weighted by the item weights.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> &T {
        let i = pick_weighted(&self.weights, rng);
        &self.items[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Tests that a single-entry slice always selects index 0.
    #[test]
    fn test_single_entry() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..100 {
            assert_eq!(0, pick_weighted(&[1.0], &mut rng));
        }
    }

    /// Tests that zero-weight entries are never selected when a positive
    /// weight exists.
    #[test]
    fn test_zero_weight_never_selected() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..1000 {
            assert_eq!(1, pick_weighted(&[0.0, 3.0, 0.0], &mut rng));
        }
    }

    /// Tests the all-zero fallback: the walk falls through and the last
    /// index is returned.
    #[test]
    fn test_all_zero_falls_back_to_last() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            assert_eq!(3, pick_weighted(&[0.0, 0.0, 0.0, 0.0], &mut rng));
        }
    }

    /// Tests that empirical selection frequency converges to the weight
    /// ratios: with weights [1, 1, 2, 4], index 3 should be chosen with
    /// frequency 4/8 = 0.5 within +/- 0.02 over 100k draws.
    #[test]
    fn test_frequency_converges_to_weights() {
        let weights = [1.0, 1.0, 2.0, 4.0];
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 4];

        const DRAWS: u32 = 100_000;
        for _ in 0..DRAWS {
            counts[pick_weighted(&weights, &mut rng)] += 1;
        }

        let freq3 = f64::from(counts[3]) / f64::from(DRAWS);
        assert!((freq3 - 0.5).abs() < 0.02, "index 3 frequency {freq3}");

        let freq0 = f64::from(counts[0]) / f64::from(DRAWS);
        assert!((freq0 - 0.125).abs() < 0.02, "index 0 frequency {freq0}");
    }

    /// Tests that integer weights select with the same proportions.
    #[test]
    fn test_integer_weights() {
        let weights = [1u32, 3u32];
        let mut rng = StdRng::seed_from_u64(9);
        let mut ones = 0u32;
        for _ in 0..10_000 {
            if pick_weighted(&weights, &mut rng) == 1 {
                ones += 1;
            }
        }
        let freq = f64::from(ones) / 10_000.0;
        assert!((freq - 0.75).abs() < 0.03, "index 1 frequency {freq}");
    }

    /// Tests that an empty weight slice is a precondition panic, in
    /// release builds too.
    #[test]
    #[should_panic(expected = "weights must be non-empty")]
    fn test_empty_weights_panic() {
        let mut rng = StdRng::seed_from_u64(0);
        pick_weighted::<f64, _>(&[], &mut rng);
    }

    /// Tests that an empty table is rejected with a displayable error.
    #[test]
    fn test_empty_table() {
        let t = WeightedTable::<&str, u32>::new(Vec::new());
        assert!(matches!(t, Err(TableError::Empty)));
        assert_eq!("weighted table has no items", TableError::Empty.to_string());
    }

    /// Tests rolling on a weighted table.
    #[test]
    fn test_table_roll() {
        let t = WeightedTable::new(vec![("a", 0u32), ("b", 5u32)]).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            assert_eq!("b", *t.roll(&mut rng));
        }
    }
}
