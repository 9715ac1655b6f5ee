//! Fisher-Yates shuffle.

use crate::core::GameRng;

/// Return a uniformly random permutation of `items`.
///
/// Walks from the last index down to 1, swapping each slot with a uniformly
/// chosen index at or below it. The input is left untouched.
///
/// ```
/// use memory_match::cards::shuffled;
/// use memory_match::core::GameRng;
///
/// let mut rng = GameRng::new(42);
/// let mut deck = shuffled(&[1, 2, 3, 4], &mut rng);
/// deck.sort();
/// assert_eq!(deck, vec![1, 2, 3, 4]);
/// ```
#[must_use]
pub fn shuffled<T: Clone>(items: &[T], rng: &mut GameRng) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range_usize(0..=i);
        out.swap(i, j);
    }
    out
}
