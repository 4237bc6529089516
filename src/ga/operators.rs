//! Permutation-preserving genetic operators.
//!
//! Every operator takes valid permutations of `0..n` and produces valid
//! permutations of `0..n`. Ranges are inclusive and order-independent:
//! `(from, to)` and `(to, from)` denote the same segment.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A uniformly random permutation of `0..n` (Fisher-Yates).
pub fn random_permutation<R: Rng>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..n).collect();
    order.shuffle(rng);
    order
}

fn normalize(from: usize, to: usize) -> (usize, usize) {
    if from <= to {
        (from, to)
    } else {
        (to, from)
    }
}

/// Two-point crossover that keeps both children valid permutations.
///
/// Inside the segment, the first child takes the second parent's values and
/// vice versa. The positions outside the segment are filled left to right
/// with each parent's own remaining values, in that parent's order, skipping
/// any value the segment already placed.
///
/// # Panics
///
/// Panics if the parents differ in length or the segment is out of bounds.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::hybridize;
///
/// let (c1, c2) = hybridize(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], 1, 2);
/// assert_eq!(c1, vec![0, 3, 2, 1, 4]);
/// assert_eq!(c2, vec![4, 1, 2, 3, 0]);
/// ```
pub fn hybridize(
    parent1: &[usize],
    parent2: &[usize],
    from: usize,
    to: usize,
) -> (Vec<usize>, Vec<usize>) {
    let mut child1 = vec![0; parent1.len()];
    let mut child2 = vec![0; parent2.len()];
    hybridize_into(parent1, parent2, from, to, &mut child1, &mut child2);
    (child1, child2)
}

/// Writes the children of [`hybridize`] into preallocated buffers.
pub(crate) fn hybridize_into(
    parent1: &[usize],
    parent2: &[usize],
    from: usize,
    to: usize,
    child1: &mut [usize],
    child2: &mut [usize],
) {
    let n = parent1.len();
    assert_eq!(parent2.len(), n, "parents must have the same length");
    let (lo, hi) = normalize(from, to);
    assert!(hi < n, "segment {lo}..={hi} out of bounds for length {n}");

    let mut placed1 = vec![false; n];
    let mut placed2 = vec![false; n];
    for i in lo..=hi {
        child1[i] = parent2[i];
        child2[i] = parent1[i];
        placed1[parent2[i]] = true;
        placed2[parent1[i]] = true;
    }

    let outside = || (0..lo).chain(hi + 1..n);
    let rest1 = parent1.iter().copied().filter(|&v| !placed1[v]);
    for (i, v) in outside().zip(rest1) {
        child1[i] = v;
    }
    let rest2 = parent2.iter().copied().filter(|&v| !placed2[v]);
    for (i, v) in outside().zip(rest2) {
        child2[i] = v;
    }
}

/// The three mutation operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MutationKind {
    /// Exchange the values at both ends of the segment.
    Swap,
    /// Reverse the segment.
    Reverse,
    /// Move the segment behind everything that follows it.
    Rotate,
}

impl MutationKind {
    /// All operators, in draw order.
    pub const ALL: [MutationKind; 3] = [Self::Swap, Self::Reverse, Self::Rotate];

    /// Picks an operator uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Applies a mutation operator to `tour` in place.
///
/// `Rotate` turns `[.., seg, tail]` into `[.., tail, seg]`: the block after
/// the segment shifts left to start where the segment started, and the
/// segment moves to the end. Relative order inside both blocks is kept.
///
/// # Panics
///
/// Panics if the segment is out of bounds.
///
/// # Examples
///
/// ```
/// use u_tsp::ga::{mutate, MutationKind};
///
/// let mut tour = vec![0, 1, 2, 3, 4, 5];
/// mutate(&mut tour, MutationKind::Rotate, 1, 2);
/// assert_eq!(tour, vec![0, 3, 4, 5, 1, 2]);
/// ```
pub fn mutate(tour: &mut [usize], kind: MutationKind, from: usize, to: usize) {
    let (lo, hi) = normalize(from, to);
    match kind {
        MutationKind::Swap => tour.swap(lo, hi),
        MutationKind::Reverse => tour[lo..=hi].reverse(),
        MutationKind::Rotate => tour[lo..].rotate_left(hi - lo + 1),
    }
}
