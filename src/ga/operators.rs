//! Permutation-preserving genetic operators.
//!
//! Crossover and mutation for tour chromosomes, operating on `&[usize]`
//! index vectors. Every operator maintains the permutation invariant:
//! offspring never drop or duplicate a city.
//!
//! # References
//!
//! - Goldberg & Lingle (1985), "Alleles, Loci, and the Traveling
//!   Salesman Problem"

use rand::Rng;

/// Partially Mapped Crossover (PMX) with random cut points.
///
/// Picks two cut points `lo <= hi` uniformly in `[0, n)` and crosses the
/// parents over the segment `[lo, hi)`.
///
/// # Panics
/// Panics if the parents have different lengths or are empty.
pub fn pmx_crossover<R: Rng>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");
    assert!(n > 0, "parents must not be empty");

    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    pmx_with_cuts(parent1, parent2, lo, hi)
}

/// PMX over the explicit segment `[lo, hi)`.
///
/// The segment is swapped between the two offspring verbatim; duplicates
/// outside the segment are repaired by chasing the mapping chain through
/// the sibling offspring's segment until the conflict resolves. Both
/// offspring are valid permutations for any valid parents and cuts.
pub(crate) fn pmx_with_cuts(
    parent1: &[usize],
    parent2: &[usize],
    lo: usize,
    hi: usize,
) -> (Vec<usize>, Vec<usize>) {
    let n = parent1.len();
    let mut offspring1 = parent1.to_vec();
    let mut offspring2 = parent2.to_vec();

    for k in lo..hi {
        offspring1[k] = parent2[k];
        offspring2[k] = parent1[k];
    }

    for loc in (0..lo).chain(hi..n) {
        let mut target = parent1[loc];
        while let Some(idx) = segment_position(&offspring1, target, lo, hi) {
            target = offspring2[idx];
        }
        offspring1[loc] = target;

        let mut target = parent2[loc];
        while let Some(idx) = segment_position(&offspring2, target, lo, hi) {
            target = offspring1[idx];
        }
        offspring2[loc] = target;
    }

    (offspring1, offspring2)
}

/// Position of `value` inside the copied segment, if it conflicts.
fn segment_position(offspring: &[usize], value: usize, lo: usize, hi: usize) -> Option<usize> {
    offspring[lo..hi]
        .iter()
        .position(|&v| v == value)
        .map(|p| p + lo)
}

/// Swap mutation: exchange two random positions.
pub fn swap_mutation<R: Rng>(perm: &mut [usize], rng: &mut R) {
    let n = perm.len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let j = rng.random_range(0..n);
    perm.swap(i, j);
}
