//! Swap-sequence velocities.

use rand::Rng;

/// A single element-swap with its application probability.
///
/// Ordered lists of these form a particle's velocity.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SwapOperator {
    pub a: usize,
    pub b: usize,
    pub probability: f64,
}

/// Builds the swap sequence between a particle's route and a best route.
///
/// Scans positions left to right over a working copy of `target`;
/// wherever it disagrees with `current`, records the swap that aligns the
/// working copy and applies it there, so later comparisons stay
/// consistent. Applying the full sequence to `target` reproduces
/// `current`; applied to the particle's actual route (each operator
/// gated by `probability`) it pulls the route toward `target`.
pub(crate) fn swap_sequence(
    current: &[usize],
    target: &[usize],
    probability: f64,
) -> Vec<SwapOperator> {
    let mut work = target.to_vec();
    let mut sequence = Vec::new();
    for a in 0..current.len() {
        if current[a] == work[a] {
            continue;
        }
        let b = work
            .iter()
            .position(|&city| city == current[a])
            .expect("both routes are permutations of the same cities");
        sequence.push(SwapOperator { a, b, probability });
        work.swap(a, b);
    }
    sequence
}

/// Applies a velocity to a route: each operator fires only when its
/// uniform draw is at or below the operator's probability.
pub(crate) fn apply_velocity<R: Rng>(
    route: &mut [usize],
    velocity: &[SwapOperator],
    rng: &mut R,
) {
    for op in velocity {
        if rng.random_range(0.0..1.0) <= op.probability {
            route.swap(op.a, op.b);
        }
    }
}
