//! The shared solution record and route helpers.
//!
//! Every solver produces and consumes [`Solution`] values. Cost is always
//! recomputed from the route through the distance oracle — the record is
//! never patched by hand, so route and cost cannot drift apart.

use crate::distance::DistanceMatrix;
use crate::error::Result;
use rand::seq::SliceRandom;
use rand::Rng;

/// Tours at or below this cost count as zero-length.
const ZERO_COST: f64 = 1e-12;

/// A tour with its cost and fitness.
///
/// The route is a permutation of `[0, N)`, implicitly closed (the last
/// node connects back to the first). Fitness is the reciprocal of cost,
/// so higher is better.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    pub route: Vec<usize>,
    pub cost: f64,
    pub fitness: f64,
}

impl Solution {
    /// Builds the record for a route, pricing it through the oracle.
    ///
    /// This is the only way cost and fitness are ever assigned.
    pub fn evaluate(route: Vec<usize>, matrix: &DistanceMatrix) -> Result<Self> {
        let cost = matrix.route_cost(&route)?;
        Ok(Self {
            route,
            cost,
            fitness: tour_fitness(cost),
        })
    }

    /// Re-prices the record after its route was perturbed in place.
    pub fn reevaluate(&mut self, matrix: &DistanceMatrix) -> Result<()> {
        self.cost = matrix.route_cost(&self.route)?;
        self.fitness = tour_fitness(self.cost);
        Ok(())
    }
}

/// Reciprocal-cost fitness.
///
/// A zero-length tour (all points coincident) cannot be beaten, so the
/// division is guarded and such tours rank as infinite fitness instead of
/// faulting. Consumers of fitness must tolerate the infinity.
pub fn tour_fitness(cost: f64) -> f64 {
    if cost <= ZERO_COST {
        f64::INFINITY
    } else {
        1.0 / cost
    }
}

/// A uniformly shuffled permutation of `[0, nodes)`.
pub fn random_route<R: Rng + ?Sized>(nodes: usize, rng: &mut R) -> Vec<usize> {
    let mut route: Vec<usize> = (0..nodes).collect();
    route.shuffle(rng);
    route
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_evaluate_prices_through_oracle() {
        let m =
            DistanceMatrix::from_points(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]).unwrap();
        let s = Solution::evaluate(vec![0, 1], &m).unwrap();
        assert_eq!(s.cost, 10.0);
        assert_eq!(s.fitness, 0.1);
    }

    #[test]
    fn test_zero_cost_is_terminal_optimum() {
        assert_eq!(tour_fitness(0.0), f64::INFINITY);
        assert_eq!(tour_fitness(1e-15), f64::INFINITY);
        assert_eq!(tour_fitness(2.0), 0.5);
    }

    #[test]
    fn test_coincident_points_do_not_fault() {
        let m = DistanceMatrix::from_points(&[
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
            Point::new(5.0, 5.0),
        ])
        .unwrap();
        let s = Solution::evaluate(vec![2, 0, 1], &m).unwrap();
        assert_eq!(s.cost, 0.0);
        assert!(s.fitness.is_infinite());
    }

    #[test]
    fn test_random_route_is_permutation() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let route = random_route(12, &mut rng);
            let unique: HashSet<usize> = route.iter().copied().collect();
            assert_eq!(route.len(), 12);
            assert_eq!(unique.len(), 12, "duplicate index in {route:?}");
            assert!(route.iter().all(|&v| v < 12));
        }
    }
}
