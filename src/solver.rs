//! The common solver contract.
//!
//! All three search methods are polymorphic over one capability: run the
//! configured search against a distance oracle and return the best
//! [`Solution`] found. Callers that want to watch the search converge
//! pass an observer to [`Solver::solve_with_observer`]; it fires once per
//! strict improvement of the tracked best, and never otherwise.

use crate::distance::DistanceMatrix;
use crate::error::Result;
use crate::solution::Solution;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// A strict improvement of the best tour found so far.
///
/// One-way signal, not a protocol: the observer cannot influence the run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Improvement {
    /// Iteration (or generation) at which the improvement was observed.
    pub iteration: usize,
    /// Cost of the new best tour.
    pub cost: f64,
}

/// Capability contract implemented by all solvers.
///
/// # Examples
///
/// ```
/// use tsp_metaheur::distance::{DistanceMatrix, Point};
/// use tsp_metaheur::ga::{GaConfig, GeneticSolver};
/// use tsp_metaheur::solver::Solver;
///
/// let matrix =
///     DistanceMatrix::from_points(&[Point::new(0.0, 0.0), Point::new(3.0, 4.0)]).unwrap();
/// let solver = GeneticSolver::new(GaConfig::default().with_seed(7));
/// let best = solver.solve(&matrix).unwrap();
/// assert_eq!(best.cost, 10.0);
/// ```
pub trait Solver {
    /// Runs the search to completion and returns the best tour found.
    fn solve(&self, matrix: &DistanceMatrix) -> Result<Solution> {
        self.solve_with_observer(matrix, &mut |_| {})
    }

    /// Like [`solve`](Solver::solve), reporting each strict improvement
    /// of the best tour to `observer`.
    fn solve_with_observer(
        &self,
        matrix: &DistanceMatrix,
        observer: &mut dyn FnMut(&Improvement),
    ) -> Result<Solution>;
}

/// One generator per run: seeded explicitly for reproducibility, or from
/// OS entropy when no seed is configured. Never re-seeded mid-run.
pub(crate) fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}
