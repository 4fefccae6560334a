//! Stochastic metaheuristics for the planar travelling salesman problem.
//!
//! Given a set of points in the plane, each solver searches the space of
//! cyclic visiting orders for a low-cost tour:
//!
//! - **Genetic Algorithm (GA)**: population-based search with
//!   fitness-proportional selection, partially-mapped crossover, and
//!   elitist replacement.
//! - **Ant Colony Optimization (ACO)**: probabilistic tour construction
//!   guided by a pheromone matrix reinforced by tour quality and decayed
//!   every iteration.
//! - **Particle Swarm Optimization (PSO)**: permutation-adapted PSO with
//!   swap-sequence velocities pulling particles toward personal and
//!   global bests.
//!
//! # Architecture
//!
//! The solvers share two leaf components and nothing else: the
//! precomputed [`distance::DistanceMatrix`] oracle and the
//! [`solution::Solution`] record (`route + cost + fitness`). Each solver
//! implements the [`solver::Solver`] contract and is configured at
//! construction with an explicit parameter record, including an optional
//! RNG seed; one generator drives an entire run.
//!
//! All search loops are single-threaded, synchronous, and allocation-light:
//! plain computation over in-memory matrices and permutations.
//!
//! # Example
//!
//! ```
//! use tsp_metaheur::distance::{DistanceMatrix, Point};
//! use tsp_metaheur::ga::{GaConfig, GeneticSolver};
//! use tsp_metaheur::solver::Solver;
//!
//! let points = [
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.0, 1.0),
//! ];
//! let matrix = DistanceMatrix::from_points(&points).unwrap();
//!
//! let solver = GeneticSolver::new(
//!     GaConfig::default()
//!         .with_population_size(20)
//!         .with_generations(200)
//!         .with_seed(42),
//! );
//! let best = solver.solve(&matrix).unwrap();
//! assert_eq!(best.cost, 4.0);
//! ```

pub mod aco;
pub mod distance;
pub mod error;
pub mod ga;
pub mod pso;
pub mod solution;
pub mod solver;
