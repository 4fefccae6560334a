//! Particle swarm optimization adapted to tour permutations.
//!
//! Canonical PSO moves particles through a continuous space; here the
//! space is the permutation group, so a particle's velocity is an ordered
//! list of swap operators pulling its route toward its personal-best and
//! the swarm's global-best. The `alpha`/`beta` weights act as per-swap
//! application probabilities.
//!
//! # Key Types
//!
//! - [`PsoConfig`]: swarm size, iteration budget, pull weights
//! - [`SwarmSolver`]: runs the velocity/update loop
//! - [`SwapOperator`]: one element of a swap-sequence velocity
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), "Particle Swarm Optimization"
//! - Wang et al. (2003), "Particle Swarm Optimization for Traveling
//!   Salesman Problem"

mod config;
mod runner;
mod velocity;

pub use config::PsoConfig;
pub use runner::SwarmSolver;
pub use velocity::SwapOperator;
