//! Ant colony optimization for the travelling salesman problem.
//!
//! A colony of ants constructs tours probabilistically, biased by a
//! shared pheromone matrix (reinforced in proportion to tour quality,
//! evaporated every iteration) and a static visibility matrix (inverse
//! distance).
//!
//! # Key Types
//!
//! - [`AcoConfig`]: colony size, iteration budget, pheromone parameters
//! - [`AntColonySolver`]: runs the construction/deposit/evaporation loop
//!
//! # References
//!
//! - Dorigo & Gambardella (1997), "Ant Colony System: A Cooperative
//!   Learning Approach to the Traveling Salesman Problem"

mod ant;
mod config;
mod matrix;
mod runner;

pub use config::AcoConfig;
pub use runner::AntColonySolver;
