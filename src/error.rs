//! Error types shared by the distance oracle and all solvers.

/// Errors reported by oracle construction, configuration validation,
/// and the solver entry points.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A construction parameter is unusable: fewer than two points,
    /// a zero-sized population/colony/swarm, a zero iteration budget,
    /// or an out-of-range numeric parameter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A node index outside `[0, nodes)` reached the distance oracle.
    ///
    /// Defensive check; cannot occur while every route stays a valid
    /// permutation.
    #[error("node index {index} out of bounds for {nodes} nodes")]
    IndexOutOfBounds { index: usize, nodes: usize },
}

pub type Result<T> = core::result::Result<T, Error>;
