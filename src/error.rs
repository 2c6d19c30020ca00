use thiserror::Error;

/// Result type alias for fallible subset-sum operations.
pub type Result<T> = std::result::Result<T, SubsetSumError>;

/// Errors raised while building a [`SubsetSumProblem`](crate::core::SubsetSumProblem) or
/// reporting on a search.
///
/// Failing to find an exact match is not an error: the search is a heuristic and a near miss is
/// reported through the fitness and accuracy of the [`SearchSummary`](crate::core::SearchSummary).
#[derive(Error, Debug)]
pub enum SubsetSumError {
    /// A token where an integer was expected
    #[error("malformed input: expected an integer, found {token:?}")]
    MalformedInput {
        /// The offending token
        token: String,
    },

    /// The interactive input ended before the named field was read
    #[error("missing input: {0}")]
    MissingInput(&'static str),

    /// Accuracy is a ratio against the target and is undefined for a target of zero
    #[error("degenerate target: accuracy is undefined for a target sum of 0")]
    DegenerateTarget,

    /// The problem has no candidate values
    #[error("empty instance: at least one candidate value is required")]
    EmptyInstance,

    /// The candidate values are too large in magnitude for every subset sum to fit in an `i64`
    #[error("value overflow: the total magnitude of the candidate values exceeds the i64 range")]
    ValueOverflow,

    /// The swarm was configured with no particles
    #[error("empty swarm: at least one particle is required")]
    EmptySwarm,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
