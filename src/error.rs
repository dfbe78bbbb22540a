use thiserror::Error;

/// Generation either fully succeeds or fails before any rule set exists.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleGenError {
    /// A pool cannot cover the requested selection count. Configuration
    /// error: fatal, never retried.
    #[error("{pool} pool holds {have} entries, need {need}")]
    InsufficientPool {
        pool: &'static str,
        have: usize,
        need: usize,
    },

    /// Clustered selection ran out of anchors before filling the set,
    /// despite the up-front size check. Internal invariant violation.
    #[error("anchor expansion stalled at {got} of {need} words")]
    AnchorsExhausted { got: usize, need: usize },
}
