//! Error types shared across the braid workspace.
//!
//! Braid is an inference kernel, not a resilient service: any internal
//! inconsistency indicates a programming or configuration defect.
//! Construction-time problems surface as typed errors; index-formula
//! misuse after construction panics loudly instead of corrupting
//! adjacent arena slots.

use std::error::Error;
use std::fmt;

/// Errors from a concurrent network forward pass.
///
/// There is no partial-result or retry path by design: a failed group
/// task means the run produced nothing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExecuteError {
    /// A group's worker thread panicked, typically from an out-of-range
    /// index formula. Propagated at the join barrier.
    GroupPanicked {
        /// Index of the failing group within the network.
        group: usize,
    },
}

impl fmt::Display for ExecuteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GroupPanicked { group } => {
                write!(f, "hidden group {group} panicked during forward pass")
            }
        }
    }
}

impl Error for ExecuteError {}
