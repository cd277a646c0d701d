//! Error taxonomy for the epigrid workspace, organized by subsystem:
//! model (single-cell integration), step (grid update pass), and sync
//! (process group).

use std::error::Error;
use std::fmt;

use crate::cell::Compartment;

/// Errors from a model's single-cell step function.
///
/// Returned by `Model::step()` / `Model::step_with_neighbors()` and wrapped
/// in [`StepError::ModelFailed`] by the update pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// The model's step function failed.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "execution failed: {reason}"),
        }
    }
}

impl Error for ModelError {}

/// Errors from the grid update pass.
///
/// Any `StepError` aborts the pass before the buffer swap, so the grid is
/// left exactly as it was; a partially updated grid is never observable.
#[derive(Clone, Debug, PartialEq)]
pub enum StepError {
    /// The model failed while stepping one cell.
    ModelFailed {
        /// Index of the cell being stepped.
        index: usize,
        /// The underlying model error.
        reason: ModelError,
    },
    /// The model produced a NaN or infinite compartment (sentinel check).
    NonFiniteCell {
        /// Index of the offending cell.
        index: usize,
        /// The first compartment that failed the check.
        compartment: Compartment,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ModelFailed { index, reason } => {
                write!(f, "model failed at cell {index}: {reason}")
            }
            Self::NonFiniteCell { index, compartment } => {
                write!(f, "non-finite {compartment} compartment at cell {index}")
            }
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ModelFailed { reason, .. } => Some(reason),
            Self::NonFiniteCell { .. } => None,
        }
    }
}

/// Errors from the process-group barrier.
///
/// A *stalled* peer is indistinguishable from a slow one and blocks the
/// barrier indefinitely; only a peer whose group handle has been dropped
/// is converted into an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SyncError {
    /// A peer's group handle was dropped; the group can never rendezvous.
    GroupDisconnected {
        /// Rank of the participant that observed the disconnect.
        rank: usize,
    },
}

impl fmt::Display for SyncError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GroupDisconnected { rank } => {
                write!(f, "process group disconnected (observed by rank {rank})")
            }
        }
    }
}

impl Error for SyncError {}
