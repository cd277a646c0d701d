//! Run-level error type for the simulation driver.

use std::error::Error;
use std::fmt;

use epigrid_core::{StepError, SyncError};

/// Errors that abort a simulation run.
///
/// A run either returns the complete record sequence or fails with one of
/// these; there is no partial delivery and no retry.
#[derive(Clone, Debug, PartialEq)]
pub enum SimError {
    /// The local grid holds zero cells; per-step means would divide by
    /// zero. Detected before the first step.
    EmptyGrid,
    /// The update pass failed; the grid was left untouched by the failing
    /// step.
    Step(StepError),
    /// The process group can no longer rendezvous.
    Sync(SyncError),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "cannot simulate an empty grid"),
            Self::Step(err) => write!(f, "update pass failed: {err}"),
            Self::Sync(err) => write!(f, "synchronization failed: {err}"),
        }
    }
}

impl Error for SimError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EmptyGrid => None,
            Self::Step(err) => Some(err),
            Self::Sync(err) => Some(err),
        }
    }
}

impl From<StepError> for SimError {
    fn from(err: StepError) -> Self {
        Self::Step(err)
    }
}

impl From<SyncError> for SimError {
    fn from(err: SyncError) -> Self {
        Self::Sync(err)
    }
}
