//! The [`ProcessGroup`] trait and the trivial single-participant group.

use epigrid_core::SyncError;

/// One participant's handle into a fixed-size group of cooperating
/// processes.
///
/// # Contract
///
/// - `rank()` and `size()` are fixed for the handle's lifetime, with
///   `rank() < size()`.
/// - `barrier()` blocks until every participant in the group has called it
///   for the same rendezvous: barrier k for all participants strictly
///   precedes any participant returning from barrier k and proceeding.
/// - Every participant must call `barrier()` the same number of times;
///   participants disagreeing on the count deadlock the group. No timeout
///   or cancellation is provided; liveness detection belongs to the
///   surrounding execution environment.
///
/// # Object safety
///
/// This trait is object-safe; the simulation driver stores its group as
/// `Box<dyn ProcessGroup>`.
pub trait ProcessGroup: Send {
    /// This participant's identity within the group, in `0..size()`.
    fn rank(&self) -> usize;

    /// Total participant count, fixed at construction.
    fn size(&self) -> usize;

    /// Block until all participants have reached the same rendezvous.
    ///
    /// # Errors
    ///
    /// [`SyncError::GroupDisconnected`] when the group can no longer
    /// rendezvous (a peer's handle was dropped). A stalled-but-live peer
    /// blocks forever instead.
    fn barrier(&self) -> Result<(), SyncError>;
}

/// The trivial group: one participant, rank 0, no peers to wait for.
///
/// Useful for single-process runs and unit tests of the driver loop.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoloGroup;

impl SoloGroup {
    /// Create the single-participant group.
    pub fn new() -> Self {
        Self
    }
}

impl ProcessGroup for SoloGroup {
    fn rank(&self) -> usize {
        0
    }

    fn size(&self) -> usize {
        1
    }

    fn barrier(&self) -> Result<(), SyncError> {
        Ok(())
    }
}
