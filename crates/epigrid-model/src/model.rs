//! The [`Model`] trait: single-cell integration behind one interface.

use epigrid_core::{ModelError, SirCell};

/// A single-cell epidemic integrator with a fixed step size and step count.
///
/// # Contract
///
/// - `step()` and `step_with_neighbors()` MUST be deterministic: the same
///   cell (and neighbor list) produce identical output.
/// - `&self`: models are stateless between calls; per-run state lives in
///   the grid, not the model.
/// - Neighbor values passed to `step_with_neighbors()` are pre-step values,
///   frozen for the whole call. The model must not assume anything about
///   their ordering beyond what its own coupling rule requires.
///
/// # Object safety
///
/// This trait is object-safe; the simulation driver stores models as
/// `Box<dyn Model>`.
pub trait Model: Send + Sync {
    /// Human-readable name for error reporting.
    fn name(&self) -> &str;

    /// The fixed integration step size in simulated time units.
    fn dt(&self) -> f64;

    /// Total number of steps a full run executes.
    ///
    /// Fixed for the model's lifetime. Every participant in a cooperating
    /// group must agree on this value, or the per-step barrier deadlocks.
    fn num_steps(&self) -> u64;

    /// Advance one cell by exactly one step, ignoring neighbors.
    fn step(&self, cell: SirCell) -> Result<SirCell, ModelError>;

    /// Advance one cell by exactly one step, coupled to its neighbors'
    /// pre-step values.
    ///
    /// The default implementation ignores `neighbors` and delegates to
    /// [`step`](Self::step), so uncoupled models need not implement it.
    /// Implementations MUST reduce to `step()` for an empty neighbor list.
    fn step_with_neighbors(
        &self,
        cell: SirCell,
        neighbors: &[SirCell],
    ) -> Result<SirCell, ModelError> {
        let _ = neighbors;
        self.step(cell)
    }
}
