//! The [`UpdateEngine`]: double-buffered per-step grid advancement.
//!
//! Each call to [`UpdateEngine::advance`] produces the next generation of a
//! [`Grid`] from the current one, under one of two policies. Both policies
//! read exclusively from the pre-step buffer and write exclusively into the
//! engine's staging buffer; the buffers are swapped only after every cell
//! has been computed. Consequences:
//!
//! - no iteration ever observes another iteration's output, so the per-cell
//!   loop is iteration-order independent (and safely parallelizable);
//! - any error aborts the pass before the swap, leaving the grid exactly as
//!   it was, so a partially updated grid is never observable.
//!
//! The staging buffer is retained between steps and reused (ping-pong), so
//! steady-state updates allocate nothing.

use epigrid_core::{SirCell, StepError};
use epigrid_model::Model;
use smallvec::SmallVec;

use crate::grid::Grid;
use crate::neighbors::NeighborMap;

/// Which per-cell step the update pass invokes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// `next[i] = model.step(grid[i])`. Pure per-cell map, no coupling.
    Independent,
    /// `next[i] = model.step_with_neighbors(grid[i], gathered)`, where
    /// `gathered` holds the pre-step values at `i`'s mapped neighbor
    /// indices. Out-of-range indices are skipped silently.
    Coupled,
}

/// Advances a [`Grid`] by exactly one step, owning the second buffer.
#[derive(Debug, Default)]
pub struct UpdateEngine {
    staging: Vec<SirCell>,
}

impl UpdateEngine {
    /// Create an engine with an empty staging buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance `grid` by one step under `policy`.
    ///
    /// Runs in O(N + Σ neighbor-list lengths). Does not mutate
    /// `neighbors`. On error the grid is untouched.
    ///
    /// # Errors
    ///
    /// [`StepError::ModelFailed`] when the model fails on a cell;
    /// [`StepError::NonFiniteCell`] when the model output fails the
    /// finiteness sentinel check.
    pub fn advance(
        &mut self,
        grid: &mut Grid,
        neighbors: &NeighborMap,
        model: &dyn Model,
        policy: UpdatePolicy,
    ) -> Result<(), StepError> {
        self.staging.clear();
        self.staging.reserve(grid.len());

        match policy {
            UpdatePolicy::Independent => {
                for (index, &cell) in grid.cells().iter().enumerate() {
                    let next = model
                        .step(cell)
                        .map_err(|reason| StepError::ModelFailed { index, reason })?;
                    Self::check_finite(index, next)?;
                    self.staging.push(next);
                }
            }
            UpdatePolicy::Coupled => {
                for (index, &cell) in grid.cells().iter().enumerate() {
                    // Gather pre-step neighbor values; indices past the end
                    // of the grid are a defined no-op.
                    let mut gathered: SmallVec<[SirCell; 8]> = SmallVec::new();
                    for &nb in neighbors.neighbors_of(index) {
                        if let Some(value) = grid.get(nb) {
                            gathered.push(value);
                        }
                    }
                    let next = model
                        .step_with_neighbors(cell, &gathered)
                        .map_err(|reason| StepError::ModelFailed { index, reason })?;
                    Self::check_finite(index, next)?;
                    self.staging.push(next);
                }
            }
        }

        grid.swap_cells(&mut self.staging);
        Ok(())
    }

    fn check_finite(index: usize, cell: SirCell) -> Result<(), StepError> {
        match cell.first_non_finite() {
            Some(compartment) => Err(StepError::NonFiniteCell { index, compartment }),
            None => Ok(()),
        }
    }
}
