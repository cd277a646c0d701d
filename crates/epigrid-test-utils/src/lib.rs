//! Test utilities and mock models for epigrid development.
//!
//! Provides [`Model`] implementations with controlled behavior: constant
//! output, identity, scripted failure, and a neighbor-summing model whose
//! output makes pre-step-read violations arithmetically visible.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use epigrid_core::{ModelError, SirCell};
use epigrid_model::Model;

/// A model that returns the same cell for every input.
///
/// Useful for asserting that the update pass visits every cell. The cell
/// may deliberately contain non-finite values to exercise the sentinel
/// check.
pub struct ConstModel {
    output: SirCell,
}

impl ConstModel {
    pub fn new(output: SirCell) -> Self {
        Self { output }
    }
}

impl Model for ConstModel {
    fn name(&self) -> &str {
        "const"
    }
    fn dt(&self) -> f64 {
        1.0
    }
    fn num_steps(&self) -> u64 {
        1
    }
    fn step(&self, _cell: SirCell) -> Result<SirCell, ModelError> {
        Ok(self.output)
    }
}

/// A model that returns its input unchanged, coupled or not.
pub struct IdentityModel;

impl Model for IdentityModel {
    fn name(&self) -> &str {
        "identity"
    }
    fn dt(&self) -> f64 {
        1.0
    }
    fn num_steps(&self) -> u64 {
        1
    }
    fn step(&self, cell: SirCell) -> Result<SirCell, ModelError> {
        Ok(cell)
    }
    fn step_with_neighbors(
        &self,
        cell: SirCell,
        _neighbors: &[SirCell],
    ) -> Result<SirCell, ModelError> {
        Ok(cell)
    }
}

/// A model that fails at a scripted cell index and passes others through.
///
/// The update pass visits cells in index order, so `fail_at` controls how
/// far a pass gets before aborting.
pub struct FailingModel {
    fail_at: usize,
    calls: std::sync::atomic::AtomicUsize,
}

impl FailingModel {
    pub fn new(fail_at: usize) -> Self {
        Self {
            fail_at,
            calls: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Number of step calls made so far (across both variants).
    pub fn calls(&self) -> usize {
        self.calls.load(std::sync::atomic::Ordering::SeqCst)
    }

    fn bump(&self) -> Result<(), ModelError> {
        let call = self
            .calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        if call == self.fail_at {
            Err(ModelError::ExecutionFailed {
                reason: format!("scripted failure at call {call}"),
            })
        } else {
            Ok(())
        }
    }
}

impl Model for FailingModel {
    fn name(&self) -> &str {
        "failing"
    }
    fn dt(&self) -> f64 {
        1.0
    }
    fn num_steps(&self) -> u64 {
        2
    }
    fn step(&self, cell: SirCell) -> Result<SirCell, ModelError> {
        self.bump()?;
        Ok(cell)
    }
    fn step_with_neighbors(
        &self,
        cell: SirCell,
        _neighbors: &[SirCell],
    ) -> Result<SirCell, ModelError> {
        self.step(cell)
    }
}

/// A model returning `cell + Σ neighbors`, per compartment.
///
/// Input-identity sensitive: if any neighbor read leaked a same-step
/// write, the sums come out wrong, so tests can verify the
/// pre-step-read invariant with exact arithmetic on small integers.
pub struct NeighborSumModel;

impl Model for NeighborSumModel {
    fn name(&self) -> &str {
        "neighbor_sum"
    }
    fn dt(&self) -> f64 {
        1.0
    }
    fn num_steps(&self) -> u64 {
        1
    }
    fn step(&self, cell: SirCell) -> Result<SirCell, ModelError> {
        Ok(cell)
    }
    fn step_with_neighbors(
        &self,
        cell: SirCell,
        neighbors: &[SirCell],
    ) -> Result<SirCell, ModelError> {
        let mut s = cell.susceptible();
        let mut i = cell.infected();
        let mut r = cell.recovered();
        for nb in neighbors {
            s += nb.susceptible();
            i += nb.infected();
            r += nb.recovered();
        }
        Ok(SirCell::new(s, i, r))
    }
}

/// Build `n` identical cells.
pub fn uniform_cells(n: usize, cell: SirCell) -> Vec<SirCell> {
    vec![cell; n]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failing_model_fails_once_at_index() {
        let model = FailingModel::new(2);
        let cell = SirCell::default();
        assert!(model.step(cell).is_ok());
        assert!(model.step(cell).is_ok());
        assert!(model.step(cell).is_err());
        assert!(model.step(cell).is_ok());
        assert_eq!(model.calls(), 4);
    }

    #[test]
    fn neighbor_sum_adds_per_compartment() {
        let out = NeighborSumModel
            .step_with_neighbors(
                SirCell::new(1.0, 2.0, 3.0),
                &[SirCell::new(10.0, 20.0, 30.0), SirCell::new(100.0, 200.0, 300.0)],
            )
            .unwrap();
        assert_eq!(out, SirCell::new(111.0, 222.0, 333.0));
    }
}
