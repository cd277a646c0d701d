//! The [`GridSimulation`] driver.
//!
//! One `GridSimulation` instance is one participant's view of a
//! distributed run: it owns the local grid partition, the neighbor
//! adjacency, the model, and this participant's handle into the
//! cooperating group. [`run()`](GridSimulation::run) advances everything
//! in lock-step with the other participants.
//!
//! # Ownership model
//!
//! `GridSimulation` is [`Send`] (can be moved to the thread driving this
//! participant) but not shared: all mutating methods take `&mut self`, and
//! the grid views returned by [`grid()`](GridSimulation::grid) /
//! [`grid_mut()`](GridSimulation::grid_mut) borrow from `self`, so the
//! borrow checker rules out aliasing a run in progress.

use epigrid_grid::{Grid, NeighborMap, UpdateEngine, UpdatePolicy};
use epigrid_model::Model;
use epigrid_sync::ProcessGroup;

use crate::error::SimError;
use crate::record::StepRecord;

/// One participant's simulation driver.
///
/// Created from a boxed [`Model`] and [`ProcessGroup`]; the grid and
/// neighbor map are supplied wholesale by an external partitioning step
/// before [`run()`](GridSimulation::run).
///
/// # Example
///
/// ```
/// use epigrid_engine::GridSimulation;
/// use epigrid_grid::{seed_grid, NeighborMap};
/// use epigrid_model::SirRk4;
/// use epigrid_sync::SoloGroup;
///
/// let model = SirRk4::builder()
///     .beta(0.6)
///     .gamma(0.2)
///     .coupling(0.4)
///     .dt(0.1)
///     .num_steps(50)
///     .build()
///     .unwrap();
///
/// let mut sim = GridSimulation::new(Box::new(model), Box::new(SoloGroup::new()));
/// sim.set_grid(seed_grid(16 * 16, 3, 0.5, 42));
/// sim.set_neighbor_map(NeighborMap::lattice4(16, 16));
///
/// let records = sim.run().unwrap();
/// assert_eq!(records.len(), 50);
/// ```
pub struct GridSimulation {
    model: Box<dyn Model>,
    group: Box<dyn ProcessGroup>,
    grid: Grid,
    neighbors: NeighborMap,
    policy: UpdatePolicy,
    engine: UpdateEngine,
}

impl GridSimulation {
    /// Create a driver for one participant.
    ///
    /// The grid starts empty and the neighbor map unpopulated; both are
    /// expected to be set exactly once before [`run()`](Self::run). The
    /// update policy defaults to [`UpdatePolicy::Coupled`].
    pub fn new(model: Box<dyn Model>, group: Box<dyn ProcessGroup>) -> Self {
        Self {
            model,
            group,
            grid: Grid::new(),
            neighbors: NeighborMap::new(),
            policy: UpdatePolicy::Coupled,
            engine: UpdateEngine::new(),
        }
    }

    /// Replace the local grid wholesale.
    pub fn set_grid(&mut self, grid: Grid) {
        self.grid = grid;
    }

    /// Replace the neighbor adjacency wholesale.
    ///
    /// The map is immutable during a run. Neighbor indices refer to this
    /// participant's own grid; coupling never crosses partitions.
    pub fn set_neighbor_map(&mut self, neighbors: NeighborMap) {
        self.neighbors = neighbors;
    }

    /// Select the update policy for subsequent runs.
    pub fn set_policy(&mut self, policy: UpdatePolicy) {
        self.policy = policy;
    }

    /// Read-only view of the current local grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable view of the current local grid.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Number of cells owned by this participant.
    pub fn local_size(&self) -> usize {
        self.grid.len()
    }

    /// This participant's rank within the cooperating group.
    pub fn rank(&self) -> usize {
        self.group.rank()
    }

    /// Total participant count in the cooperating group.
    pub fn size(&self) -> usize {
        self.group.size()
    }

    /// Run the full simulation: `model.num_steps()` lock-step iterations.
    ///
    /// Each step advances the grid under the active policy, records the
    /// compartment means at `time = step × dt`, and rendezvouses with
    /// every other participant before the next step. All participants
    /// must agree on the step count; a disagreement deadlocks the group
    /// at the barrier.
    ///
    /// Returns the complete record sequence, one entry per step. On error
    /// the run aborts as a whole: the failing step left the grid
    /// untouched, and no partial records are returned.
    ///
    /// # Errors
    ///
    /// - [`SimError::EmptyGrid`] when the local grid has zero cells
    ///   (detected before the first step, so means never divide by zero).
    /// - [`SimError::Step`] when the model fails or produces a non-finite
    ///   cell.
    /// - [`SimError::Sync`] when the group can no longer rendezvous.
    pub fn run(&mut self) -> Result<Vec<StepRecord>, SimError> {
        if self.grid.is_empty() {
            return Err(SimError::EmptyGrid);
        }

        let num_steps = self.model.num_steps();
        let dt = self.model.dt();
        let mut records = Vec::with_capacity(num_steps as usize);

        for step in 0..num_steps {
            self.engine
                .advance(&mut self.grid, &self.neighbors, &*self.model, self.policy)?;

            // The grid is non-empty (checked above) and updates preserve
            // size, so the means always exist.
            let means = self
                .grid
                .compartment_means()
                .ok_or(SimError::EmptyGrid)?;
            records.push(StepRecord::new(step as f64 * dt, means));

            self.group.barrier()?;
        }

        Ok(records)
    }
}

impl std::fmt::Debug for GridSimulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridSimulation")
            .field("model", &self.model.name())
            .field("rank", &self.group.rank())
            .field("size", &self.group.size())
            .field("local_size", &self.grid.len())
            .field("policy", &self.policy)
            .finish()
    }
}
