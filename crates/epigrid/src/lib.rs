//! Epigrid: distributed SIR epidemic simulation over a spatial grid.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all epigrid sub-crates. For most users, adding `epigrid` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use epigrid::prelude::*;
//!
//! // Classical SIR dynamics, RK4-integrated, 40% neighbor coupling.
//! let model = SirRk4::builder()
//!     .beta(0.6)
//!     .gamma(0.2)
//!     .coupling(0.4)
//!     .dt(0.1)
//!     .num_steps(100)
//!     .build()
//!     .unwrap();
//!
//! // A 32x32 partition with three seeded infection sites, coupled
//! // through the lattice's 4-connected adjacency. SoloGroup stands in
//! // for the cooperating-process group in single-process runs.
//! let mut sim = GridSimulation::new(Box::new(model), Box::new(SoloGroup::new()));
//! sim.set_grid(seed_grid(32 * 32, 3, 0.5, 42));
//! sim.set_neighbor_map(NeighborMap::lattice4(32, 32));
//!
//! let records = sim.run().unwrap();
//! assert_eq!(records.len(), 100);
//! assert!(records.last().unwrap().mean_r > 0.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `epigrid-core` | `SirCell` and the error taxonomy |
//! | [`model`] | `epigrid-model` | The `Model` trait and `SirRk4` |
//! | [`grid`] | `epigrid-grid` | Grid store, adjacency, update pass, seeding |
//! | [`sync`] | `epigrid-sync` | Process groups and the rendezvous barrier |
//! | [`engine`] | `epigrid-engine` | The lock-step simulation driver |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Cell type and error taxonomy (`epigrid-core`).
pub use epigrid_core as types;

/// Model trait and the reference SIR/RK4 integrator (`epigrid-model`).
pub use epigrid_model as model;

/// Grid storage, adjacency, and the update pass (`epigrid-grid`).
pub use epigrid_grid as grid;

/// Process-group coordination (`epigrid-sync`).
pub use epigrid_sync as sync;

/// The lock-step simulation driver (`epigrid-engine`).
pub use epigrid_engine as engine;

/// Common imports for typical epigrid usage.
///
/// ```rust
/// use epigrid::prelude::*;
/// ```
pub mod prelude {
    // Cell and errors
    pub use epigrid_core::{Compartment, ModelError, SirCell, StepError, SyncError};

    // Model
    pub use epigrid_model::{Model, SirRk4};

    // Grid
    pub use epigrid_grid::{seed_grid, CompartmentMeans, Grid, NeighborMap, UpdateEngine, UpdatePolicy};

    // Sync
    pub use epigrid_sync::{LocalGroup, ProcessGroup, SoloGroup};

    // Engine
    pub use epigrid_engine::{GridSimulation, SimError, StepRecord};
}
