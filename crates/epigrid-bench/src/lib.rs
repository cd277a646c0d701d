//! Benchmark profiles and utilities for the epigrid workspace.
//!
//! Provides pre-built simulation profiles shared by the criterion
//! benches:
//!
//! - [`lattice_profile`]: 64x64 lattice (4K cells), three infection
//!   sites, 4-connected coupling
//! - [`stress_profile`]: 200x200 lattice (40K cells) for stress runs

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use epigrid_grid::{seed_grid, Grid, NeighborMap};
use epigrid_model::SirRk4;

/// A ready-to-step benchmark world: model, grid, and adjacency.
pub struct Profile {
    /// The reference model for this profile.
    pub model: SirRk4,
    /// The seeded initial grid.
    pub grid: Grid,
    /// The lattice adjacency.
    pub neighbors: NeighborMap,
}

/// Build the reference profile: 64x64 lattice (4K cells).
///
/// dt = 0.1 with beta = 0.6 keeps the dynamics well inside RK4 stability
/// for any coupling weight.
pub fn lattice_profile(seed: u64) -> Profile {
    profile(64, seed)
}

/// Build the stress profile: 200x200 lattice (40K cells).
pub fn stress_profile(seed: u64) -> Profile {
    profile(200, seed)
}

fn profile(side: usize, seed: u64) -> Profile {
    let model = SirRk4::builder()
        .beta(0.6)
        .gamma(0.2)
        .coupling(0.4)
        .dt(0.1)
        .num_steps(100)
        .build()
        .expect("profile parameters are valid");

    Profile {
        model,
        grid: seed_grid(side * side, 3, 0.5, seed),
        neighbors: NeighborMap::lattice4(side, side),
    }
}
