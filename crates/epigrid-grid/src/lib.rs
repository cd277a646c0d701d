//! Grid storage and the per-step update pass for epigrid simulations.
//!
//! [`Grid`] is the ordered store of one process's local cells.
//! [`NeighborMap`] couples cell indices for spatially-aware integration.
//! [`UpdateEngine`] advances a grid by exactly one step under an
//! [`UpdatePolicy`], double-buffered so that every neighbor read within a
//! step observes the pre-step grid, never a partially updated one.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod neighbors;
pub mod seed;
pub mod update;

pub use grid::{CompartmentMeans, Grid};
pub use neighbors::NeighborMap;
pub use seed::seed_grid;
pub use update::{UpdateEngine, UpdatePolicy};
