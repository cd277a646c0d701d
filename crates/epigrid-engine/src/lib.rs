//! The simulation driver for epigrid runs.
//!
//! [`GridSimulation`] owns one process's share of the grid and advances it
//! in lock-step with every other participant in its
//! [`ProcessGroup`](epigrid_sync::ProcessGroup): update the grid, record
//! the per-step compartment means, rendezvous at the barrier, repeat for
//! the model's configured step count. [`run()`](GridSimulation::run)
//! returns the complete per-step time series or fails the whole run,
//! never a partial result.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod record;
pub mod sim;

pub use error::SimError;
pub use record::StepRecord;
pub use sim::GridSimulation;
