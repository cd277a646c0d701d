//! Core types for the epigrid simulation workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! [`SirCell`] value type shared by every other crate and the error
//! taxonomy for the update pass, the model, and the process group.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;

pub use cell::{Compartment, SirCell};
pub use error::{ModelError, StepError, SyncError};
