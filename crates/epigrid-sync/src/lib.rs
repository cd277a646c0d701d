//! Process-group coordination for epigrid simulations.
//!
//! The simulation driver treats its cooperating group as an injected
//! [`ProcessGroup`], never ambient global state, so a run can be wired to
//! a real multi-process communicator, to the in-process [`LocalGroup`], or
//! to the trivial [`SoloGroup`] interchangeably. The only collective
//! primitive is [`barrier()`](ProcessGroup::barrier): a pure rendezvous, no
//! data moves.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod group;
pub mod local;

pub use group::{ProcessGroup, SoloGroup};
pub use local::LocalGroup;
