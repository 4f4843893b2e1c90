//! Models and types shared by the `portcheck` crates.
//!
//! * [`network`]: addresses, port tokens and probe results.
//! * [`error`]: the error kinds a run can end with.
//! * [`config`]: run configuration assembled by the command line.

pub mod config;
pub mod error;
pub mod network;
