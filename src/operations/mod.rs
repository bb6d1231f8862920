//! Operations module
//!
//! High-level workflows invoked by the command layer:
//! - MigrateOperation: split device settings out of the combined config
//!
//! The operations coordinate with:
//! - Partitioner: line classification (from partition module)
//! - Transaction: rollback on error (from transaction module)

pub mod migrate;

pub use migrate::{MigrateOperation, MigrateOptions, Outcome};
