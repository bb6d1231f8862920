//! Command implementations for cfgmigrate CLI

pub mod completions;
pub mod helpers;
pub mod migrate;
pub mod split;
pub mod version;
