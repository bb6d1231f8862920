//! Version command implementation

use crate::config::{DEFAULT_DESTINATION, DEFAULT_SOURCE};
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("cfgmigrate {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Defaults:");
    println!("  Source: {DEFAULT_SOURCE}");
    println!("  Destination: {DEFAULT_DESTINATION}");
    println!("  Profile: {}", build_profile());

    Ok(())
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
