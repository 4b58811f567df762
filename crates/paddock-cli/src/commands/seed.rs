//! Seed command
//!
//! Usage: paddock seed [--db <PATH>]
//!
//! Creates both tables and writes the configured number of synthetic races
//! and matches. Rows that already exist are left alone.

use paddock_api::{open_state, AppConfig};

/// Execute seed command
pub fn execute(config: AppConfig) -> anyhow::Result<()> {
    open_state(&config)?;
    println!("✓ Database ready at {}", config.database.path.display());
    Ok(())
}
