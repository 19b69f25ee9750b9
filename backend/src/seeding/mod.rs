//! Startup wiring for the ladder bootstrap.

mod config;
mod startup;

pub use config::LadderSeedSettings;
pub use startup::{StartupSeedingError, seed_ladders_on_startup};
