pub mod capability;
pub mod config;
pub mod error;
pub mod roster;
pub mod telemetry;
