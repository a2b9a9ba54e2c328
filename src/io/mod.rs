//! IO module - configuration files and ensemble export.

mod config;
mod export;

pub use config::{parse_config, read_config, ConfigError, SimulationConfig};
pub use export::{write_ensemble, write_ensemble_to};
