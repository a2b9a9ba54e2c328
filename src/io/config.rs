//! YAML configuration for a simulation run.
//!
//! ```yaml
//! seed: 42
//! variant: embedded
//! regeneration_interval: 2.0   # seconds, 0 for manual only
//! params:
//!   hbar: 1.0
//!   mass: 1.0
//!   time_steps: 40
//! potential:
//!   kind: sombrero
//!   well_position: 1.0
//!   barrier_height: 2.0
//! ```
//!
//! Every key is optional. `params` overrides the variant preset field by field
//! from the crate defaults.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::potential::PotentialKind;
use crate::sampling::DEFAULT_SEED;
use crate::simulation::{ParameterError, RegenerationSchedule, SimulationParams, Variant};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Invalid(#[from] ParameterError),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub seed: u64,
    pub variant: Variant,
    pub params: Option<SimulationParams>,
    pub regeneration_interval: Option<f64>,
    pub potential: PotentialKind,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            variant: Variant::default(),
            params: None,
            regeneration_interval: None,
            potential: PotentialKind::default(),
        }
    }
}

impl SimulationConfig {
    /// Explicit `params` if given, else the variant preset.
    pub fn resolved_params(&self) -> SimulationParams {
        self.params.unwrap_or_else(|| self.variant.params())
    }

    pub fn schedule(&self) -> RegenerationSchedule {
        match self.regeneration_interval {
            None => RegenerationSchedule::from_frames(self.variant.frame_interval()),
            Some(interval) if interval == 0.0 => RegenerationSchedule::Manual,
            Some(interval) => RegenerationSchedule::Elapsed { interval },
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        self.resolved_params().validate()?;
        self.schedule().validate()?;
        self.potential.validate()
    }
}

/// Parse and validate a configuration from YAML text.
pub fn parse_config(yaml: &str) -> Result<SimulationConfig, ConfigError> {
    let config: SimulationConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

/// Read and validate a configuration file.
pub fn read_config<P: AsRef<Path>>(filename: P) -> Result<SimulationConfig, ConfigError> {
    let file = File::open(filename)?;
    let reader = BufReader::new(file);
    let config: SimulationConfig = serde_yaml::from_reader(reader)?;
    config.validate()?;
    Ok(config)
}
