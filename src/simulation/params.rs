//! Simulation parameters, presets and their validation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sampling::{BoundaryConditions, DEFAULT_NOISE_SCALE};

/// Upper bound on the ensemble size.
pub const MAX_PATHS: usize = 2000;

/// Upper bound on the time-slice count of a single trajectory.
pub const MAX_TIME_STEPS: usize = 10_000;

/// A parameter update that was refused. The previous value stays in effect.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    #[error("invalid parameter `{name}`: {value} (must be {requirement})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

fn invalid(name: &'static str, value: f64, requirement: &'static str) -> ParameterError {
    ParameterError::InvalidParameter {
        name,
        value,
        requirement,
    }
}

pub(crate) fn check_positive(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(name, value, "finite and > 0"))
    }
}

fn check_non_negative(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(name, value, "finite and >= 0"))
    }
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid(name, value, "finite"))
    }
}

fn check_count(name: &'static str, value: usize) -> Result<(), ParameterError> {
    if value >= 1 {
        Ok(())
    } else {
        Err(invalid(name, value as f64, ">= 1"))
    }
}

/// Tunables of the sampler and the action evaluator.
///
/// `dx` and `lattice_size` are informational: neither the sampler nor the
/// evaluator reads them, but changing them still regenerates the ensemble.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParams {
    /// Reduced Planck constant ħ
    pub hbar: f64,
    pub mass: f64,
    /// Time-step duration Δt
    pub dt: f64,
    /// Spatial unit Δx
    pub dx: f64,
    /// Number of time steps N; trajectories hold N + 1 positions
    pub time_steps: usize,
    /// Ensemble size, at most [`MAX_PATHS`]
    pub path_count: usize,
    pub lattice_size: usize,
    /// Standard deviation of the per-slice Gaussian kick
    pub noise_scale: f64,
    pub boundaries: BoundaryConditions,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            hbar: 1.0,
            mass: 1.0,
            dt: 0.1,
            dx: 0.1,
            time_steps: 50,
            path_count: 1000,
            lattice_size: 100,
            noise_scale: DEFAULT_NOISE_SCALE,
            boundaries: BoundaryConditions::default(),
        }
    }
}

impl SimulationParams {
    pub fn validate(&self) -> Result<(), ParameterError> {
        check_positive("hbar", self.hbar)?;
        check_positive("mass", self.mass)?;
        check_positive("dt", self.dt)?;
        check_positive("dx", self.dx)?;
        check_count("time_steps", self.time_steps)?;
        if self.time_steps > MAX_TIME_STEPS {
            return Err(invalid("time_steps", self.time_steps as f64, "<= 10000"));
        }
        check_count("path_count", self.path_count)?;
        if self.path_count > MAX_PATHS {
            return Err(invalid("path_count", self.path_count as f64, "<= 2000"));
        }
        check_count("lattice_size", self.lattice_size)?;
        check_non_negative("noise_scale", self.noise_scale)?;
        check_finite("boundaries.start", self.boundaries.start)?;
        check_finite("boundaries.end", self.boundaries.end)?;
        Ok(())
    }
}

/// Preset matching one of the two front ends of the visualiser.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Native window: 1000 paths, regenerate every 120 frames.
    #[default]
    Desktop,
    /// Browser canvas: 500 paths, regenerate every 180 frames.
    Embedded,
}

impl Variant {
    pub fn params(self) -> SimulationParams {
        match self {
            Variant::Desktop => SimulationParams::default(),
            Variant::Embedded => SimulationParams {
                path_count: 500,
                ..SimulationParams::default()
            },
        }
    }

    /// Frames between periodic regenerations.
    pub fn frame_interval(self) -> u64 {
        match self {
            Variant::Desktop => 120,
            Variant::Embedded => 180,
        }
    }
}
