//! Path Integral - Monte Carlo trajectory ensembles for 1D quantum mechanics
//!
//! This crate samples discretized particle trajectories between two fixed
//! points, scores each one with its classical action S, assigns the complex
//! amplitude exp(−iS/ħ) and normalizes the ensemble so the amplitudes sum to
//! one. A presentation layer reads the ensemble and draws it; this crate does
//! no rendering.

pub mod potential;
pub mod sampling;
pub mod action;
pub mod amplitude;
pub mod ensemble;
pub mod simulation;
pub mod io;

// Re-export commonly used types at crate root
pub use potential::{Potential, HarmonicOscillator, FreeParticle, Sombrero, PotentialKind};
pub use sampling::{NormalSource, SeededNormal, ReplayNormals, BoundaryConditions, TrajectorySampler, generate_trajectory, DEFAULT_SEED};
pub use action::{discrete_action, action_terms, ActionTerms};
pub use amplitude::{phase_factor, normalize_amplitudes, Normalization, DEGENERATE_SUM_EPSILON};
pub use ensemble::{Trajectory, Ensemble, EnsembleStats, Trigger};
pub use simulation::{PathIntegralSimulation, SimulationParams, ParameterError, RegenerationSchedule, Variant, MAX_PATHS, MAX_TIME_STEPS};
pub use io::{read_config, parse_config, write_ensemble, ConfigError, SimulationConfig};
