//! Simulation module - parameters, regeneration schedule and the controller.

mod params;
mod schedule;
mod controller;

pub use params::{ParameterError, SimulationParams, Variant, MAX_PATHS, MAX_TIME_STEPS};
pub use schedule::{RegenerationSchedule, REFERENCE_FRAME_SECONDS};
pub use controller::PathIntegralSimulation;
