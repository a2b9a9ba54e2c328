//! Sampling module - random sources and the trajectory sampler.

mod traits;
mod noise;
mod trajectory;

pub use traits::NormalSource;
pub use noise::{SeededNormal, ReplayNormals, DEFAULT_SEED};
pub use trajectory::{BoundaryConditions, TrajectorySampler, generate_trajectory, DEFAULT_NOISE_SCALE};
