//! Straight-line-plus-noise trajectory sampler.
//!
//! Interior positions are the linear interpolation between the two fixed
//! endpoints plus an independent Gaussian kick per time slice. There is no
//! Metropolis acceptance and no bridge construction, so the generated paths
//! do not follow the path-integral measure: this is a biased direct sampler
//! meant for visualising interference, not for computing expectation values.

use serde::{Deserialize, Serialize};

use super::traits::NormalSource;

/// Standard deviation multiplier applied to each unit normal variate.
pub const DEFAULT_NOISE_SCALE: f64 = 0.5;

/// Fixed start and end positions shared by every trajectory of an ensemble.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundaryConditions {
    pub start: f64,
    pub end: f64,
}

impl Default for BoundaryConditions {
    fn default() -> Self {
        Self { start: -2.0, end: 2.0 }
    }
}

/// Sampler configuration for one ensemble generation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrajectorySampler {
    pub boundaries: BoundaryConditions,
    pub time_steps: usize,
    pub noise_scale: f64,
}

impl TrajectorySampler {
    pub fn new(boundaries: BoundaryConditions, time_steps: usize, noise_scale: f64) -> Self {
        Self {
            boundaries,
            time_steps,
            noise_scale,
        }
    }

    /// Draw one trajectory of `time_steps + 1` positions.
    ///
    /// Consumes exactly `time_steps - 1` variates from `source`.
    ///
    /// # Panics
    /// If `time_steps` is zero.
    pub fn sample<N: NormalSource + ?Sized>(&self, source: &mut N) -> Vec<f64> {
        assert!(self.time_steps >= 1, "a trajectory needs at least one time step");

        let n = self.time_steps;
        let x0 = self.boundaries.start;
        let xf = self.boundaries.end;

        let mut path = vec![0.0; n + 1];
        path[0] = x0;
        path[n] = xf;

        for t in 1..n {
            let alpha = t as f64 / n as f64;
            path[t] = (1.0 - alpha) * x0 + alpha * xf;
            path[t] += source.next_standard_normal() * self.noise_scale;
        }

        path
    }
}

/// Generate one trajectory from `x0` to `xf` with the default noise scale.
pub fn generate_trajectory<N: NormalSource + ?Sized>(
    x0: f64,
    xf: f64,
    time_steps: usize,
    source: &mut N,
) -> Vec<f64> {
    TrajectorySampler::new(BoundaryConditions { start: x0, end: xf }, time_steps, DEFAULT_NOISE_SCALE)
        .sample(source)
}
