//! Trajectories and the normalized ensemble built from them.

use num_complex::Complex64;

use crate::action::discrete_action;
use crate::amplitude::{normalize_amplitudes, phase_factor, Normalization};
use crate::potential::Potential;
use crate::sampling::{NormalSource, TrajectorySampler};
use crate::simulation::SimulationParams;

/// One sampled path with its action and amplitude.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    /// Positions at time slices 0..=N, endpoints pinned.
    pub(crate) positions: Vec<f64>,
    /// Discrete action S.
    pub(crate) action: f64,
    /// exp(−iS/ħ), divided by the ensemble sum once the ensemble is complete.
    pub(crate) amplitude: Complex64,
}

impl Trajectory {
    /// Score `positions` and attach their unnormalized amplitude.
    pub fn score<V: Potential + ?Sized>(positions: Vec<f64>, params: &SimulationParams, potential: &V) -> Self {
        let action = discrete_action(&positions, params.mass, params.dt, potential);
        let amplitude = phase_factor(action, params.hbar);
        Self {
            positions,
            action,
            amplitude,
        }
    }

    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    pub fn action(&self) -> f64 {
        self.action
    }

    pub fn amplitude(&self) -> Complex64 {
        self.amplitude
    }

    /// Number of time steps N (one less than the number of positions).
    pub fn time_steps(&self) -> usize {
        self.positions.len().saturating_sub(1)
    }
}

/// Why an ensemble was (re)generated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Trigger {
    Initial,
    Explicit,
    Pointer,
    Periodic,
    ParameterChange,
}

/// A complete, normalized generation of trajectories.
#[derive(Clone, Debug)]
pub struct Ensemble {
    trajectories: Vec<Trajectory>,
    generation: u64,
    trigger: Trigger,
    normalization: Normalization,
}

impl Ensemble {
    /// Sample, score and normalize `params.path_count` trajectories.
    ///
    /// Trajectories are drawn one after another from `source`, so the result is
    /// a deterministic function of the source state and the parameters.
    pub fn generate<V, N>(
        params: &SimulationParams,
        potential: &V,
        source: &mut N,
        generation: u64,
        trigger: Trigger,
    ) -> Self
    where
        V: Potential + ?Sized,
        N: NormalSource + ?Sized,
    {
        let sampler = TrajectorySampler::new(params.boundaries, params.time_steps, params.noise_scale);

        let mut trajectories: Vec<Trajectory> = Vec::with_capacity(params.path_count);
        for _ in 0..params.path_count {
            let positions = sampler.sample(source);
            trajectories.push(Trajectory::score(positions, params, potential));
        }

        let normalization = normalize_amplitudes(&mut trajectories);

        Self {
            trajectories,
            generation,
            trigger,
            normalization,
        }
    }

    pub fn trajectories(&self) -> &[Trajectory] {
        &self.trajectories
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Trajectory> {
        self.trajectories.iter()
    }

    pub fn len(&self) -> usize {
        self.trajectories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectories.is_empty()
    }

    /// 0 for the ensemble built at construction, +1 per regeneration.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn trigger(&self) -> Trigger {
        self.trigger
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    /// Σ amplitude as currently stored (≈ 1 after a normalized pass).
    pub fn amplitude_sum(&self) -> Complex64 {
        self.trajectories.iter().map(|t| t.amplitude).sum()
    }

    pub fn stats(&self) -> EnsembleStats {
        EnsembleStats::from_ensemble(self)
    }
}

impl<'a> IntoIterator for &'a Ensemble {
    type Item = &'a Trajectory;
    type IntoIter = std::slice::Iter<'a, Trajectory>;

    fn into_iter(self) -> Self::IntoIter {
        self.trajectories.iter()
    }
}

/// Summary numbers for logging and the CLI report.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct EnsembleStats {
    pub path_count: usize,
    pub raw_sum: Complex64,
    pub normalized: bool,
    pub mean_action: f64,
    pub min_action: f64,
    pub max_action: f64,
    /// Largest |amplitude|, the most heavily weighted path.
    pub max_magnitude: f64,
}

impl EnsembleStats {
    fn from_ensemble(ensemble: &Ensemble) -> Self {
        let n = ensemble.len();
        let mut sum_action = 0.0;
        let mut min_action = f64::INFINITY;
        let mut max_action = f64::NEG_INFINITY;
        let mut max_magnitude = 0.0_f64;

        for t in ensemble.iter() {
            sum_action += t.action;
            min_action = min_action.min(t.action);
            max_action = max_action.max(t.action);
            max_magnitude = max_magnitude.max(t.amplitude.norm());
        }

        let mean_action = if n == 0 { 0.0 } else { sum_action / n as f64 };
        if n == 0 {
            min_action = 0.0;
            max_action = 0.0;
        }

        Self {
            path_count: n,
            raw_sum: ensemble.normalization.raw_sum(),
            normalized: ensemble.normalization.is_normalized(),
            mean_action,
            min_action,
            max_action,
            max_magnitude,
        }
    }
}
