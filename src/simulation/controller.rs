//! Simulation controller: owns the parameters and the current ensemble.
//!
//! Regeneration is synchronous. A new [`Ensemble`] is built off to the side
//! and swapped into the current slot only once it is complete, so readers
//! never see a partially built generation. Snapshots handed out earlier keep
//! the generation they were taken from.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::ensemble::{Ensemble, Trigger};
use crate::potential::{HarmonicOscillator, Potential};
use crate::sampling::{BoundaryConditions, NormalSource, SeededNormal, DEFAULT_SEED};

use super::params::{ParameterError, SimulationParams, Variant};
use super::schedule::{RegenerationClock, RegenerationSchedule};

/// Owns parameters, potential, random source and the current ensemble.
pub struct PathIntegralSimulation<V: Potential = HarmonicOscillator, N: NormalSource = SeededNormal> {
    params: SimulationParams,
    potential: V,
    source: N,
    schedule: RegenerationSchedule,
    clock: RegenerationClock,
    ensemble: Arc<Ensemble>,
    frame_count: u64,
    elapsed: f64,
}

impl PathIntegralSimulation {
    /// Harmonic oscillator, seed 42, desktop cadence.
    pub fn new(params: SimulationParams) -> Result<Self, ParameterError> {
        Self::with_seed(params, DEFAULT_SEED)
    }

    pub fn with_seed(params: SimulationParams, seed: u64) -> Result<Self, ParameterError> {
        Self::with_parts(
            params,
            HarmonicOscillator::default(),
            SeededNormal::new(seed),
            RegenerationSchedule::from_frames(Variant::Desktop.frame_interval()),
        )
    }
}

impl<V: Potential> PathIntegralSimulation<V, SeededNormal> {
    /// Restart the random stream. The current ensemble is kept.
    pub fn reseed(&mut self, seed: u64) {
        debug!(seed, "reseeding random source");
        self.source.reseed(seed);
    }

    pub fn seed(&self) -> u64 {
        self.source.seed()
    }
}

impl<V: Potential, N: NormalSource> PathIntegralSimulation<V, N> {
    /// Validate everything and build generation 0.
    pub fn with_parts(
        params: SimulationParams,
        potential: V,
        mut source: N,
        schedule: RegenerationSchedule,
    ) -> Result<Self, ParameterError> {
        params.validate()?;
        schedule.validate()?;

        let ensemble = Ensemble::generate(&params, &potential, &mut source, 0, Trigger::Initial);
        info!(
            paths = params.path_count,
            time_steps = params.time_steps,
            hbar = params.hbar,
            mass = params.mass,
            dt = params.dt,
            "path integral simulation initialised"
        );

        Ok(Self {
            params,
            potential,
            source,
            schedule,
            clock: RegenerationClock::default(),
            ensemble: Arc::new(ensemble),
            frame_count: 0,
            elapsed: 0.0,
        })
    }

    /// Current ensemble, always complete and consistent.
    pub fn ensemble(&self) -> &Ensemble {
        &self.ensemble
    }

    /// Shared handle to the current ensemble that survives later regenerations.
    pub fn snapshot(&self) -> Arc<Ensemble> {
        Arc::clone(&self.ensemble)
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    pub fn potential(&self) -> &V {
        &self.potential
    }

    pub fn schedule(&self) -> RegenerationSchedule {
        self.schedule
    }

    /// Frames seen by [`tick`](Self::tick).
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Simulated seconds accumulated by [`tick`](Self::tick).
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Replace the periodic cadence. Does not regenerate.
    pub fn set_schedule(&mut self, schedule: RegenerationSchedule) -> Result<(), ParameterError> {
        schedule.validate().map_err(|err| self.rejected(err))?;
        self.schedule = schedule;
        self.clock = RegenerationClock::default();
        Ok(())
    }

    /// Rebuild the ensemble now.
    pub fn regenerate(&mut self) {
        self.rebuild(Trigger::Explicit);
    }

    /// A click or tap from the presentation layer; the position is irrelevant.
    pub fn pointer_event(&mut self, _x: f64, _y: f64) {
        self.rebuild(Trigger::Pointer);
    }

    /// Advance simulated time by `dt` seconds.
    ///
    /// Returns `true` when the periodic schedule fired and a new ensemble
    /// is in place. Negative or non-finite `dt` is ignored.
    pub fn tick(&mut self, dt: f64) -> bool {
        if !dt.is_finite() || dt < 0.0 {
            debug!(dt, "ignoring invalid frame delta");
            return false;
        }

        self.frame_count += 1;
        self.elapsed += dt;

        if self.clock.advance(self.schedule, dt) {
            self.rebuild(Trigger::Periodic);
            true
        } else {
            false
        }
    }

    pub fn set_hbar(&mut self, hbar: f64) -> Result<(), ParameterError> {
        self.update_params(SimulationParams { hbar, ..self.params })
    }

    pub fn set_mass(&mut self, mass: f64) -> Result<(), ParameterError> {
        self.update_params(SimulationParams { mass, ..self.params })
    }

    pub fn set_dt(&mut self, dt: f64) -> Result<(), ParameterError> {
        self.update_params(SimulationParams { dt, ..self.params })
    }

    pub fn set_dx(&mut self, dx: f64) -> Result<(), ParameterError> {
        self.update_params(SimulationParams { dx, ..self.params })
    }

    pub fn set_time_steps(&mut self, time_steps: usize) -> Result<(), ParameterError> {
        self.update_params(SimulationParams { time_steps, ..self.params })
    }

    pub fn set_path_count(&mut self, path_count: usize) -> Result<(), ParameterError> {
        self.update_params(SimulationParams { path_count, ..self.params })
    }

    pub fn set_lattice_size(&mut self, lattice_size: usize) -> Result<(), ParameterError> {
        self.update_params(SimulationParams { lattice_size, ..self.params })
    }

    pub fn set_noise_scale(&mut self, noise_scale: f64) -> Result<(), ParameterError> {
        self.update_params(SimulationParams { noise_scale, ..self.params })
    }

    pub fn set_boundaries(&mut self, start: f64, end: f64) -> Result<(), ParameterError> {
        let boundaries = BoundaryConditions { start, end };
        self.update_params(SimulationParams { boundaries, ..self.params })
    }

    /// Replace every parameter at once; a single regeneration follows.
    pub fn set_params(&mut self, params: SimulationParams) -> Result<(), ParameterError> {
        self.update_params(params)
    }

    pub fn set_potential(&mut self, potential: V) {
        self.potential = potential;
        self.rebuild(Trigger::ParameterChange);
    }

    fn update_params(&mut self, candidate: SimulationParams) -> Result<(), ParameterError> {
        candidate.validate().map_err(|err| self.rejected(err))?;
        self.params = candidate;
        self.rebuild(Trigger::ParameterChange);
        Ok(())
    }

    fn rejected(&self, err: ParameterError) -> ParameterError {
        warn!(%err, generation = self.ensemble.generation(), "parameter update rejected");
        err
    }

    fn rebuild(&mut self, trigger: Trigger) {
        let generation = self.ensemble.generation() + 1;
        let next = Ensemble::generate(&self.params, &self.potential, &mut self.source, generation, trigger);
        debug!(
            generation,
            ?trigger,
            paths = next.len(),
            normalized = next.normalization().is_normalized(),
            "ensemble regenerated"
        );
        self.ensemble = Arc::new(next);
    }
}
