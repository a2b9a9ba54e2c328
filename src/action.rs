//! Discrete classical action of a trajectory.
//!
//! S = Σₜ (T − V)·Δt with the velocity taken as a backward finite difference
//! (xₜ − xₜ₋₁)/Δt and the potential evaluated at the later point xₜ.

use crate::potential::Potential;

/// Kinetic and potential contributions to the action, summed separately.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ActionTerms {
    /// Σ T·Δt
    pub kinetic: f64,
    /// Σ V·Δt
    pub potential: f64,
}

impl ActionTerms {
    pub fn action(&self) -> f64 {
        self.kinetic - self.potential
    }
}

#[inline]
fn kinetic_energy(mass: f64, dt: f64, x_prev: f64, x: f64) -> f64 {
    let dx = x - x_prev;
    0.5 * mass * dx * dx / (dt * dt)
}

/// Discrete action of `positions`.
///
/// Fewer than two positions give the empty sum 0.0.
pub fn discrete_action<V: Potential + ?Sized>(positions: &[f64], mass: f64, dt: f64, potential: &V) -> f64 {
    let mut action = 0.0;
    for w in positions.windows(2) {
        let kinetic = kinetic_energy(mass, dt, w[0], w[1]);
        let pot = potential.value(w[1]);
        action += (kinetic - pot) * dt;
    }
    action
}

/// Same sums as [`discrete_action`], kept apart for diagnostics.
pub fn action_terms<V: Potential + ?Sized>(positions: &[f64], mass: f64, dt: f64, potential: &V) -> ActionTerms {
    positions.windows(2).fold(ActionTerms::default(), |acc, w| ActionTerms {
        kinetic: acc.kinetic + kinetic_energy(mass, dt, w[0], w[1]) * dt,
        potential: acc.potential + potential.value(w[1]) * dt,
    })
}
