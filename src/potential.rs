//! One-dimensional potentials V(x) used by the action evaluator.
//!
//! Any `Fn(f64) -> f64` is a potential, so callers can plug in a closure
//! without touching the sampler or the scorer.

use serde::{Deserialize, Serialize};

use crate::simulation::ParameterError;

/// A pure, total map from position to potential energy.
pub trait Potential {
    fn value(&self, x: f64) -> f64;
}

impl<F> Potential for F
where
    F: Fn(f64) -> f64,
{
    #[inline]
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

/// Harmonic oscillator V(x) = ½ω²x² (unit mass folded into ω).
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HarmonicOscillator {
    pub omega: f64,
}

impl Default for HarmonicOscillator {
    fn default() -> Self {
        Self { omega: 1.0 }
    }
}

impl Potential for HarmonicOscillator {
    #[inline]
    fn value(&self, x: f64) -> f64 {
        0.5 * self.omega * self.omega * x * x
    }
}

/// V(x) = 0 everywhere.
#[derive(Copy, Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FreeParticle;

impl Potential for FreeParticle {
    #[inline]
    fn value(&self, _x: f64) -> f64 {
        0.0
    }
}

/// Sombrero (double-well) potential V(x) = h/a⁴ · (x² − a²)²
///
/// Minima sit at x = ±a with V = 0, the barrier at x = 0 has height h.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sombrero {
    pub well_position: f64,
    pub barrier_height: f64,
}

impl Potential for Sombrero {
    #[inline]
    fn value(&self, x: f64) -> f64 {
        let a2 = self.well_position * self.well_position;
        let lambda = self.barrier_height / (a2 * a2);
        let d = x * x - a2;
        lambda * d * d
    }
}

/// Potential selectable from a configuration file.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PotentialKind {
    Harmonic { omega: f64 },
    Free,
    Sombrero { well_position: f64, barrier_height: f64 },
}

impl Default for PotentialKind {
    fn default() -> Self {
        PotentialKind::Harmonic { omega: 1.0 }
    }
}

impl PotentialKind {
    /// Reject parameters for which V(x) would not be finite.
    pub fn validate(&self) -> Result<(), ParameterError> {
        match *self {
            PotentialKind::Harmonic { omega } => {
                require("potential.omega", omega, omega.is_finite(), "finite")
            }
            PotentialKind::Free => Ok(()),
            PotentialKind::Sombrero { well_position, barrier_height } => {
                require(
                    "potential.well_position",
                    well_position,
                    well_position.is_finite() && well_position != 0.0,
                    "finite and non-zero",
                )?;
                require(
                    "potential.barrier_height",
                    barrier_height,
                    barrier_height.is_finite(),
                    "finite",
                )
            }
        }
    }
}

fn require(
    name: &'static str,
    value: f64,
    ok: bool,
    requirement: &'static str,
) -> Result<(), ParameterError> {
    if ok {
        Ok(())
    } else {
        Err(ParameterError::InvalidParameter { name, value, requirement })
    }
}

impl Potential for PotentialKind {
    fn value(&self, x: f64) -> f64 {
        match *self {
            PotentialKind::Harmonic { omega } => HarmonicOscillator { omega }.value(x),
            PotentialKind::Free => FreeParticle.value(x),
            PotentialKind::Sombrero { well_position, barrier_height } => Sombrero {
                well_position,
                barrier_height,
            }
            .value(x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_harmonic_is_half_x_squared() {
        let v = HarmonicOscillator::default();
        for &x in &[-3.0, -2.0, -0.5, 0.0, 0.25, 2.0] {
            assert_eq!(v.value(x), 0.5 * x * x);
        }
    }

    #[test]
    fn test_closure_is_a_potential() {
        let quartic = |x: f64| x.powi(4);
        assert_relative_eq!(quartic.value(2.0), 16.0);
    }

    #[test]
    fn test_sombrero_minima_and_barrier() {
        let v = Sombrero { well_position: 1.0, barrier_height: 2.0 };
        assert_relative_eq!(v.value(1.0), 0.0);
        assert_relative_eq!(v.value(-1.0), 0.0);
        assert_relative_eq!(v.value(0.0), 2.0);
    }

    #[test]
    fn test_potential_kind_dispatch() {
        let harmonic = PotentialKind::default();
        assert_relative_eq!(harmonic.value(2.0), 2.0);
        assert_eq!(PotentialKind::Free.value(5.0), 0.0);
    }

    #[test]
    fn test_potential_kind_validate() {
        assert!(PotentialKind::default().validate().is_ok());
        assert!(PotentialKind::Free.validate().is_ok());
        let mirrored = PotentialKind::Sombrero { well_position: -1.0, barrier_height: 2.0 };
        assert!(mirrored.validate().is_ok());

        let flat_wells = PotentialKind::Sombrero { well_position: 0.0, barrier_height: 1.0 };
        match flat_wells.validate() {
            Err(ParameterError::InvalidParameter { name, .. }) => {
                assert_eq!(name, "potential.well_position")
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(PotentialKind::Harmonic { omega: f64::NAN }.validate().is_err());
        assert!(PotentialKind::Sombrero { well_position: 1.0, barrier_height: f64::INFINITY }
            .validate()
            .is_err());
    }

    #[test]
    fn test_potential_kind_from_yaml() {
        let yaml = "kind: sombrero\nwell_position: 1.5\nbarrier_height: 0.5\n";
        let kind: PotentialKind = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(kind, PotentialKind::Sombrero { well_position: 1.5, barrier_height: 0.5 });
    }
}
