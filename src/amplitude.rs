//! Complex amplitudes exp(−iS/ħ) and ensemble normalization.

use num_complex::Complex64;

use crate::ensemble::Trajectory;

/// Below this magnitude the raw amplitude sum is treated as total destructive
/// interference and normalization is skipped.
pub const DEGENERATE_SUM_EPSILON: f64 = 1e-10;

/// Pure phase factor exp(i·(−S/ħ)), unit magnitude.
#[inline]
pub fn phase_factor(action: f64, hbar: f64) -> Complex64 {
    Complex64::new(0.0, -action / hbar).exp()
}

/// What the normalization pass did to an ensemble.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Normalization {
    /// Every amplitude was divided by `raw_sum`.
    Normalized { raw_sum: Complex64 },
    /// |raw_sum| ≤ [`DEGENERATE_SUM_EPSILON`]; amplitudes left as raw phases.
    Skipped { raw_sum: Complex64 },
}

impl Normalization {
    /// Σ amplitude before the pass.
    pub fn raw_sum(&self) -> Complex64 {
        match *self {
            Normalization::Normalized { raw_sum } | Normalization::Skipped { raw_sum } => raw_sum,
        }
    }

    pub fn is_normalized(&self) -> bool {
        matches!(self, Normalization::Normalized { .. })
    }
}

/// Rescale every amplitude by the inverse of their sum.
///
/// Magnitudes then carry each path's relative weight while phases are kept.
/// A near-zero sum leaves the amplitudes untouched rather than blowing them up.
pub fn normalize_amplitudes(trajectories: &mut [Trajectory]) -> Normalization {
    let raw_sum: Complex64 = trajectories.iter().map(|t| t.amplitude).sum();

    if raw_sum.norm() > DEGENERATE_SUM_EPSILON {
        for t in trajectories.iter_mut() {
            t.amplitude /= raw_sum;
        }
        Normalization::Normalized { raw_sum }
    } else {
        Normalization::Skipped { raw_sum }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn with_amplitude(amplitude: Complex64) -> Trajectory {
        Trajectory {
            positions: vec![-2.0, 2.0],
            action: 0.0,
            amplitude,
        }
    }

    #[test]
    fn test_phase_factor_unit_magnitude() {
        for &s in &[-1e3, -3.7, 0.0, 0.5, 79.8, 1e6] {
            for &hbar in &[0.1, 1.0, 2.5] {
                assert_relative_eq!(phase_factor(s, hbar).norm(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_phase_factor_sign() {
        let a = phase_factor(PI / 2.0, 1.0);
        assert_relative_eq!(a.re, 0.0, epsilon = 1e-12);
        assert_relative_eq!(a.im, -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalized_sum_has_unit_magnitude() {
        let mut paths: Vec<Trajectory> = [0.3, 1.1, -0.7, 2.9, 0.05]
            .iter()
            .map(|&s| with_amplitude(phase_factor(s, 1.0)))
            .collect();
        let outcome = normalize_amplitudes(&mut paths);
        assert!(outcome.is_normalized());

        let sum: Complex64 = paths.iter().map(|t| t.amplitude).sum();
        assert_relative_eq!(sum.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(sum.re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_normalization_preserves_relative_phase() {
        let mut paths = vec![
            with_amplitude(phase_factor(0.2, 1.0)),
            with_amplitude(phase_factor(1.0, 1.0)),
        ];
        let before = paths[0].amplitude / paths[1].amplitude;
        normalize_amplitudes(&mut paths);
        let after = paths[0].amplitude / paths[1].amplitude;
        assert_relative_eq!(before.re, after.re, epsilon = 1e-12);
        assert_relative_eq!(before.im, after.im, epsilon = 1e-12);
    }

    #[test]
    fn test_singleton_normalizes_to_one() {
        let mut paths = vec![with_amplitude(phase_factor(79.8, 1.0))];
        normalize_amplitudes(&mut paths);
        assert_eq!(paths[0].amplitude, Complex64::new(1.0, 0.0));
        assert_eq!(paths[0].amplitude.arg(), 0.0);
    }

    #[test]
    fn test_cancelling_sum_is_skipped() {
        let plus = Complex64::new(1.0, 0.0);
        let minus = Complex64::new(-1.0, 0.0);
        let mut paths = vec![with_amplitude(plus), with_amplitude(minus)];

        let outcome = normalize_amplitudes(&mut paths);
        assert_eq!(outcome, Normalization::Skipped { raw_sum: Complex64::new(0.0, 0.0) });
        assert_eq!(paths[0].amplitude, plus);
        assert_eq!(paths[1].amplitude, minus);
    }

    #[test]
    fn test_just_above_epsilon_is_normalized() {
        let tiny = Complex64::new(2.0 * DEGENERATE_SUM_EPSILON, 0.0);
        let mut paths = vec![with_amplitude(tiny)];
        assert!(normalize_amplitudes(&mut paths).is_normalized());
        assert_relative_eq!(paths[0].amplitude.re, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_is_skipped() {
        let outcome = normalize_amplitudes(&mut []);
        assert!(!outcome.is_normalized());
        assert_eq!(outcome.raw_sum(), Complex64::new(0.0, 0.0));
    }
}
