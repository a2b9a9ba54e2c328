//! Traits for trajectory sampling.

/// Source of standard-normal variates N(0, 1).
///
/// The controller draws from one source in strict trajectory order, so any
/// implementation that is deterministic for a given state makes whole
/// ensembles reproducible.
pub trait NormalSource {
    fn next_standard_normal(&mut self) -> f64;
}

