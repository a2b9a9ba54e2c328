//! Periodic regeneration driven by accumulated simulated time.

use super::params::{check_positive, ParameterError};

/// Frame duration the frame-count cadences were tuned against (~60 FPS).
pub const REFERENCE_FRAME_SECONDS: f64 = 0.016;

/// Relative slack when comparing accumulated time against the interval, so
/// that N frames of `interval / N` trigger on the N-th frame despite rounding.
const INTERVAL_TOLERANCE: f64 = 1e-9;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum RegenerationSchedule {
    /// Only explicit requests, pointer events and parameter changes regenerate.
    Manual,
    /// Regenerate whenever `interval` seconds of simulated time have passed.
    Elapsed { interval: f64 },
}

impl RegenerationSchedule {
    /// Cadence of `frames` frames at [`REFERENCE_FRAME_SECONDS`] each.
    pub fn from_frames(frames: u64) -> Self {
        RegenerationSchedule::Elapsed {
            interval: frames as f64 * REFERENCE_FRAME_SECONDS,
        }
    }

    pub fn interval(&self) -> Option<f64> {
        match *self {
            RegenerationSchedule::Manual => None,
            RegenerationSchedule::Elapsed { interval } => Some(interval),
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        match *self {
            RegenerationSchedule::Manual => Ok(()),
            RegenerationSchedule::Elapsed { interval } => check_positive("regeneration_interval", interval),
        }
    }
}

/// Time accumulated towards the next periodic regeneration.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) struct RegenerationClock {
    since_last: f64,
}

impl RegenerationClock {
    /// Add `dt` and report whether the schedule is due. The remainder past
    /// the interval is carried over; several missed intervals collapse into one.
    pub(crate) fn advance(&mut self, schedule: RegenerationSchedule, dt: f64) -> bool {
        let interval = match schedule {
            RegenerationSchedule::Manual => return false,
            RegenerationSchedule::Elapsed { interval } => interval,
        };

        self.since_last += dt;
        if self.since_last < interval * (1.0 - INTERVAL_TOLERANCE) {
            return false;
        }
        self.since_last = (self.since_last - interval).max(0.0) % interval;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_frames() {
        assert_relative_eq!(RegenerationSchedule::from_frames(120).interval().unwrap(), 1.92, epsilon = 1e-12);
        assert_relative_eq!(RegenerationSchedule::from_frames(180).interval().unwrap(), 2.88, epsilon = 1e-12);
        assert_eq!(RegenerationSchedule::Manual.interval(), None);
    }

    #[test]
    fn test_due_on_exact_frame() {
        let schedule = RegenerationSchedule::from_frames(120);
        let mut clock = RegenerationClock::default();
        for frame in 1..=360 {
            let due = clock.advance(schedule, REFERENCE_FRAME_SECONDS);
            assert_eq!(due, frame % 120 == 0, "frame {}", frame);
        }
    }

    #[test]
    fn test_large_step_fires_once_and_keeps_remainder() {
        let schedule = RegenerationSchedule::Elapsed { interval: 1.0 };
        let mut clock = RegenerationClock::default();
        assert!(clock.advance(schedule, 3.5));
        assert!(!clock.advance(schedule, 0.4));
        assert!(clock.advance(schedule, 0.1));
    }

    #[test]
    fn test_manual_never_due() {
        let mut clock = RegenerationClock::default();
        for _ in 0..1000 {
            assert!(!clock.advance(RegenerationSchedule::Manual, 1.0));
        }
    }

    #[test]
    fn test_validate() {
        assert!(RegenerationSchedule::Manual.validate().is_ok());
        assert!(RegenerationSchedule::Elapsed { interval: 0.5 }.validate().is_ok());
        assert!(RegenerationSchedule::Elapsed { interval: 0.0 }.validate().is_err());
        assert!(RegenerationSchedule::Elapsed { interval: -2.0 }.validate().is_err());
    }
}
