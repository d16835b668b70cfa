//! Frame pacing for the fixed-rate render loop.
//!
//! The render loop records how long a frame took to draw and sleeps for
//! the remainder of the per-frame budget. Overruns proceed immediately
//! with zero sleep; there is no frame skipping or catch-up, so drift
//! accumulates and is not corrected.
//!
//! Kept as plain microsecond arithmetic so both the embassy loop in the
//! firmware and the std loop in the simulator can consume it.

const MICROS_PER_SECOND: u64 = 1_000_000;

/// Computes per-frame sleep durations for a target frame rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FramePacer {
    frame_budget_micros: u64,
}

impl FramePacer {
    /// Pacer for the given target rate in frames per second.
    pub const fn from_fps(fps: u32) -> Self {
        Self {
            frame_budget_micros: MICROS_PER_SECOND / fps as u64,
        }
    }

    /// The ideal wall-clock duration allotted per render iteration.
    pub const fn frame_budget_micros(&self) -> u64 {
        self.frame_budget_micros
    }

    /// Remaining time to sleep after a frame that took `elapsed_micros`
    /// to render: `max(0, budget - elapsed)`.
    pub const fn sleep_micros(&self, elapsed_micros: u64) -> u64 {
        self.frame_budget_micros.saturating_sub(elapsed_micros)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_budget_from_fps() {
        assert_eq!(FramePacer::from_fps(16).frame_budget_micros(), 62_500);
        assert_eq!(FramePacer::from_fps(1).frame_budget_micros(), 1_000_000);
    }

    #[test]
    fn test_sleeps_exactly_the_remainder() {
        let pacer = FramePacer::from_fps(16);
        assert_eq!(pacer.sleep_micros(12_500), 50_000);
        assert_eq!(pacer.sleep_micros(0), 62_500);
    }

    #[test]
    fn test_overrun_sleeps_zero() {
        let pacer = FramePacer::from_fps(16);
        assert_eq!(pacer.sleep_micros(62_500), 0);
        assert_eq!(pacer.sleep_micros(200_000), 0);
    }
}
