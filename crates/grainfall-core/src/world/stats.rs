//! Simulation statistics collection trait

/// Trait for collecting simulation statistics
///
/// Lets the stepping code record what happened without knowing whether a
/// HUD, a test or nobody is listening.
pub trait SimStats {
    /// Record that a pixel was relocated by a movement rule
    fn record_pixel_moved(&mut self);

    /// Record that the brush wrote a cell
    fn record_pixel_painted(&mut self);

    /// Record that a full step was committed
    fn record_step(&mut self);
}

/// A no-op implementation for when stats collection is not needed
#[derive(Default)]
pub struct NoopStats;

impl SimStats for NoopStats {
    fn record_pixel_moved(&mut self) {}
    fn record_pixel_painted(&mut self) {}
    fn record_step(&mut self) {}
}

/// Running totals, handy for HUD overlays and tests
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepCounters {
    pub pixels_moved: u64,
    pub pixels_painted: u64,
    pub steps: u64,
}

impl StepCounters {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl SimStats for StepCounters {
    fn record_pixel_moved(&mut self) {
        self.pixels_moved += 1;
    }

    fn record_pixel_painted(&mut self) {
        self.pixels_painted += 1;
    }

    fn record_step(&mut self) {
        self.steps += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_stats_all_methods() {
        let mut stats = NoopStats;
        for _ in 0..100 {
            stats.record_pixel_moved();
            stats.record_pixel_painted();
            stats.record_step();
        }
    }

    #[test]
    fn test_step_counters() {
        let mut stats = StepCounters::default();

        stats.record_pixel_moved();
        stats.record_pixel_moved();
        stats.record_pixel_painted();
        stats.record_step();
        stats.record_step();
        stats.record_step();

        assert_eq!(stats.pixels_moved, 2);
        assert_eq!(stats.pixels_painted, 1);
        assert_eq!(stats.steps, 3);

        stats.reset();
        assert_eq!(stats, StepCounters::default());
    }
}
