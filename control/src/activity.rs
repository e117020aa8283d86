//! Counters of walked steps and distance.

/// Steps and the distance they cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tally {
    pub steps: u32,
    pub distance_m: u32,
}

impl Tally {
    fn add(&mut self, other: Tally) {
        self.steps = self.steps.saturating_add(other.steps);
        self.distance_m = self.distance_m.saturating_add(other.distance_m);
    }

    fn subtract(&mut self, other: Tally) {
        self.steps = self.steps.saturating_sub(other.steps);
        self.distance_m = self.distance_m.saturating_sub(other.distance_m);
    }

    fn record_step(&mut self, stride_mm: u32) {
        self.steps = self.steps.saturating_add(1);
        let distance_m = u64::from(self.steps) * u64::from(stride_mm) / 1000;
        self.distance_m = u32::try_from(distance_m).unwrap_or(u32::MAX);
    }
}

/// Application state collecting everything the user walked.
///
/// `total` counts since boot or since the last reset, `recent` counts since
/// the goal was last committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Activity {
    pub total: Tally,
    pub recent: Tally,
    stride_mm: u32,
}

impl Activity {
    pub fn new(stride_mm: u32) -> Self {
        Self {
            total: Tally::default(),
            recent: Tally::default(),
            stride_mm,
        }
    }

    pub fn record_step(&mut self) {
        self.total.record_step(self.stride_mm);
        self.recent.record_step(self.stride_mm);
    }

    pub fn add(&mut self, tally: Tally) {
        self.total.add(tally);
        self.recent.add(tally);
    }

    pub fn subtract(&mut self, tally: Tally) {
        self.total.subtract(tally);
        self.recent.subtract(tally);
    }

    pub fn restart_recent(&mut self) {
        self.recent = Tally::default();
    }

    pub fn reset(&mut self) {
        self.total = Tally::default();
        self.recent = Tally::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_step_is_recorded_distance_follows_stride() {
        let mut activity = Activity::new(900);
        for _ in 0..10 {
            activity.record_step();
        }
        assert_eq!(activity.total.steps, 10);
        assert_eq!(activity.total.distance_m, 9);
        assert_eq!(activity.recent, activity.total);
    }

    #[test]
    fn when_recent_is_restarted_total_is_kept() {
        let mut activity = Activity::new(900);
        activity.record_step();
        activity.restart_recent();
        activity.record_step();
        assert_eq!(activity.total.steps, 2);
        assert_eq!(activity.recent.steps, 1);
    }

    #[test]
    fn when_subtracting_more_than_counted_it_saturates_at_zero() {
        let mut activity = Activity::new(900);
        activity.add(Tally {
            steps: 300,
            distance_m: 270,
        });
        activity.subtract(Tally {
            steps: 500,
            distance_m: 450,
        });
        assert_eq!(activity.total, Tally::default());
        assert_eq!(activity.recent, Tally::default());
    }

    #[test]
    fn when_adding_it_affects_both_tallies() {
        let mut activity = Activity::new(900);
        activity.restart_recent();
        activity.add(Tally {
            steps: 100,
            distance_m: 90,
        });
        activity.record_step();
        assert_eq!(activity.total.steps, 101);
        assert_eq!(activity.total.distance_m, 90);
        assert_eq!(activity.recent.steps, 101);
    }

    #[test]
    fn when_reset_everything_is_zeroed() {
        let mut activity = Activity::new(900);
        activity.record_step();
        activity.reset();
        assert_eq!(activity.total, Tally::default());
        assert_eq!(activity.recent, Tally::default());
    }
}
