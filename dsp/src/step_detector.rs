//! Detect steps in the smoothened vertical acceleration.

use crate::ring_filter::Sample;

/// Constants shaping the adaptive threshold.
///
/// The threshold for a dip to count as a step is
/// `sensitivity / ticks_since_last_step + floor`. Right after a step the
/// dip must be deep, later on even a shallow one qualifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepDetectorConfig {
    pub sensitivity: u32,
    pub floor: u32,
}

impl Default for StepDetectorConfig {
    fn default() -> Self {
        Self {
            sensitivity: 500,
            floor: 3,
        }
    }
}

/// Adaptive peak detector.
///
/// Call `process` with every smoothened sample. It returns true when the
/// signal dropped from its running maximum by at least the current
/// threshold, in which case the running maximum restarts from the sample.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StepDetector {
    config: StepDetectorConfig,
    running_max: Sample,
    last_step: u32,
    tick: u32,
}

impl StepDetector {
    /// The first sample only seeds the running maximum, it is never
    /// evaluated as a step.
    ///
    /// # Panics
    ///
    /// Panics if `config.floor` is zero. A constant signal would otherwise
    /// be detected as a step once enough time passed.
    pub fn new(config: StepDetectorConfig, first_sample: Sample) -> Self {
        assert!(config.floor > 0, "Step threshold floor must be positive.");
        Self {
            config,
            running_max: first_sample,
            last_step: 0,
            tick: 1,
        }
    }

    /// Threshold that the next processed sample will be compared against.
    pub fn threshold(&self) -> u32 {
        let elapsed = self.tick.wrapping_sub(self.last_step).max(1);
        self.config.sensitivity / elapsed + self.config.floor
    }

    pub fn process(&mut self, sample: Sample) -> bool {
        let drop = i64::from(self.running_max) - i64::from(sample);
        let stepped = drop >= i64::from(self.threshold());

        if stepped {
            self.last_step = self.tick;
            self.running_max = sample;
        } else if sample > self.running_max {
            self.running_max = sample;
        }

        self.tick = self.tick.wrapping_add(1);

        stepped
    }

    pub fn running_max(&self) -> Sample {
        self.running_max
    }

    pub fn last_step(&self) -> u32 {
        self.last_step
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn sawtooth(t: u32) -> Sample {
        (t % 5) as Sample * 5
    }

    fn count_steps(detector: &mut StepDetector, signal: impl Iterator<Item = Sample>) -> usize {
        signal.filter(|x| detector.process(*x)).count()
    }

    #[test]
    fn when_constant_signal_is_given_it_detects_no_steps() {
        let mut detector = StepDetector::new(StepDetectorConfig::default(), 100);
        assert_eq!(count_steps(&mut detector, (0..5000).map(|_| 100)), 0);
    }

    #[test]
    fn when_negative_constant_signal_is_given_it_detects_no_steps() {
        let mut detector = StepDetector::new(StepDetectorConfig::default(), -200);
        assert_eq!(count_steps(&mut detector, (0..5000).map(|_| -200)), 0);
    }

    #[test]
    fn when_sawtooth_dips_past_threshold_it_detects_one_step_per_period() {
        let config = StepDetectorConfig {
            sensitivity: 50,
            floor: 3,
        };
        let mut detector = StepDetector::new(config, 0);
        assert_eq!(count_steps(&mut detector, (1..=50).map(sawtooth)), 10);
        assert_eq!(detector.last_step(), 50);
    }

    #[test]
    fn when_steps_come_too_fast_it_ignores_them_until_threshold_relaxes() {
        let mut detector = StepDetector::new(StepDetectorConfig::default(), 0);
        let steps: Vec<u32> = (1..=50)
            .filter(|t| detector.process(sawtooth(*t)))
            .collect();
        assert_eq!(steps, vec![30]);
    }

    #[test]
    fn when_step_is_detected_running_max_restarts_from_the_sample() {
        let config = StepDetectorConfig {
            sensitivity: 50,
            floor: 3,
        };
        let mut detector = StepDetector::new(config, 0);
        for t in 1..=4 {
            detector.process(sawtooth(t));
        }
        assert_eq!(detector.running_max(), 20);
        assert!(detector.process(-1));
        assert_eq!(detector.running_max(), -1);
    }

    #[test]
    fn when_noise_stays_below_floor_it_detects_no_steps() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut detector = StepDetector::new(StepDetectorConfig::default(), 100);
        let noise = (0..10_000).map(|_| 100 + rng.gen_range(-1..=1));
        assert_eq!(count_steps(&mut detector, noise), 0);
    }

    #[test]
    fn when_time_passes_without_step_threshold_decreases() {
        let mut detector = StepDetector::new(StepDetectorConfig::default(), 0);
        assert_eq!(detector.threshold(), 503);
        for _ in 0..9 {
            detector.process(0);
        }
        assert_eq!(detector.threshold(), 53);
        for _ in 0..1000 {
            detector.process(0);
        }
        assert_eq!(detector.threshold(), 3);
    }

    #[test]
    fn when_first_sample_is_processed_its_index_is_one() {
        let mut detector = StepDetector::new(StepDetectorConfig::default(), 0);
        assert_eq!(detector.tick(), 1);
        detector.process(0);
        assert_eq!(detector.tick(), 2);
    }

    #[test]
    #[should_panic]
    fn initialize_detector_with_zero_floor() {
        let config = StepDetectorConfig {
            sensitivity: 500,
            floor: 0,
        };
        let _detector = StepDetector::new(config, 0);
    }

    proptest! {
        #[test]
        fn constant_signal_never_registers_a_step(
            level in -100_000i32..100_000,
            sensitivity in 0u32..10_000,
            floor in 1u32..100,
            length in 0usize..3000,
        ) {
            let config = StepDetectorConfig { sensitivity, floor };
            let mut detector = StepDetector::new(config, level);
            prop_assert_eq!(count_steps(&mut detector, (0..length).map(|_| level)), 0);
        }
    }
}
