//! Tunables of the whole control loop, fixed by the integrator.

use strider_dsp::StepDetectorConfig;

use crate::activity::Tally;
use crate::mode::Navigation;

/// Every constant shaping the behaviour of the tracker.
///
/// `Default` matches the board the tracker was first built for. Durations
/// are given in milliseconds and converted to ticks of the control loop.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub tick_rate_hz: u32,
    pub button_polls: u8,
    pub switch_polls: u8,
    /// Electrical level of UP, DOWN, LEFT and RIGHT while released.
    pub button_idle: [bool; 4],
    /// Electrical level of the left and right switch while down.
    pub switch_idle: [bool; 2],
    pub step_detector: StepDetectorConfig,
    pub stride_mm: u32,
    pub long_press_ms: u32,
    pub goal_divisor: f32,
    pub goal_step: u32,
    pub default_goal: u32,
    /// Potentiometer travel ignored while editing the goal.
    pub pot_tolerance: i32,
    pub test_increment: Tally,
    pub test_decrement: Tally,
    pub navigation: Navigation,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_hz: 120,
            button_polls: 3,
            switch_polls: 1,
            button_idle: [false, false, true, true],
            switch_idle: [false, false],
            step_detector: StepDetectorConfig::default(),
            stride_mm: 900,
            long_press_ms: 1000,
            goal_divisor: 20.425,
            goal_step: 100,
            default_goal: 10_000,
            pot_tolerance: 2,
            test_increment: Tally {
                steps: 100,
                distance_m: 90,
            },
            test_decrement: Tally {
                steps: 500,
                distance_m: 450,
            },
            navigation: Navigation::default(),
        }
    }
}

impl Config {
    /// Never returns zero, so that even the shortest duration spans a tick.
    /// Saturates at `u32::MAX`.
    pub fn ms_to_ticks(&self, ms: u32) -> u32 {
        let ticks = u64::from(ms) * u64::from(self.tick_rate_hz) / 1000;
        u32::try_from(ticks).unwrap_or(u32::MAX).max(1)
    }

    pub fn long_press_ticks(&self) -> u32 {
        self.ms_to_ticks(self.long_press_ms)
    }
}
