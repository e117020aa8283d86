//! Process all inputs peripherals over time.

use strider_dsp::{RingFilter, Sample};

use super::debounce::{Buttons, Switches};
use super::snapshot::Snapshot;
use crate::config::Config;

pub const FILTER_CAPACITY: usize = 10;

/// Stateful store of raw inputs.
///
/// This struct turns the raw snapshot into a set of abstracted peripherals.
/// Analog channels get smoothened, buttons and switches debounced.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Store {
    pub x: RingFilter<FILTER_CAPACITY>,
    pub y: RingFilter<FILTER_CAPACITY>,
    pub z: RingFilter<FILTER_CAPACITY>,
    pub potentiometer: RingFilter<FILTER_CAPACITY>,
    pub buttons: Buttons,
    pub switches: Switches,
}

impl Store {
    pub fn new(config: &Config) -> Self {
        Self {
            x: RingFilter::new(),
            y: RingFilter::new(),
            z: RingFilter::new(),
            potentiometer: RingFilter::new(),
            buttons: Buttons::new(config.button_idle, config.button_polls),
            switches: Switches::new(config.switch_idle, config.switch_polls),
        }
    }

    pub fn update(&mut self, snapshot: Snapshot) {
        self.x.write(snapshot.acceleration.x);
        self.y.write(snapshot.acceleration.y);
        self.z.write(snapshot.acceleration.z);
        self.potentiometer.write(snapshot.potentiometer);
        self.buttons.poll(snapshot.buttons);
        self.switches.poll(snapshot.switches);
    }

    /// Smoothened acceleration along the axis perpendicular to the ground.
    pub fn vertical(&self) -> Sample {
        self.z.mean()
    }

    pub fn potentiometer(&self) -> Sample {
        self.potentiometer.mean()
    }
}
