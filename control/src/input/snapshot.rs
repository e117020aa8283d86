//! Structures used to pass the current state of hardware peripherals.

use strider_dsp::Sample;

use crate::peripherals::{Acceleration, Pin, Sensors};

/// The current state of all peripherals.
///
/// `Snapshot` is meant to be passed from the hardware binding to the control
/// package. It carries raw data only, smoothening and debouncing is done by
/// the `Store`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Snapshot {
    pub acceleration: Acceleration,
    pub potentiometer: Sample,
    /// Electrical levels of UP, DOWN, LEFT and RIGHT.
    pub buttons: [bool; 4],
    /// Electrical levels of the left and right switch.
    pub switches: [bool; 2],
}

impl Snapshot {
    pub fn sample(sensors: &mut impl Sensors) -> Self {
        let acceleration = sensors.read_axis_sample();
        let potentiometer = sensors.read_potentiometer();
        let buttons = Pin::BUTTONS.map(|pin| sensors.read_pin_level(pin));
        let switches = Pin::SWITCHES.map(|pin| sensors.read_pin_level(pin));
        Self {
            acceleration,
            potentiometer,
            buttons,
            switches,
        }
    }
}
