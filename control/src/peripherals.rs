//! Seams towards the hardware binding.
//!
//! The firmware implements these traits on top of its HAL. Everything in
//! this crate talks to the board only through them.

use strider_dsp::Sample;

/// Pins of all buttons and switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Pin {
    ButtonUp,
    ButtonDown,
    ButtonLeft,
    ButtonRight,
    SwitchLeft,
    SwitchRight,
}

impl Pin {
    pub const BUTTONS: [Pin; 4] = [
        Pin::ButtonUp,
        Pin::ButtonDown,
        Pin::ButtonLeft,
        Pin::ButtonRight,
    ];

    pub const SWITCHES: [Pin; 2] = [Pin::SwitchLeft, Pin::SwitchRight];
}

/// One raw reading of the accelerometer.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Acceleration {
    pub x: Sample,
    pub y: Sample,
    pub z: Sample,
}

pub trait Sensors {
    fn read_axis_sample(&mut self) -> Acceleration;

    fn read_potentiometer(&mut self) -> Sample;

    /// Electrical level of the pin, `true` being high.
    fn read_pin_level(&mut self, pin: Pin) -> bool;
}

/// Text display with 4 rows of 16 characters.
pub trait Display {
    fn draw_line(&mut self, text: &str, column: u8, row: u8);
}
