//! Decision making of an activity tracker, from raw inputs to the display.
//!
//! It is meant to run in a firmware on a single fixed-rate loop, with button
//! edges optionally reported from interrupts. Everything talks to the board
//! through the traits in `peripherals`, so it runs on a host as well.
//!
//! Following is the flow of a single tick:
//!
//! ```text
//!   [Sensors] --(Snapshot)--> [Store {filters, debouncers}]
//!                               |                  |
//!                    (vertical) |                  | (edges)
//!                               V                  V
//!                        [StepDetector]     [Controller] <--(Event)-- [ISR]
//!                               |                  |
//!                               +--> {Activity} <--+
//!                                         |
//!                                         | (Screen)
//!                                         V
//!                                     [Display]
//! ```

#![cfg_attr(not(test), no_std)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

pub mod activity;
pub mod config;
pub mod controller;
pub mod events;
pub mod input;
mod log;
pub mod mode;
pub mod peripherals;
pub mod screen;
pub mod tracker;

pub use activity::{Activity, Tally};
pub use config::Config;
pub use controller::Controller;
pub use events::{Event, EventConsumer, EventProducer, EventQueue};
pub use input::Snapshot;
pub use mode::{Direction, Mode, Navigation, Units};
pub use peripherals::{Acceleration, Display, Pin, Sensors};
pub use tracker::Tracker;
