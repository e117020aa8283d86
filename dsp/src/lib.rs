//! Signal processing of raw sensor samples that must run on every control tick.
//!
//! Everything here works with integer samples and allocates nothing. The
//! ring filter smoothens each input channel, the step detector interprets
//! the smoothened vertical acceleration.

#![cfg_attr(not(test), no_std)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]

pub mod math;
pub mod ring_filter;
pub mod step_detector;

pub use ring_filter::{RingFilter, Sample};
pub use step_detector::{StepDetector, StepDetectorConfig};
