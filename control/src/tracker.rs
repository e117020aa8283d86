//! The control loop composing all the components.

use strider_dsp::{StepDetector, StepDetectorConfig};

use crate::activity::Activity;
use crate::config::Config;
use crate::controller::Controller;
use crate::events::{Event, EventConsumer};
use crate::input::{Button, Position, Snapshot, Store, Switch};
use crate::log;
use crate::peripherals::Display;

/// Owner of all the state of the tracker.
///
/// Call `tick` at the configured tick rate with a fresh snapshot. If button
/// edges are detected in interrupts instead, call `drain` right before.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Tracker {
    store: Store,
    detector_config: StepDetectorConfig,
    /// Armed once the vertical filter is full.
    detector: Option<StepDetector>,
    controller: Controller,
    activity: Activity,
    test_mode: bool,
}

impl Tracker {
    /// The first snapshot only seeds the filters.
    pub fn new(config: Config, first: Snapshot) -> Self {
        let mut store = Store::new(&config);
        store.update(first);
        let test_mode = store.switches.position(Switch::Right) == Position::Up;
        Self {
            store,
            detector_config: config.step_detector,
            detector: None,
            controller: Controller::new(config),
            activity: Activity::new(config.stride_mm),
            test_mode,
        }
    }

    pub fn tick(&mut self, snapshot: Snapshot, display: &mut impl Display) {
        self.store.update(snapshot);
        self.detect_step();

        self.update_test_mode();

        for button in Button::ALL {
            if let Some(edge) = self.store.buttons.check(button) {
                self.controller
                    .handle(Event { button, edge }, self.test_mode, &mut self.activity);
            }
        }

        self.controller
            .tick(self.store.potentiometer(), &mut self.activity);

        if self.controller.take_redraw() {
            self.render(display);
        }
    }

    /// Handle all button edges reported from interrupts.
    pub fn drain(&mut self, consumer: &mut EventConsumer<'_>) {
        while let Some(event) = consumer.dequeue() {
            self.controller
                .handle(event, self.test_mode, &mut self.activity);
        }
    }

    pub fn render(&self, display: &mut impl Display) {
        let screen = self.controller.screen(&self.activity);
        for (row, line) in screen.lines().iter().enumerate() {
            display.draw_line(line.as_str(), 0, row as u8);
        }
    }

    pub fn activity(&self) -> &Activity {
        &self.activity
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn is_detecting_steps(&self) -> bool {
        self.detector.is_some()
    }

    /// The zeroed slots of a filling filter would look like a slope, so the
    /// detector is seeded with the first mean of a full filter.
    fn detect_step(&mut self) {
        let vertical = self.store.vertical();
        if let Some(detector) = self.detector.as_mut() {
            if detector.process(vertical) {
                self.activity.record_step();
                self.controller.activity_changed();
            }
        } else if self.store.z.is_full() {
            log::info!("Arming step detector at vertical={:?}", vertical);
            self.detector = Some(StepDetector::new(self.detector_config, vertical));
        }
    }

    fn update_test_mode(&mut self) {
        let test_mode = self.store.switches.position(Switch::Right) == Position::Up;
        if test_mode != self.test_mode {
            log::info!("Setting test mode={:?}", test_mode);
            self.test_mode = test_mode;
        }
    }
}
