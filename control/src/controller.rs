//! React to user input by changing modes and adjusting the activity.

#[allow(unused_imports)]
use micromath::F32Ext;

use strider_dsp::Sample;

use crate::activity::Activity;
use crate::config::Config;
use crate::events::Event;
use crate::input::{Button, Edge, LongPress};
use crate::log;
use crate::mode::{Direction, Mode, Units};
use crate::screen::Screen;

/// State machine over display modes.
///
/// Feed it with button edges through `handle` and with the smoothened
/// potentiometer through `tick`, once per control cycle. Whenever something
/// visible changes, `take_redraw` returns true once.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controller {
    config: Config,
    mode: Mode,
    units: Units,
    goal: u32,
    displayed_goal: u32,
    last_potentiometer: Option<Sample>,
    long_press: LongPress,
    redraw: bool,
}

impl Controller {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            mode: Mode::BOOT,
            units: Units::default(),
            goal: config.default_goal,
            displayed_goal: config.default_goal,
            last_potentiometer: None,
            long_press: LongPress::default(),
            redraw: true,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn units(&self) -> Units {
        self.units
    }

    pub fn goal(&self) -> u32 {
        self.goal
    }

    pub fn displayed_goal(&self) -> u32 {
        self.displayed_goal
    }

    pub fn handle(&mut self, event: Event, test_mode: bool, activity: &mut Activity) {
        match (event.button, event.edge) {
            (Button::Left, Edge::Pushed) => self.navigate(Direction::Left),
            (Button::Right, Edge::Pushed) => self.navigate(Direction::Right),
            (Button::Up, Edge::Pushed) => {
                if self.mode.is_editing_goal() {
                    return;
                }
                if test_mode {
                    log::info!("Adding test activity");
                    activity.add(self.config.test_increment);
                    self.activity_changed();
                } else {
                    self.units = self.units.toggled();
                    log::info!("Switching units={:?}", self.units);
                    self.redraw = true;
                }
            }
            (Button::Down, Edge::Pushed) => {
                self.long_press.push();
                if test_mode {
                    log::info!("Subtracting test activity");
                    activity.subtract(self.config.test_decrement);
                    self.activity_changed();
                } else if self.mode.is_editing_goal() {
                    self.goal = self.displayed_goal;
                    log::info!("Setting goal={:?}", self.goal);
                    activity.restart_recent();
                }
            }
            (Button::Down, Edge::Released) => self.long_press.release(),
            _ => (),
        }
    }

    pub fn tick(&mut self, potentiometer: Sample, activity: &mut Activity) {
        if self.long_press.tick(self.config.long_press_ticks()) && !self.mode.is_editing_goal() {
            log::info!("Resetting activity");
            activity.reset();
            self.redraw = true;
        }

        if self.mode.is_editing_goal() {
            let tolerance = i64::from(self.config.pot_tolerance);
            let moved = self.last_potentiometer.map_or(true, |last| {
                (i64::from(potentiometer) - i64::from(last)).abs() > tolerance
            });
            if moved {
                self.last_potentiometer = Some(potentiometer);
                self.displayed_goal = goal_from_potentiometer(
                    potentiometer,
                    self.config.goal_divisor,
                    self.config.goal_step,
                );
                self.redraw = true;
            }
        }
    }

    /// Steps or distance changed outside of the controller.
    pub fn activity_changed(&mut self) {
        if !self.mode.is_editing_goal() {
            self.redraw = true;
        }
    }

    pub fn take_redraw(&mut self) -> bool {
        let redraw = self.redraw;
        self.redraw = false;
        redraw
    }

    pub fn screen(&self, activity: &Activity) -> Screen {
        match self.mode {
            Mode::RecentSteps => Screen::Steps {
                title: "Recent steps",
                steps: activity.recent.steps,
                goal: self.goal,
                units: self.units,
            },
            Mode::RecentDistance => Screen::Distance {
                title: "Recent distance",
                distance_m: activity.recent.distance_m,
                units: self.units,
            },
            Mode::SetGoal => Screen::SetGoal {
                goal: self.displayed_goal,
            },
            Mode::TotalDistance => Screen::Distance {
                title: "Total distance",
                distance_m: activity.total.distance_m,
                units: self.units,
            },
            Mode::TotalSteps => Screen::Steps {
                title: "Total steps",
                steps: activity.total.steps,
                goal: self.goal,
                units: self.units,
            },
        }
    }

    fn navigate(&mut self, direction: Direction) {
        let next = self.config.navigation.next(self.mode, direction);
        if next == self.mode {
            return;
        }
        log::info!("Switching mode={:?}", next);
        self.mode = next;
        if next.is_editing_goal() {
            self.last_potentiometer = None;
        }
        self.redraw = true;
    }
}

/// Goal selected by the potentiometer, rounded to whole `step`s.
pub fn goal_from_potentiometer(potentiometer: Sample, divisor: f32, step: u32) -> u32 {
    let steps = (potentiometer as f32 / divisor).round();
    if steps > 0.0 {
        (steps as u32).saturating_mul(step)
    } else {
        0
    }
}
