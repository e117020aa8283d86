//! Text rendered on the 16x4 display.

use core::fmt::{self, Write};

use heapless::String;

use crate::mode::Units;

pub const COLUMNS: usize = 16;
pub const ROWS: usize = 4;

/// Single display row, always padded to the full width.
pub type Line = String<COLUMNS>;

const METRES_PER_KILOMETRE: u64 = 1000;
const METRES_PER_MILE: u64 = 1609;

/// Content of the display for one of the modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Screen {
    SetGoal {
        goal: u32,
    },
    Distance {
        title: &'static str,
        distance_m: u32,
        units: Units,
    },
    Steps {
        title: &'static str,
        steps: u32,
        goal: u32,
        units: Units,
    },
}

impl Screen {
    pub fn lines(&self) -> [Line; ROWS] {
        let lines = match *self {
            Screen::SetGoal { goal } => [
                line(format_args!("    Set goal")),
                Line::new(),
                line(format_args!("{goal:>7} Steps")),
                Line::new(),
            ],
            Screen::Distance {
                title,
                distance_m,
                units,
            } => {
                let (whole, tenth) = split_distance(distance_m, units);
                let unit = match units {
                    Units::Metric => "km",
                    Units::Imperial => "miles",
                };
                [
                    line(format_args!("{title}")),
                    Line::new(),
                    Line::new(),
                    line(format_args!("{whole}.{tenth} {unit}")),
                ]
            }
            Screen::Steps {
                title,
                steps,
                goal,
                units,
            } => {
                let value = match units {
                    Units::Metric => line(format_args!("{steps} Steps")),
                    Units::Imperial => {
                        line(format_args!("Percent = {}%", percent_of_goal(steps, goal)))
                    }
                };
                [
                    line(format_args!("{title}")),
                    line(format_args!("Goal = {goal}")),
                    Line::new(),
                    value,
                ]
            }
        };
        lines.map(pad)
    }
}

/// Whole units and the first decimal digit.
fn split_distance(distance_m: u32, units: Units) -> (u64, u64) {
    let distance_m = u64::from(distance_m);
    match units {
        Units::Metric => (
            distance_m / METRES_PER_KILOMETRE,
            (distance_m % METRES_PER_KILOMETRE) / 100,
        ),
        Units::Imperial => (
            distance_m / METRES_PER_MILE,
            (distance_m * 10 / METRES_PER_MILE) % 10,
        ),
    }
}

pub fn percent_of_goal(steps: u32, goal: u32) -> u32 {
    if goal == 0 {
        return 100;
    }
    let percent = u64::from(steps) * 100 / u64::from(goal);
    percent.min(100) as u32
}

/// Writer dropping whatever does not fit the line.
struct Truncating<'a>(&'a mut Line);

impl Write for Truncating<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

fn line(args: fmt::Arguments<'_>) -> Line {
    let mut line = Line::new();
    let _ = Truncating(&mut line).write_fmt(args);
    line
}

fn pad(mut line: Line) -> Line {
    while line.push(' ').is_ok() {}
    line
}
