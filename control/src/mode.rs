//! Screens the user can navigate between.

/// What is currently shown on the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    RecentSteps,
    RecentDistance,
    SetGoal,
    TotalDistance,
    TotalSteps,
}

impl Mode {
    pub const ALL: [Mode; 5] = [
        Mode::RecentSteps,
        Mode::RecentDistance,
        Mode::SetGoal,
        Mode::TotalDistance,
        Mode::TotalSteps,
    ];

    pub const BOOT: Mode = Mode::RecentSteps;

    fn index(self) -> usize {
        match self {
            Mode::RecentSteps => 0,
            Mode::RecentDistance => 1,
            Mode::SetGoal => 2,
            Mode::TotalDistance => 3,
            Mode::TotalSteps => 4,
        }
    }

    pub fn is_editing_goal(self) -> bool {
        matches!(self, Mode::SetGoal)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Left,
    Right,
}

/// Lateral adjacency of modes.
///
/// Every mode has exactly one neighbour on each side, so navigation can
/// never leave the set of modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Navigation {
    neighbours: [[Mode; 2]; 5],
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new([
            (Mode::RecentSteps, Mode::SetGoal, Mode::RecentDistance),
            (Mode::RecentDistance, Mode::TotalSteps, Mode::SetGoal),
            (Mode::SetGoal, Mode::TotalDistance, Mode::RecentSteps),
            (Mode::TotalDistance, Mode::TotalSteps, Mode::SetGoal),
            (Mode::TotalSteps, Mode::SetGoal, Mode::RecentDistance),
        ])
    }
}

impl Navigation {
    /// Build the table from `(mode, left, right)` rows, in any order.
    ///
    /// # Panics
    ///
    /// Panics if any mode is missing a row.
    pub fn new(rows: [(Mode, Mode, Mode); 5]) -> Self {
        let mut neighbours = [[Mode::BOOT; 2]; 5];
        let mut covered = [false; 5];
        for (mode, left, right) in rows {
            neighbours[mode.index()] = [left, right];
            covered[mode.index()] = true;
        }
        assert!(
            covered.iter().all(|c| *c),
            "Every mode needs its neighbours defined."
        );
        Self { neighbours }
    }

    pub fn next(&self, mode: Mode, direction: Direction) -> Mode {
        let [left, right] = self.neighbours[mode.index()];
        match direction {
            Direction::Left => left,
            Direction::Right => right,
        }
    }
}

/// Unit system used to present the activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Units {
    /// Kilometres and raw step counts.
    #[default]
    Metric,
    /// Miles and percentage of the goal.
    Imperial,
}

impl Units {
    pub fn toggled(self) -> Self {
        match self {
            Units::Metric => Units::Imperial,
            Units::Imperial => Units::Metric,
        }
    }
}
