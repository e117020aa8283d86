//! Filter out mechanical bouncing of buttons and switches.

/// Logical transition of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    Pushed,
    Released,
}

/// Debounced state of a single input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Record {
    state: bool,
    mismatches: u8,
    idle: bool,
    changed: bool,
}

impl Record {
    fn new(idle: bool) -> Self {
        Self {
            state: idle,
            mismatches: 0,
            idle,
            changed: false,
        }
    }

    fn poll(&mut self, level: bool, threshold: u8) {
        if level == self.state {
            self.mismatches = 0;
            return;
        }

        self.mismatches = self.mismatches.saturating_add(1);
        if self.mismatches >= threshold {
            self.state = level;
            self.mismatches = 0;
            self.changed = true;
        }
    }
}

/// Bank of `N` inputs sharing the same threshold.
///
/// A new level is accepted only after `threshold` consecutive polls read
/// it. Every accepted change raises a flag that is consumed by `check`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer<const N: usize> {
    records: [Record; N],
    threshold: u8,
}

impl<const N: usize> Debouncer<N> {
    /// # Panics
    ///
    /// Panics if `threshold` is zero.
    pub fn new(idle: [bool; N], threshold: u8) -> Self {
        assert!(threshold > 0, "Debouncing needs at least one poll.");
        Self {
            records: idle.map(Record::new),
            threshold,
        }
    }

    pub fn poll(&mut self, levels: [bool; N]) {
        for (record, level) in self.records.iter_mut().zip(levels) {
            record.poll(level, self.threshold);
        }
    }

    /// Report the last accepted change of the input once, `None` otherwise.
    pub fn check(&mut self, index: usize) -> Option<Edge> {
        let record = &mut self.records[index];
        if !record.changed {
            return None;
        }
        record.changed = false;
        if record.state == record.idle {
            Some(Edge::Released)
        } else {
            Some(Edge::Pushed)
        }
    }

    /// Whether the accepted level differs from the idle one.
    pub fn is_active(&self, index: usize) -> bool {
        let record = &self.records[index];
        record.state != record.idle
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Up, Button::Down, Button::Left, Button::Right];

    fn index(self) -> usize {
        match self {
            Button::Up => 0,
            Button::Down => 1,
            Button::Left => 2,
            Button::Right => 3,
        }
    }
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Buttons {
    debouncer: Debouncer<4>,
}

impl Buttons {
    pub fn new(idle: [bool; 4], threshold: u8) -> Self {
        Self {
            debouncer: Debouncer::new(idle, threshold),
        }
    }

    pub fn poll(&mut self, levels: [bool; 4]) {
        self.debouncer.poll(levels);
    }

    pub fn check(&mut self, button: Button) -> Option<Edge> {
        self.debouncer.check(button.index())
    }

    pub fn is_active(&self, button: Button) -> bool {
        self.debouncer.is_active(button.index())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Switch {
    Left,
    Right,
}

impl Switch {
    fn index(self) -> usize {
        match self {
            Switch::Left => 0,
            Switch::Right => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Position {
    Down,
    Up,
}

/// Switches expose their level only, changes are never reported.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Switches {
    debouncer: Debouncer<2>,
}

impl Switches {
    pub fn new(idle: [bool; 2], threshold: u8) -> Self {
        Self {
            debouncer: Debouncer::new(idle, threshold),
        }
    }

    pub fn poll(&mut self, levels: [bool; 2]) {
        self.debouncer.poll(levels);
    }

    pub fn position(&self, switch: Switch) -> Position {
        if self.debouncer.is_active(switch.index()) {
            Position::Up
        } else {
            Position::Down
        }
    }
}
