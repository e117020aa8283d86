//! Detect a button being held down.

/// Count ticks since a button was pushed.
///
/// Call `push` on the pushed edge, `release` on the released one and `tick`
/// on every control cycle. `tick` reports the long press once, after which
/// it stops counting until the next push.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LongPress {
    pub held: Option<u32>,
}

impl LongPress {
    pub fn push(&mut self) {
        self.held = Some(0);
    }

    pub fn release(&mut self) {
        self.held = None;
    }

    pub fn tick(&mut self, threshold: u32) -> bool {
        let Some(held) = self.held.as_mut() else {
            return false;
        };
        *held = held.saturating_add(1);
        if *held >= threshold {
            self.held = None;
            true
        } else {
            false
        }
    }
}
