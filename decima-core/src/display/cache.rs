//! Last-drawn digit cache

use super::digits::DigitSlot;

/// What each cell currently shows, `None` before its first draw
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DigitCache {
    slots: [Option<u8>; DigitSlot::COUNT],
}

impl DigitCache {
    /// All cells unset
    pub const fn new() -> Self {
        Self {
            slots: [None; DigitSlot::COUNT],
        }
    }

    pub fn get(&self, slot: DigitSlot) -> Option<u8> {
        self.slots[slot.index()]
    }

    /// Record a successful draw
    pub fn set(&mut self, slot: DigitSlot, value: u8) {
        self.slots[slot.index()] = Some(value);
    }

    /// Forget a cell so it is redrawn next pass
    pub fn invalidate(&mut self, slot: DigitSlot) {
        self.slots[slot.index()] = None;
    }

    /// Check if `slot` needs drawing to show `value`
    pub fn is_stale(&self, slot: DigitSlot, value: u8) -> bool {
        self.get(slot) != Some(value)
    }
}
