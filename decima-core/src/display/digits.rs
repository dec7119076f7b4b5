//! Tenths-of-a-second to `mm:ss.d` decomposition

/// One of the five digit cells, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitSlot {
    MinutesTens,
    MinutesUnits,
    SecondsTens,
    SecondsUnits,
    Tenths,
}

impl DigitSlot {
    /// Number of slots on the panel
    pub const COUNT: usize = 5;

    /// All slots in panel order
    pub const ALL: [DigitSlot; Self::COUNT] = [
        DigitSlot::MinutesTens,
        DigitSlot::MinutesUnits,
        DigitSlot::SecondsTens,
        DigitSlot::SecondsUnits,
        DigitSlot::Tenths,
    ];

    /// Column index on the panel
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Largest value this cell ever shows
    pub const fn max_value(self) -> u8 {
        match self {
            DigitSlot::SecondsTens => 5,
            _ => 9,
        }
    }
}

/// Decimal digits of one reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digits([u8; DigitSlot::COUNT]);

impl Digits {
    /// Split a tenths counter into `mm:ss.d`
    ///
    /// Minutes past 99 are reduced modulo 100 to fit the two-digit field.
    pub fn from_tenths(tenths: u32) -> Self {
        let total_seconds = tenths / 10;
        let minutes = total_seconds / 60;
        let seconds = total_seconds % 60;

        Self([
            ((minutes / 10) % 10) as u8,
            (minutes % 10) as u8,
            (seconds / 10) as u8,
            (seconds % 10) as u8,
            (tenths % 10) as u8,
        ])
    }

    pub fn get(&self, slot: DigitSlot) -> u8 {
        self.0[slot.index()]
    }

    /// Iterate `(slot, value)` in panel order
    pub fn iter(&self) -> impl Iterator<Item = (DigitSlot, u8)> + '_ {
        DigitSlot::ALL.iter().map(move |slot| (*slot, self.get(*slot)))
    }

    pub fn as_array(&self) -> [u8; DigitSlot::COUNT] {
        self.0
    }
}
