/*
 * The sticky input register.
 *
 * Buttons and vehicle loops are polled once per tick, and every reading is
 * OR-ed into the register. A bit therefore means "was triggered at some point
 * since it was last serviced", not "is triggered now". Bits only go low when
 * a state that services them is left.
 */

pub const CROSS_SIDE_BUTTON: u8 = 0b0001;
pub const CROSS_MAIN_BUTTON: u8 = 0b0010;
pub const SIDE_VEHICLE: u8 = 0b0100;
pub const MAIN_VEHICLE: u8 = 0b1000;

pub const INPUT_MASK: u8 = 0b1111;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InputFlags(u8);

impl InputFlags {
    pub const NONE: InputFlags = InputFlags(0);

    /// Keeps the four input lines of a raw reading and drops everything else.
    pub const fn from_reading(raw: u8) -> Self {
        InputFlags(raw & INPUT_MASK)
    }

    pub const fn accumulate(self, reading: InputFlags) -> Self {
        InputFlags(self.0 | reading.0)
    }

    pub const fn clear(self, mask: u8) -> Self {
        InputFlags(self.0 & !mask)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, bits: u8) -> bool {
        self.0 & bits == bits
    }

    /// Position in a 16-entry next-state table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}
