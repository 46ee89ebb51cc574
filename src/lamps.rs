/*
 * Bit layout of the two output patterns.
 *
 * The traffic pattern packs two red/amber/green groups, main street in the
 * upper three bits and side street in the lower three. The walk pattern holds
 * one bit per walk lamp.
 */

pub const MAIN_RED: u8 = 0b10_0000;
pub const MAIN_AMBER: u8 = 0b01_0000;
pub const MAIN_GREEN: u8 = 0b00_1000;
pub const SIDE_RED: u8 = 0b00_0100;
pub const SIDE_AMBER: u8 = 0b00_0010;
pub const SIDE_GREEN: u8 = 0b00_0001;

pub const TRAFFIC_MASK: u8 = 0b11_1111;

/// Pedestrians walk alongside the main street, crossing the side street.
pub const WALK_ACROSS_SIDE: u8 = 0b01;
/// Pedestrians cross the main street.
pub const WALK_ACROSS_MAIN: u8 = 0b10;

pub const WALK_MASK: u8 = 0b11;

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Street {
    Main,
    Side,
}

/// The red/amber/green group of one street.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Rag {
    street: Street,
    red: bool,
    amber: bool,
    green: bool,
}

impl Rag {
    pub const fn new(street: Street, red: bool, amber: bool, green: bool) -> Self {
        Self {
            street,
            red,
            amber,
            green,
        }
    }

    pub const fn from_pattern(street: Street, traffic: u8) -> Self {
        let (red, amber, green) = match street {
            Street::Main => (MAIN_RED, MAIN_AMBER, MAIN_GREEN),
            Street::Side => (SIDE_RED, SIDE_AMBER, SIDE_GREEN),
        };
        Self::new(
            street,
            traffic & red != 0,
            traffic & amber != 0,
            traffic & green != 0,
        )
    }

    pub const fn street(&self) -> Street {
        self.street
    }

    pub const fn red(&self) -> bool {
        self.red
    }

    pub const fn amber(&self) -> bool {
        self.amber
    }

    pub const fn green(&self) -> bool {
        self.green
    }

    /// Exactly one lamp of the group is lit.
    pub const fn is_single_aspect(&self) -> bool {
        (self.red as u8) + (self.amber as u8) + (self.green as u8) == 1
    }
}
