/*
 * The state machine thinks in packed bit patterns: one traffic pattern, one
 * walk pattern and one 4-bit input reading. The board has individual pins,
 * some of which are active-low. This module translates between the two, so
 * that the `io` module only has to set and read levels.
 */

use crate::lamps;
use crate::trafficlight::input_flags::{
    CROSS_MAIN_BUTTON, CROSS_SIDE_BUTTON, MAIN_VEHICLE, SIDE_VEHICLE,
};
use enum_ordinalize::Ordinalize;

#[derive(Ordinalize, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum OutputPins {
    // Main street lights.
    MainRed,
    MainAmber,
    MainGreen,

    // Side street lights.
    SideRed,
    SideAmber,
    SideGreen,

    // Walk lamps.
    WalkAcrossSide,
    WalkAcrossMain,
}

#[derive(Ordinalize, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum InputPins {
    CrossSideButton,
    CrossMainButton,
    SideVehicle,
    MainVehicle,
}

enum Pattern {
    Traffic,
    Walk,
}

impl OutputPins {
    const fn source(self) -> (Pattern, u8) {
        match self {
            Self::MainRed => (Pattern::Traffic, lamps::MAIN_RED),
            Self::MainAmber => (Pattern::Traffic, lamps::MAIN_AMBER),
            Self::MainGreen => (Pattern::Traffic, lamps::MAIN_GREEN),
            Self::SideRed => (Pattern::Traffic, lamps::SIDE_RED),
            Self::SideAmber => (Pattern::Traffic, lamps::SIDE_AMBER),
            Self::SideGreen => (Pattern::Traffic, lamps::SIDE_GREEN),
            Self::WalkAcrossSide => (Pattern::Walk, lamps::WALK_ACROSS_SIDE),
            Self::WalkAcrossMain => (Pattern::Walk, lamps::WALK_ACROSS_MAIN),
        }
    }
}

impl InputPins {
    pub const fn flag(self) -> u8 {
        match self {
            Self::CrossSideButton => CROSS_SIDE_BUTTON,
            Self::CrossMainButton => CROSS_MAIN_BUTTON,
            Self::SideVehicle => SIDE_VEHICLE,
            Self::MainVehicle => MAIN_VEHICLE,
        }
    }
}

pub struct PinMap {
    output_active_lows: [bool; OutputPins::VARIANT_COUNT],
    input_active_lows: [bool; InputPins::VARIANT_COUNT],
}

impl PinMap {
    pub const fn new(
        output_active_lows: [bool; OutputPins::VARIANT_COUNT],
        input_active_lows: [bool; InputPins::VARIANT_COUNT],
    ) -> Self {
        PinMap {
            output_active_lows,
            input_active_lows,
        }
    }

    /// Pin levels (`true` is high) for the given output patterns, in
    /// `OutputPins` order.
    pub fn output_levels(&self, traffic: u8, walk: u8) -> [bool; OutputPins::VARIANT_COUNT] {
        let mut levels = [false; OutputPins::VARIANT_COUNT];
        for (pin, level) in OutputPins::VARIANTS.iter().zip(levels.iter_mut()) {
            let on = match pin.source() {
                (Pattern::Traffic, bit) => traffic & bit != 0,
                (Pattern::Walk, bit) => walk & bit != 0,
            };
            *level = on != self.output_active_lows[pin.ordinal()];
        }

        levels
    }

    /// Packs pin levels (`true` is high), in `InputPins` order, into a 4-bit
    /// reading where a set bit means "triggered".
    pub fn input_reading(&self, levels: [bool; InputPins::VARIANT_COUNT]) -> u8 {
        InputPins::VARIANTS
            .iter()
            .filter(|pin| levels[pin.ordinal()] != self.input_active_lows[pin.ordinal()])
            .fold(0, |reading, pin| reading | pin.flag())
    }
}
