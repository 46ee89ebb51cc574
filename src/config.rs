/*
 * Compile-time configuration for the crossing.
 *
 * There is no runtime configuration: the state graph, the timing and the pin
 * polarities are fixed when the firmware is built.
 */

use crate::pin_map::{InputPins, OutputPins};
use enum_ordinalize::Ordinalize;

/// Period of one tick of the tick source.
pub const TICK_PERIOD_MS: u64 = 10;

/// The state table counts dwell times in units of 20 ticks (200 ms), which is
/// the cadence the intersection is tuned for.
pub const TICKS_PER_DWELL_UNIT: u32 = 20;

/// Completed cycles waiting to be written to the serial log. When the log
/// falls behind, newer cycles are dropped rather than stalling the lights.
pub const CHANNEL_CAPACITY: usize = 4;

/// All lamps on the board are driven active-high.
pub const OUTPUT_ACTIVE_LOWS: [bool; OutputPins::VARIANT_COUNT] =
    [false; OutputPins::VARIANT_COUNT];

/// Buttons and vehicle loops pull their line to ground when triggered.
pub const INPUT_ACTIVE_LOWS: [bool; InputPins::VARIANT_COUNT] = [true; InputPins::VARIANT_COUNT];
