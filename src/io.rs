/*
 * The I/O module for the crossing.
 *
 * This is the only part of the library that is device-specific. It owns the
 * GPIO pins of the lamps, buttons and vehicle loops, and provides the tick
 * that paces the traffic light. Pin polarity is handled by `PinMap`, so the
 * code here only sets and reads levels.
 */

use crate::config::{INPUT_ACTIVE_LOWS, OUTPUT_ACTIVE_LOWS, TICK_PERIOD_MS};
use crate::pin_map::{InputPins, OutputPins, PinMap};
use crate::trafficlight::{IntersectionIo, TickSource};
use embassy_stm32::gpio::{AnyPin, Input, Level, Output, Pull, Speed};
use embassy_time::{Duration, Ticker};
use enum_ordinalize::Ordinalize;

pub struct Board {
    outputs: [Output<'static>; OutputPins::VARIANT_COUNT],
    inputs: [Input<'static>; InputPins::VARIANT_COUNT],
    pin_map: PinMap,
}

impl Board {
    /// Configures the lamp pins as push-pull outputs and the sensor pins as
    /// pulled-up inputs, with every lamp dark.
    ///
    /// Pins are given in `OutputPins` and `InputPins` order.
    pub fn new(
        output_pins: [AnyPin; OutputPins::VARIANT_COUNT],
        input_pins: [AnyPin; InputPins::VARIANT_COUNT],
    ) -> Self {
        let pin_map = PinMap::new(OUTPUT_ACTIVE_LOWS, INPUT_ACTIVE_LOWS);
        let dark = pin_map.output_levels(0, 0);

        let mut outputs = output_pins.map(|pin| Output::new(pin, Level::Low, Speed::Low));
        for (output, on) in outputs.iter_mut().zip(dark) {
            output.set_level(level(on));
        }
        let inputs = input_pins.map(|pin| Input::new(pin, Pull::Up));

        Board {
            outputs,
            inputs,
            pin_map,
        }
    }
}

impl IntersectionIo for Board {
    fn read_inputs(&mut self) -> u8 {
        let mut levels = [false; InputPins::VARIANT_COUNT];
        for (level, input) in levels.iter_mut().zip(self.inputs.iter()) {
            *level = input.is_high();
        }

        self.pin_map.input_reading(levels)
    }

    fn write_outputs(&mut self, traffic: u8, walk: u8) {
        let levels = self.pin_map.output_levels(traffic, walk);
        for (output, on) in self.outputs.iter_mut().zip(levels) {
            output.set_level(level(on));
        }
    }
}

fn level(high: bool) -> Level {
    if high { Level::High } else { Level::Low }
}

/// A `Ticker` keeps its period even when the work between ticks takes a
/// little time, so dwell times do not drift.
pub struct EmbassyTick {
    ticker: Ticker,
}

impl EmbassyTick {
    pub fn new() -> Self {
        EmbassyTick {
            ticker: Ticker::every(Duration::from_millis(TICK_PERIOD_MS)),
        }
    }
}

impl Default for EmbassyTick {
    fn default() -> Self {
        Self::new()
    }
}

impl TickSource for EmbassyTick {
    async fn wait_one_tick(&mut self) {
        self.ticker.next().await;
    }
}
