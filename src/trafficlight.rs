pub mod input_flags;
pub mod state_table;

use input_flags::InputFlags;
use state_table::{StateId, lookup, next_state};

/// Access to the lamps and sensors of the intersection.
///
/// On the board this is GPIO; in tests it is a fake that records writes and
/// replays scripted readings.
pub trait IntersectionIo {
    /// One instantaneous reading of the input lines. Only the low four bits
    /// are used.
    fn read_inputs(&mut self) -> u8;

    fn write_outputs(&mut self, traffic: u8, walk: u8);
}

/// A fixed-period wait. This is the only place the traffic light suspends.
#[allow(async_fn_in_trait)]
pub trait TickSource {
    async fn wait_one_tick(&mut self);
}

/// Summary of one completed state: where we were, where we are going and the
/// (post-clear) input flags that made the choice.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    pub from: StateId,
    pub to: StateId,
    pub flags: InputFlags,
}

pub struct TrafficLight<Io, Tick> {
    state: StateId,
    flags: InputFlags,
    io: Io,
    tick: Tick,
}

impl<Io: IntersectionIo, Tick: TickSource> TrafficLight<Io, Tick> {
    pub fn new(io: Io, tick: Tick) -> Self {
        TrafficLight {
            state: StateId::INITIAL,
            flags: InputFlags::NONE,
            io,
            tick,
        }
    }

    pub fn state(&self) -> StateId {
        self.state
    }

    pub fn flags(&self) -> InputFlags {
        self.flags
    }

    pub fn io(&self) -> &Io {
        &self.io
    }

    fn sample(&mut self) -> InputFlags {
        InputFlags::from_reading(self.io.read_inputs())
    }

    /*
     * Show the lamps of the current state, hold them for the dwell time while
     * collecting inputs, then pick the next state.
     */
    pub async fn run_cycle(&mut self) -> Cycle {
        let state = lookup(self.state);
        self.io.write_outputs(state.traffic, state.walk);

        for _ in 0..state.dwell_ticks {
            self.tick.wait_one_tick().await;
            let reading = self.sample();
            self.flags = self.flags.accumulate(reading);
        }

        self.flags = self.flags.clear(state.clear_mask);
        let next = next_state(self.state, self.flags);

        #[cfg(feature = "defmt")]
        defmt::debug!("{} -> {} flags {=u8:#b}", state.id, next, self.flags.bits());

        let cycle = Cycle {
            from: self.state,
            to: next,
            flags: self.flags,
        };
        self.state = next;
        cycle
    }

    pub async fn run(&mut self, mut on_cycle: impl FnMut(&Cycle)) -> ! {
        loop {
            let cycle = self.run_cycle().await;
            on_cycle(&cycle);
        }
    }
}
