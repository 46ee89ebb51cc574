//! Fakes for driving the traffic light on the host.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use despi_m02_crossing::trafficlight::state_table::{StateId, lookup};
use despi_m02_crossing::{IntersectionIo, TickSource, TrafficLight};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Write { traffic: u8, walk: u8 },
    Tick,
    Read(u8),
}

/// Everything the traffic light did to the outside world, in order.
pub type EventLog = Rc<RefCell<Vec<Event>>>;

/// Replays a script of readings, one per call, then reads zero.
#[derive(Default)]
pub struct ScriptedIo {
    script: Vec<u8>,
    reads: usize,
    log: EventLog,
}

impl ScriptedIo {
    pub fn new(script: Vec<u8>) -> Self {
        ScriptedIo {
            script,
            ..Default::default()
        }
    }

    /// Reads `value` on call `at` (zero-based) and zero on every other call.
    pub fn pulse(at: usize, value: u8) -> Self {
        let mut script = vec![0; at + 1];
        script[at] = value;
        Self::new(script)
    }

    pub fn reads(&self) -> usize {
        self.reads
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn ticks(&self) -> usize {
        self.log.borrow().iter().filter(|event| **event == Event::Tick).count()
    }

    pub fn writes(&self) -> Vec<(u8, u8)> {
        self.log
            .borrow()
            .iter()
            .filter_map(|event| match event {
                Event::Write { traffic, walk } => Some((*traffic, *walk)),
                Event::Tick | Event::Read(_) => None,
            })
            .collect()
    }
}

impl IntersectionIo for ScriptedIo {
    fn read_inputs(&mut self) -> u8 {
        let reading = self.script.get(self.reads).copied().unwrap_or(0);
        self.reads += 1;
        self.log.borrow_mut().push(Event::Read(reading));
        reading
    }

    fn write_outputs(&mut self, traffic: u8, walk: u8) {
        self.log.borrow_mut().push(Event::Write { traffic, walk });
    }
}

/// Returns immediately, noting the tick in the shared log.
pub struct LoggedTick {
    log: EventLog,
}

impl TickSource for LoggedTick {
    async fn wait_one_tick(&mut self) {
        self.log.borrow_mut().push(Event::Tick);
    }
}

pub type FakeLight = TrafficLight<ScriptedIo, LoggedTick>;

pub fn light(io: ScriptedIo) -> FakeLight {
    let tick = LoggedTick {
        log: Rc::clone(&io.log),
    };
    TrafficLight::new(io, tick)
}

pub fn dwell_of(id: StateId) -> usize {
    lookup(id).dwell_ticks as usize
}
