/*
 * The intersection as a Moore machine.
 *
 * Each state fixes the lamps, how long they are held and which input flags
 * count as serviced once the state is left. The next state is found by
 * indexing a 16-entry table with the input flags that are still set after
 * the serviced ones are cleared. The tables refer to other states by
 * `StateId`, so the (cyclic) graph is just data in one static array.
 *
 * The table is checked while compiling: a malformed entry fails the build.
 */

use super::input_flags::{
    CROSS_MAIN_BUTTON, CROSS_SIDE_BUTTON, INPUT_MASK, InputFlags, MAIN_VEHICLE, SIDE_VEHICLE,
};
use crate::config::TICKS_PER_DWELL_UNIT;
use crate::lamps::{
    MAIN_AMBER, MAIN_GREEN, MAIN_RED, Rag, SIDE_AMBER, SIDE_GREEN, SIDE_RED, Street, TRAFFIC_MASK,
    WALK_ACROSS_MAIN, WALK_ACROSS_SIDE, WALK_MASK,
};
use enum_ordinalize::Ordinalize;

pub const NEXT_STATE_ENTRIES: usize = 1 << 4;
const HALF: usize = NEXT_STATE_ENTRIES / 2;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Ordinalize, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum StateId {
    GreenMain,
    GreenMainWithWalk,
    GreenMainDelay,
    YellowMain,
    GreenSide,
    YellowSide,
    WalkPhase,
}

impl StateId {
    pub const INITIAL: StateId = StateId::GreenMain;

    pub const fn name(self) -> &'static str {
        match self {
            StateId::GreenMain => "GreenMain",
            StateId::GreenMainWithWalk => "GreenMainWithWalk",
            StateId::GreenMainDelay => "GreenMainDelay",
            StateId::YellowMain => "YellowMain",
            StateId::GreenSide => "GreenSide",
            StateId::YellowSide => "YellowSide",
            StateId::WalkPhase => "WalkPhase",
        }
    }
}

#[derive(Debug)]
pub struct State {
    /// Position of this record in `STATES`.
    pub id: StateId,
    pub traffic: u8,
    pub walk: u8,
    pub dwell_ticks: u32,
    /// Input flags that are serviced, and cleared, when this state is left.
    pub clear_mask: u8,
    pub next: [StateId; NEXT_STATE_ENTRIES],
}

const fn dwell(units: u32) -> u32 {
    units * TICKS_PER_DWELL_UNIT
}

/*
 * For states that do not care about the main street vehicle loop (bit 3) both
 * halves of the table must be identical. Building them from a single half
 * keeps them from drifting apart.
 */
const fn ignoring_main_vehicle(half: [StateId; HALF]) -> [StateId; NEXT_STATE_ENTRIES] {
    let mut next = [half[0]; NEXT_STATE_ENTRIES];
    let mut i = 0;
    while i < NEXT_STATE_ENTRIES {
        next[i] = half[i % HALF];
        i += 1;
    }
    next
}

use self::StateId::{
    GreenMain, GreenMainDelay, GreenMainWithWalk, GreenSide, WalkPhase, YellowMain, YellowSide,
};

const TABLE: [State; StateId::VARIANT_COUNT] = [
    State {
        id: GreenMain,
        traffic: MAIN_GREEN | SIDE_RED,
        walk: 0,
        dwell_ticks: dwell(7),
        clear_mask: MAIN_VEHICLE,
        next: ignoring_main_vehicle([
            GreenMain,
            GreenMainWithWalk,
            YellowMain,
            YellowMain,
            YellowMain,
            YellowMain,
            YellowMain,
            YellowMain,
        ]),
    },
    State {
        id: GreenMainWithWalk,
        traffic: MAIN_GREEN | SIDE_RED,
        walk: WALK_ACROSS_SIDE,
        dwell_ticks: dwell(4),
        clear_mask: CROSS_SIDE_BUTTON,
        next: ignoring_main_vehicle([GreenMainDelay; HALF]),
    },
    State {
        id: GreenMainDelay,
        traffic: MAIN_GREEN | SIDE_RED,
        walk: 0,
        dwell_ticks: dwell(3),
        clear_mask: MAIN_VEHICLE,
        next: ignoring_main_vehicle([
            GreenMain, GreenMain, YellowMain, YellowMain, YellowMain, YellowMain, YellowMain,
            YellowMain,
        ]),
    },
    State {
        id: YellowMain,
        traffic: MAIN_AMBER | SIDE_RED,
        walk: 0,
        dwell_ticks: dwell(2),
        clear_mask: 0,
        next: ignoring_main_vehicle([
            GreenSide, WalkPhase, WalkPhase, WalkPhase, GreenSide, WalkPhase, WalkPhase, WalkPhase,
        ]),
    },
    State {
        id: GreenSide,
        traffic: MAIN_RED | SIDE_GREEN,
        walk: 0,
        dwell_ticks: dwell(7),
        clear_mask: SIDE_VEHICLE,
        // Bit 2 is cleared on exit, so entry 4 is never selected as the
        // table stands.
        next: [
            YellowSide, YellowSide, YellowSide, YellowSide, GreenSide, YellowSide, YellowSide,
            YellowSide,
            // main street vehicle waiting
            YellowSide, YellowSide, YellowSide, YellowSide, YellowSide, YellowSide, YellowSide,
            YellowSide,
        ],
    },
    State {
        id: YellowSide,
        traffic: MAIN_RED | SIDE_AMBER,
        walk: 0,
        dwell_ticks: dwell(2),
        clear_mask: 0,
        // A waiting main street vehicle skips the walk phase.
        next: [
            WalkPhase,
            GreenMainWithWalk,
            WalkPhase,
            GreenMainWithWalk,
            WalkPhase,
            GreenMainWithWalk,
            WalkPhase,
            GreenMainWithWalk,
            // main street vehicle waiting
            GreenMain,
            GreenMainWithWalk,
            GreenMain,
            GreenMainWithWalk,
            GreenMain,
            GreenMainWithWalk,
            GreenMain,
            GreenMainWithWalk,
        ],
    },
    State {
        id: WalkPhase,
        traffic: MAIN_RED | SIDE_RED,
        walk: WALK_ACROSS_SIDE | WALK_ACROSS_MAIN,
        dwell_ticks: dwell(4),
        clear_mask: CROSS_SIDE_BUTTON | CROSS_MAIN_BUTTON,
        next: ignoring_main_vehicle([
            GreenMain, GreenMain, GreenSide, GreenSide, GreenSide, GreenSide, GreenSide, GreenSide,
        ]),
    },
];

const fn validate(states: &[State]) {
    let mut i = 0;
    while i < states.len() {
        let state = &states[i];
        assert!(state.id as usize == i, "state table is not in StateId order");
        assert!(state.dwell_ticks >= 1, "dwell must be at least one tick");
        assert!(state.clear_mask & !INPUT_MASK == 0, "clear mask names an undefined input");
        assert!(state.traffic & !TRAFFIC_MASK == 0, "undefined traffic lamp");
        assert!(state.walk & !WALK_MASK == 0, "undefined walk lamp");
        assert!(
            Rag::from_pattern(Street::Main, state.traffic).is_single_aspect()
                && Rag::from_pattern(Street::Side, state.traffic).is_single_aspect(),
            "each street shows exactly one aspect"
        );
        i += 1;
    }
}

const _: () = validate(&TABLE);

pub static STATES: [State; StateId::VARIANT_COUNT] = TABLE;

pub fn lookup(id: StateId) -> &'static State {
    &STATES[id.ordinal()]
}

pub fn next_state(id: StateId, flags: InputFlags) -> StateId {
    lookup(id).next[flags.index()]
}
