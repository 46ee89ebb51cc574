#![cfg_attr(not(test), no_std)]

/*
 * Controller for a two-street intersection with pedestrian walk lights.
 *
 * Everything in this library, apart from the `io` module, is plain logic that
 * runs on the host as well as on the board. The device-specific parts live in
 * `io` and in the firmware binary.
 */

pub mod config;
pub mod lamps;
pub mod pin_map;
pub mod trafficlight;

#[cfg(target_os = "none")]
pub mod io;

pub use trafficlight::{Cycle, IntersectionIo, TickSource, TrafficLight};
