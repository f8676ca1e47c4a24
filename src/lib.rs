#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod attack;
mod board;
mod common;
mod config;
mod game;
mod grid;
pub mod picker;
mod player;
mod ship;
#[cfg(feature = "std")]
pub mod host;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod registry;
#[cfg(feature = "std")]
mod ui;

pub use ai::{random_fleet, random_placement};
pub use attack::{resolve, AttackOutcome};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use grid::*;
pub use player::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use host::HostHandle;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
#[cfg(feature = "std")]
pub use protocol::{Command, Event, Reply};
#[cfg(feature = "std")]
pub use registry::MatchRegistry;
#[cfg(feature = "std")]
pub use ui::*;
