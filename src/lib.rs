#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod arena;
mod auto_grid;
mod common;
mod config;
mod coords;
mod game;
mod grid;
#[cfg(feature = "std")]
mod interface;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod persistence;
mod phases;
mod placement;
mod player;
pub mod prelude;
mod session;
pub mod signal;
mod vessel;

pub use arena::Arena;
pub use auto_grid::{random_placement, AutoGrid};
pub use common::*;
pub use config::*;
pub use coords::{coordinates, Coord};
pub use game::{Game, GameId, GamePhase};
pub use grid::Grid;
#[cfg(feature = "std")]
pub use interface::{print_game, print_grid, render_grid};
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
#[cfg(feature = "std")]
pub use persistence::{
    from_bytes, from_json, from_json_file, to_bytes, to_json, to_json_file, GameSnapshot,
    PersistenceError,
};
pub use phases::{BattlePhase, PlayerBoard, PlayerPhaseState, StartPhase};
pub use placement::Placement;
pub use player::{Player, PlayerId};
pub use session::{GameSession, SessionPhase};
pub use signal::{combine_all, combine_any, combine_latest, Derived, Signal, Subscription};
pub use vessel::{Orientation, Placeable, Position, Vessel};
