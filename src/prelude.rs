//! Commonly used types and utilities for ease of import.

pub use crate::{
    Arena, AutoGrid, Game, GameError, GamePhase, GameSession, Grid, GridError, Orientation,
    Placeable, Player, PlayerId, SessionPhase, Vessel,
};

#[cfg(feature = "std")]
pub use crate::{from_json, init_logging, print_grid, to_json, PersistenceError};
