//! Common types for the engine: grid and game errors.

use alloc::string::String;

use crate::player::PlayerId;
use crate::vessel::Orientation;

/// Errors returned by grid placement operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The piece is not one of the grid's placements.
    PieceNotFound,
    /// Attempted to place a piece that already has a position.
    PieceAlreadyPlaced,
    /// Pieces must cover at least one cell.
    EmptyVessel,
    /// Placement would leave the grid.
    OutOfBounds { x: i32, y: i32 },
    /// Placement overlaps another piece.
    Overlaps { x: i32, y: i32 },
    /// No free origin is left for a piece of this length and orientation.
    GridFull {
        length: usize,
        orientation: Orientation,
    },
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::PieceNotFound => write!(f, "Vessel is not on this grid"),
            GridError::PieceAlreadyPlaced => write!(f, "Vessel is already placed on the grid"),
            GridError::EmptyVessel => write!(f, "Vessel length must be at least 1"),
            GridError::OutOfBounds { x, y } => {
                write!(f, "Vessel placement is out of bounds at ({}, {})", x, y)
            }
            GridError::Overlaps { x, y } => {
                write!(f, "Vessel placement overlaps another vessel at ({}, {})", x, y)
            }
            GridError::GridFull {
                length,
                orientation,
            } => write!(
                f,
                "No room left for a {} vessel of length {}",
                orientation, length
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GridError {}

/// Errors returned by arena, session and game operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// A game session needs at least one phase.
    NoPhases,
    /// An arena needs at least [`MIN_ARENA_GRIDS`](crate::MIN_ARENA_GRIDS) grids.
    TooFewGrids(usize),
    /// The player is not a member of this game.
    NotAPlayer(PlayerId),
    /// Phase name does not match any game phase.
    UnknownPhase(String),
    /// Underlying grid error.
    Grid(GridError),
}

impl From<GridError> for GameError {
    fn from(err: GridError) -> Self {
        GameError::Grid(err)
    }
}

impl core::fmt::Display for GameError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GameError::NoPhases => write!(f, "Game session must have at least one phase"),
            GameError::TooFewGrids(found) => write!(
                f,
                "Arena needs at least {} grids, got {}",
                crate::config::MIN_ARENA_GRIDS,
                found
            ),
            GameError::NotAPlayer(id) => write!(f, "Player {} is not part of this game", id),
            GameError::UnknownPhase(name) => write!(f, "Invalid game phase: {}", name),
            GameError::Grid(e) => write!(f, "Grid error: {}", e),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
