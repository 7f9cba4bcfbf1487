#![cfg(feature = "std")]

//! Snapshots of a game for saving and loading.
//!
//! Snapshot types mirror the game tree with plain data and carry the serde
//! derives, so the domain types stay free of serialization concerns. JSON is
//! the save format; bincode gives a compact binary form of the same tree.

use std::fs;
use std::path::Path;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::{
    arena::Arena,
    common::{GameError, GridError},
    game::{Game, GameId, GamePhase},
    grid::Grid,
    placement::Placement,
    player::{Player, PlayerId},
    vessel::{Orientation, Placeable, Position, Vessel},
};

/// Errors returned while saving or loading a game.
#[derive(Debug)]
pub enum PersistenceError {
    /// Input was empty or only whitespace.
    EmptyInput,
    /// Input is not a valid JSON game snapshot.
    Json(serde_json::Error),
    /// Input is not a valid binary game snapshot.
    Binary(bincode::Error),
    /// Reading or writing a save file failed.
    Io(std::io::Error),
    /// Stored phase name is unknown.
    InvalidPhase(String),
    /// The snapshot describes a game that cannot exist.
    Game(GameError),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::EmptyInput => write!(f, "JSON must not be empty"),
            PersistenceError::Json(e) => write!(f, "JSON error: {}", e),
            PersistenceError::Binary(e) => write!(f, "Binary encoding error: {}", e),
            PersistenceError::Io(e) => write!(f, "I/O error: {}", e),
            PersistenceError::InvalidPhase(name) => write!(f, "Invalid game phase: {}", name),
            PersistenceError::Game(e) => write!(f, "Invalid game: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::Json(e) => Some(e),
            PersistenceError::Binary(e) => Some(e),
            PersistenceError::Io(e) => Some(e),
            PersistenceError::Game(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        PersistenceError::Json(err)
    }
}

impl From<bincode::Error> for PersistenceError {
    fn from(err: bincode::Error) -> Self {
        PersistenceError::Binary(err)
    }
}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        PersistenceError::Io(err)
    }
}

impl From<GameError> for PersistenceError {
    fn from(err: GameError) -> Self {
        match err {
            GameError::UnknownPhase(name) => PersistenceError::InvalidPhase(name),
            other => PersistenceError::Game(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrientationSnapshot {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionSnapshot {
    pub x: i32,
    pub y: i32,
    pub orientation: OrientationSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselSnapshot {
    pub length: usize,
    pub symbol: char,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementSnapshot {
    pub vessel: VesselSnapshot,
    pub position: Option<PositionSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    pub vessels: Vec<PlacementSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArenaSnapshot {
    pub grids: Vec<GridSnapshot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub id: u64,
}

/// Serializable snapshot of a whole game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub id: u64,
    /// Phase name, e.g. `"Setup"`.
    pub phase: String,
    pub arena: ArenaSnapshot,
    pub players: Vec<PlayerSnapshot>,
    pub player_actions: Vec<String>,
}

impl From<Orientation> for OrientationSnapshot {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Horizontal => OrientationSnapshot::Horizontal,
            Orientation::Vertical => OrientationSnapshot::Vertical,
        }
    }
}

impl From<OrientationSnapshot> for Orientation {
    fn from(o: OrientationSnapshot) -> Self {
        match o {
            OrientationSnapshot::Horizontal => Orientation::Horizontal,
            OrientationSnapshot::Vertical => Orientation::Vertical,
        }
    }
}

impl From<Position> for PositionSnapshot {
    fn from(p: Position) -> Self {
        PositionSnapshot {
            x: p.origin.x,
            y: p.origin.y,
            orientation: p.orientation.into(),
        }
    }
}

impl From<PositionSnapshot> for Position {
    fn from(p: PositionSnapshot) -> Self {
        Position::new(p.x, p.y, p.orientation.into())
    }
}

impl From<&Placement> for PlacementSnapshot {
    fn from(p: &Placement) -> Self {
        PlacementSnapshot {
            vessel: VesselSnapshot {
                length: p.piece().length(),
                symbol: p.piece().symbol(),
            },
            position: p.position().map(PositionSnapshot::from),
        }
    }
}

impl From<PlacementSnapshot> for Placement {
    fn from(s: PlacementSnapshot) -> Self {
        let vessel: Rc<dyn Placeable> =
            Rc::new(Vessel::with_symbol(s.vessel.length, s.vessel.symbol));
        Placement::with_position(vessel, s.position.map(Position::from))
    }
}

impl From<&Grid> for GridSnapshot {
    fn from(g: &Grid) -> Self {
        GridSnapshot {
            width: g.width(),
            height: g.height(),
            vessels: g.placements().iter().map(PlacementSnapshot::from).collect(),
        }
    }
}

impl TryFrom<GridSnapshot> for Grid {
    type Error = GridError;

    fn try_from(s: GridSnapshot) -> Result<Self, Self::Error> {
        let placements = s.vessels.into_iter().map(Placement::from).collect();
        Grid::restore(s.width, s.height, placements)
    }
}

impl From<&Arena> for ArenaSnapshot {
    fn from(a: &Arena) -> Self {
        ArenaSnapshot {
            grids: a.grids().iter().map(GridSnapshot::from).collect(),
        }
    }
}

impl TryFrom<ArenaSnapshot> for Arena {
    type Error = GameError;

    fn try_from(s: ArenaSnapshot) -> Result<Self, Self::Error> {
        let grids = s
            .grids
            .into_iter()
            .map(Grid::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Arena::new(grids)
    }
}

impl From<&Game> for GameSnapshot {
    fn from(g: &Game) -> Self {
        GameSnapshot {
            id: g.id().0,
            phase: g.phase().name().to_string(),
            arena: ArenaSnapshot::from(g.arena()),
            players: g
                .players()
                .iter()
                .map(|p| PlayerSnapshot { id: p.id().0 })
                .collect(),
            player_actions: g.actions().to_vec(),
        }
    }
}

impl TryFrom<GameSnapshot> for Game {
    type Error = PersistenceError;

    /// Rebuild a live game. The stored phase is kept even when it differs
    /// from what the arena's readiness would give.
    fn try_from(s: GameSnapshot) -> Result<Self, Self::Error> {
        let phase: GamePhase = s.phase.parse()?;
        let arena = Arena::try_from(s.arena)?;
        let players = s
            .players
            .iter()
            .map(|p| Player::with_id(PlayerId(p.id)))
            .collect();
        Ok(Game::restore(
            GameId(s.id),
            arena,
            players,
            s.player_actions,
            phase,
        ))
    }
}

/// Serialize `game` to pretty-printed JSON.
pub fn to_json(game: &Game) -> Result<String, PersistenceError> {
    let snapshot = GameSnapshot::from(game);
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Restore a game from JSON produced by [`to_json`].
pub fn from_json(json: &str) -> Result<Game, PersistenceError> {
    if json.trim().is_empty() {
        return Err(PersistenceError::EmptyInput);
    }
    let snapshot: GameSnapshot = serde_json::from_str(json)?;
    let game = Game::try_from(snapshot)?;
    log::info!("restored game {} in phase {}", game.id(), game.phase());
    Ok(game)
}

pub fn to_json_file(game: &Game, path: impl AsRef<Path>) -> Result<(), PersistenceError> {
    let json = to_json(game)?;
    fs::write(path.as_ref(), json)?;
    log::info!("saved game {} to {}", game.id(), path.as_ref().display());
    Ok(())
}

pub fn from_json_file(path: impl AsRef<Path>) -> Result<Game, PersistenceError> {
    let json = fs::read_to_string(path)?;
    from_json(&json)
}

/// Serialize `game` to the compact binary form.
pub fn to_bytes(game: &Game) -> Result<Vec<u8>, PersistenceError> {
    Ok(bincode::serialize(&GameSnapshot::from(game))?)
}

/// Restore a game from bytes produced by [`to_bytes`].
pub fn from_bytes(bytes: &[u8]) -> Result<Game, PersistenceError> {
    if bytes.is_empty() {
        return Err(PersistenceError::EmptyInput);
    }
    let snapshot: GameSnapshot = bincode::deserialize(bytes)?;
    Game::try_from(snapshot)
}
