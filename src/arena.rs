//! The arena: the players' grids and their combined readiness.

use alloc::{vec, vec::Vec};
use core::fmt;

use crate::common::GameError;
use crate::config::MIN_ARENA_GRIDS;
use crate::grid::Grid;
use crate::signal::{combine_all, Derived, Signal};

/// The playing surface of one game, normally one grid per player.
///
/// The arena is ready while every grid is ready. It owns its grids and the
/// subscriptions to their readiness; both are released on [`Arena::dispose`]
/// or when the arena is dropped.
pub struct Arena {
    grids: Vec<Grid>,
    ready: Derived<bool>,
    disposed: bool,
}

impl Arena {
    /// Create an arena from at least [`MIN_ARENA_GRIDS`] grids.
    pub fn new(grids: Vec<Grid>) -> Result<Self, GameError> {
        if grids.len() < MIN_ARENA_GRIDS {
            return Err(GameError::TooFewGrids(grids.len()));
        }
        Ok(Self::from_grids(grids))
    }

    /// Create the usual two-grid arena.
    pub fn pair(first: Grid, second: Grid) -> Self {
        Self::from_grids(vec![first, second])
    }

    fn from_grids(grids: Vec<Grid>) -> Self {
        let signals: Vec<Signal<bool>> = grids.iter().map(Grid::ready).collect();
        let ready = combine_all(&signals);
        Self {
            grids,
            ready,
            disposed: false,
        }
    }

    pub fn grids(&self) -> &[Grid] {
        &self.grids
    }

    pub fn grid(&self, index: usize) -> Option<&Grid> {
        self.grids.get(index)
    }

    /// Mutable access for placing vessels.
    pub fn grid_mut(&mut self, index: usize) -> Option<&mut Grid> {
        self.grids.get_mut(index)
    }

    /// Emits whenever a grid's readiness changes.
    pub fn ready(&self) -> Signal<bool> {
        self.ready.signal().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.current()
    }

    /// Cancel the grid subscriptions and dispose the grids. Only the first
    /// call has any effect.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.disposed = true;
        self.ready.dispose();
        for grid in self.grids.iter_mut() {
            grid.dispose();
        }
        log::debug!("arena with {} grids disposed", self.grids.len());
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Drop for Arena {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Arena {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("ready", &self.is_ready())
            .field("disposed", &self.disposed)
            .field("grids", &self.grids)
            .finish()
    }
}
