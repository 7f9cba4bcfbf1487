//! Grid state: vessel placements on a fixed-size surface and the readiness
//! they add up to.

use alloc::{collections::BTreeSet, rc::Rc, vec::Vec};
use core::fmt;

use crate::common::GridError;
use crate::coords::{self, Coord};
use crate::phases::{PlayerBoard, PlayerPhaseState};
use crate::placement::Placement;
use crate::signal::{combine_all, Derived, Signal};
use crate::vessel::{Orientation, Placeable, Position};

/// A `width`×`height` surface holding a fixed list of vessel placements.
///
/// The grid is ready once every placement has a position. Readiness is pushed:
/// every successful [`Grid::place`] re-evaluates it before returning.
pub struct Grid {
    width: usize,
    height: usize,
    placements: Vec<Placement>,
    ready: Derived<bool>,
    defeated: Signal<bool>,
}

impl Grid {
    /// Create a grid with every piece unplaced.
    pub fn new(width: usize, height: usize, pieces: Vec<Rc<dyn Placeable>>) -> Self {
        let placements = pieces.into_iter().map(Placement::new).collect();
        Self::with_placements(width, height, placements)
    }

    /// Create a grid from existing placements, placed or not.
    pub fn with_placements(width: usize, height: usize, placements: Vec<Placement>) -> Self {
        let signals: Vec<Signal<bool>> = placements.iter().map(Placement::placed).collect();
        let ready = combine_all(&signals);
        Self {
            width,
            height,
            placements,
            ready,
            defeated: Signal::new(false),
        }
    }

    /// Rebuild a grid from placements that may already carry positions.
    ///
    /// Every vessel must cover at least one cell, and every placed vessel must
    /// lie on the grid without overlapping an earlier one.
    pub fn restore(
        width: usize,
        height: usize,
        placements: Vec<Placement>,
    ) -> Result<Self, GridError> {
        let grid = Self::with_placements(width, height, placements);
        let mut taken = BTreeSet::new();
        for placement in grid.placements() {
            if placement.piece().length() == 0 {
                return Err(GridError::EmptyVessel);
            }
            for cell in placement.occupied() {
                if !grid.contains(cell) {
                    return Err(GridError::OutOfBounds {
                        x: cell.x,
                        y: cell.y,
                    });
                }
                if !taken.insert(cell) {
                    return Err(GridError::Overlaps {
                        x: cell.x,
                        y: cell.y,
                    });
                }
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Placements in the order the grid was created with.
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Every cell of the grid, x outer and y fastest. Each call starts over.
    pub fn coordinates(&self) -> impl Iterator<Item = Coord> + Clone {
        coords::coordinates(self.width, self.height)
    }

    /// Returns `true` if `coord` lies on the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Cells covered by all placed vessels.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + '_ {
        self.placements.iter().flat_map(Placement::occupied)
    }

    /// Place `piece` at (`x`, `y`) along `orientation`.
    ///
    /// The piece must belong to this grid, must not be placed yet, must fit on
    /// the grid and must not overlap another vessel. Nothing changes on error.
    pub fn place(
        &mut self,
        piece: &Rc<dyn Placeable>,
        x: i32,
        y: i32,
        orientation: Orientation,
    ) -> Result<(), GridError> {
        let index = self
            .placements
            .iter()
            .position(|p| p.holds(piece))
            .ok_or(GridError::PieceNotFound)?;
        self.place_at(index, Position::new(x, y, orientation))
    }

    /// Place the vessel at `index` in [`Grid::placements`].
    pub(crate) fn place_at(&mut self, index: usize, position: Position) -> Result<(), GridError> {
        let placement = self
            .placements
            .get(index)
            .ok_or(GridError::PieceNotFound)?;
        if placement.is_placed() {
            return Err(GridError::PieceAlreadyPlaced);
        }
        if placement.piece().length() == 0 {
            return Err(GridError::EmptyVessel);
        }
        for cell in position.cells(placement.piece().length()) {
            if !self.contains(cell) {
                return Err(GridError::OutOfBounds {
                    x: cell.x,
                    y: cell.y,
                });
            }
            if self.occupied().any(|taken| taken == cell) {
                return Err(GridError::Overlaps {
                    x: cell.x,
                    y: cell.y,
                });
            }
        }

        let Position {
            origin,
            orientation,
        } = position;
        log::debug!(
            "placing vessel of length {} at {} ({})",
            self.placements[index].piece().length(),
            origin,
            orientation
        );
        self.placements[index].place(origin.x, origin.y, orientation)
    }

    /// Emits whenever a placement changes; `true` once all are placed.
    pub fn ready(&self) -> Signal<bool> {
        self.ready.signal().clone()
    }

    pub fn is_ready(&self) -> bool {
        self.ready.current()
    }

    /// Never set in this version: there is no attack resolution.
    pub fn defeated(&self) -> Signal<bool> {
        self.defeated.clone()
    }

    /// Release the readiness subscriptions. Safe to call more than once.
    pub fn dispose(&mut self) {
        self.ready.dispose();
    }
}

impl PlayerBoard for Grid {
    fn ready(&self) -> Signal<bool> {
        Grid::ready(self)
    }
}

impl PlayerPhaseState for Grid {
    fn defeated(&self) -> Signal<bool> {
        Grid::defeated(self)
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("ready", &self.is_ready())
            .field("placements", &self.placements)
            .finish()
    }
}
