//! Binding of one vessel to its (possibly absent) position on a grid.

use alloc::rc::Rc;
use core::fmt;

use crate::common::GridError;
use crate::coords::Coord;
use crate::signal::Signal;
use crate::vessel::{Orientation, Placeable, Position};

/// A vessel and where it sits. Once placed, a vessel is never moved or
/// removed.
pub struct Placement {
    piece: Rc<dyn Placeable>,
    position: Option<Position>,
    placed: Signal<bool>,
}

impl Placement {
    /// An unplaced binding for `piece`.
    pub fn new(piece: Rc<dyn Placeable>) -> Self {
        Self::with_position(piece, None)
    }

    /// A binding that may already carry a position, as when restoring a saved
    /// grid.
    pub fn with_position(piece: Rc<dyn Placeable>, position: Option<Position>) -> Self {
        let placed = Signal::new(position.is_some());
        Self {
            piece,
            position,
            placed,
        }
    }

    pub fn piece(&self) -> &Rc<dyn Placeable> {
        &self.piece
    }

    pub fn position(&self) -> Option<Position> {
        self.position
    }

    pub fn is_placed(&self) -> bool {
        self.position.is_some()
    }

    /// Emits `true` when the vessel gets its position.
    pub fn placed(&self) -> Signal<bool> {
        self.placed.clone()
    }

    /// Returns `true` if this binding is for exactly `piece`.
    pub fn holds(&self, piece: &Rc<dyn Placeable>) -> bool {
        Rc::ptr_eq(&self.piece, piece)
    }

    /// Give the vessel its position. Bounds and overlaps are the grid's
    /// concern; see [`crate::Grid::place`].
    pub fn place(&mut self, x: i32, y: i32, orientation: Orientation) -> Result<(), GridError> {
        if self.position.is_some() {
            return Err(GridError::PieceAlreadyPlaced);
        }
        self.position = Some(Position::new(x, y, orientation));
        self.placed.emit(true);
        Ok(())
    }

    /// Cells covered by the vessel, origin first. Empty while unplaced.
    pub fn occupied(&self) -> impl Iterator<Item = Coord> + Clone {
        let length = self.piece.length();
        self.position
            .into_iter()
            .flat_map(move |position| position.cells(length))
    }
}

impl fmt::Debug for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Placement")
            .field("piece", &self.piece)
            .field("position", &self.position)
            .finish()
    }
}
