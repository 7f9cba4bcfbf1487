//! Vessel definitions: the placeable capability, orientation and position.

use core::fmt;
use rand::Rng;

use crate::config::DEFAULT_SYMBOL;
use crate::coords::Coord;

/// Orientation of a vessel on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Unit step along the orientation axis.
    pub fn axis(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }

    /// Pick an orientation uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "horizontal"),
            Orientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// Anything that can be laid out on a grid. Grids compare placeables by
/// identity, so the same item is found again only through the same `Rc`.
pub trait Placeable: fmt::Debug {
    /// Number of cells the item covers.
    fn length(&self) -> usize;

    /// Symbol used when drawing the item.
    fn symbol(&self) -> char {
        DEFAULT_SYMBOL
    }
}

/// A vessel: length and display symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vessel {
    length: usize,
    symbol: char,
}

impl Vessel {
    /// Create a vessel drawn with the default symbol.
    pub const fn new(length: usize) -> Self {
        Self::with_symbol(length, DEFAULT_SYMBOL)
    }

    pub const fn with_symbol(length: usize, symbol: char) -> Self {
        Self { length, symbol }
    }
}

impl Placeable for Vessel {
    fn length(&self) -> usize {
        self.length
    }

    fn symbol(&self) -> char {
        self.symbol
    }
}

/// Origin and orientation of a placed vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub origin: Coord,
    pub orientation: Orientation,
}

impl Position {
    pub const fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self {
            origin: Coord::new(x, y),
            orientation,
        }
    }

    /// Cells covered by an item of `length` at this position.
    pub fn cells(self, length: usize) -> impl Iterator<Item = Coord> + Clone {
        (0..length as i32).map(move |i| self.origin.step(i, self.orientation))
    }
}
