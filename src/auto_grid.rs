//! Random, non-overlapping vessel placement.

use alloc::{collections::BTreeSet, rc::Rc, vec::Vec};
use core::ops::{Deref, DerefMut};
use rand::Rng;

use crate::common::GridError;
use crate::coords::{self, Coord};
use crate::grid::Grid;
use crate::vessel::{Orientation, Placeable, Position};

/// A grid whose vessels were all laid out at random when it was built.
#[derive(Debug)]
pub struct AutoGrid {
    grid: Grid,
}

impl AutoGrid {
    /// Build a `width`×`height` grid and place every piece at random.
    ///
    /// Fails with [`GridError::GridFull`] when a piece has nowhere left to go;
    /// no grid is returned in that case.
    pub fn new<R: Rng + ?Sized>(
        width: usize,
        height: usize,
        pieces: Vec<Rc<dyn Placeable>>,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        Self::from_grid(Grid::new(width, height, pieces), rng)
    }

    /// Place every still unplaced piece of `grid`, in list order. Pieces that
    /// already have a position are left alone.
    pub fn from_grid<R: Rng + ?Sized>(mut grid: Grid, rng: &mut R) -> Result<Self, GridError> {
        for index in 0..grid.placements().len() {
            let placement = &grid.placements()[index];
            if placement.is_placed() {
                continue;
            }
            let length = placement.piece().length();
            let position = random_placement(&grid, length, rng)?;
            grid.place_at(index, position)?;
        }
        Ok(Self { grid })
    }

    pub fn into_inner(self) -> Grid {
        self.grid
    }
}

impl Deref for AutoGrid {
    type Target = Grid;

    fn deref(&self) -> &Grid {
        &self.grid
    }
}

impl DerefMut for AutoGrid {
    fn deref_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

impl From<AutoGrid> for Grid {
    fn from(auto: AutoGrid) -> Self {
        auto.grid
    }
}

/// Returns a random free position for an item of `length` on `grid`.
///
/// The orientation is drawn first. Origins are restricted to the sub-grid an
/// item of that length fits in, minus the shadow of every occupied cell; one
/// of the remaining origins is drawn uniformly.
pub fn random_placement<R: Rng + ?Sized>(
    grid: &Grid,
    length: usize,
    rng: &mut R,
) -> Result<Position, GridError> {
    if length == 0 {
        return Err(GridError::EmptyVessel);
    }
    let orientation = Orientation::random(rng);
    let span = length.saturating_sub(1);
    let (width, height) = match orientation {
        Orientation::Horizontal => (grid.width().saturating_sub(span), grid.height()),
        Orientation::Vertical => (grid.width(), grid.height().saturating_sub(span)),
    };

    let forbidden: BTreeSet<Coord> = grid
        .occupied()
        .flat_map(|cell| cell.shadow(length, orientation))
        .collect();
    let candidates: Vec<Coord> = coords::coordinates(width, height)
        .filter(|origin| !forbidden.contains(origin))
        .collect();

    if candidates.is_empty() {
        log::warn!(
            "no free origin for a {} vessel of length {}",
            orientation,
            length
        );
        return Err(GridError::GridFull {
            length,
            orientation,
        });
    }
    let origin = candidates[rng.random_range(0..candidates.len())];
    Ok(Position {
        origin,
        orientation,
    })
}
