use alloc::{rc::Rc, vec::Vec};

use crate::vessel::{Placeable, Vessel};

pub const DEFAULT_GRID_WIDTH: usize = 10;
pub const DEFAULT_GRID_HEIGHT: usize = 10;
pub const NUM_PLAYERS: usize = 2;

/// Fewest grids an arena can be built from.
pub const MIN_ARENA_GRIDS: usize = 2;

/// Symbol drawn for vessels that do not pick their own.
pub const DEFAULT_SYMBOL: char = 'V';

/// Vessel lengths of the standard fleet.
pub const DEFAULT_FLEET: [usize; 5] = [2, 3, 3, 4, 5];

/// Total number of cells covered by the standard fleet.
pub const TOTAL_FLEET_CELLS: usize = 2 + 3 + 3 + 4 + 5;

/// A fresh set of vessels for the standard fleet, one per length.
pub fn default_fleet() -> Vec<Rc<dyn Placeable>> {
    DEFAULT_FLEET
        .iter()
        .map(|&length| {
            let vessel: Rc<dyn Placeable> = Rc::new(Vessel::new(length));
            vessel
        })
        .collect()
}
