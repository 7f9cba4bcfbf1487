//! Grid coordinates and the shadow projection used to rule out overlapping
//! origins.

use core::fmt;

use crate::vessel::Orientation;

/// A cell on a grid. Signed so that shadows may step past the top or left
/// edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate `distance` cells further along `orientation`.
    pub fn step(self, distance: i32, orientation: Orientation) -> Self {
        let (dx, dy) = orientation.axis();
        Coord::new(self.x + dx * distance, self.y + dy * distance)
    }

    /// `length` coordinates running backward along `orientation`, starting
    /// with this one.
    ///
    /// For an occupied cell these are exactly the origins from which an item
    /// of `length` laid out along `orientation` would cover the cell.
    pub fn shadow(self, length: usize, orientation: Orientation) -> impl Iterator<Item = Coord> {
        (0..length as i32).map(move |i| self.step(-i, orientation))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Every cell of a `width`×`height` surface, x outer, y fastest.
pub fn coordinates(width: usize, height: usize) -> impl Iterator<Item = Coord> + Clone {
    let (width, height) = (width as i32, height as i32);
    (0..width).flat_map(move |x| (0..height).map(move |y| Coord::new(x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn horizontal_shadow_runs_left() {
        let shadow: Vec<_> = Coord::new(5, 5).shadow(3, Orientation::Horizontal).collect();
        assert!(shadow.iter().all(|c| c.y == 5));
        assert_eq!(shadow.iter().map(|c| c.x).collect::<Vec<_>>(), [5, 4, 3]);
    }

    #[test]
    fn vertical_shadow_runs_up() {
        let shadow: Vec<_> = Coord::new(5, 5).shadow(3, Orientation::Vertical).collect();
        assert!(shadow.iter().all(|c| c.x == 5));
        assert_eq!(shadow.iter().map(|c| c.y).collect::<Vec<_>>(), [5, 4, 3]);
    }

    #[test]
    fn shadow_may_leave_the_grid() {
        let shadow: Vec<_> = Coord::new(0, 1).shadow(2, Orientation::Horizontal).collect();
        assert_eq!(shadow, [Coord::new(0, 1), Coord::new(-1, 1)]);
    }

    #[test]
    fn coords_compare_by_value() {
        assert_eq!(Coord::new(1, 1), Coord::new(1, 1));
        assert_ne!(Coord::new(1, 1), Coord::new(1, 2));
    }

    #[test]
    fn coordinates_vary_y_fastest() {
        let all: Vec<_> = coordinates(2, 3).collect();
        assert_eq!(
            all,
            [
                Coord::new(0, 0),
                Coord::new(0, 1),
                Coord::new(0, 2),
                Coord::new(1, 0),
                Coord::new(1, 1),
                Coord::new(1, 2),
            ]
        );
    }
}
