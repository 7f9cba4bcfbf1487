#![cfg(feature = "std")]

//! Console rendering of grids.

use std::collections::BTreeMap;
use std::fmt::Write;

use crate::{coords::Coord, game::Game, grid::Grid};

const EMPTY_CELL: char = '.';

/// Draw `grid` as text: its size and vessel lengths, then one line per row
/// with each placed vessel's symbol on the cells it covers.
pub fn render_grid(grid: &Grid) -> String {
    let mut cells: BTreeMap<Coord, char> = BTreeMap::new();
    for placement in grid.placements() {
        let symbol = placement.piece().symbol();
        for cell in placement.occupied() {
            cells.insert(cell, symbol);
        }
    }

    let lengths: Vec<String> = grid
        .placements()
        .iter()
        .map(|p| p.piece().length().to_string())
        .collect();

    let mut out = String::new();
    let _ = writeln!(out, "Width: {}", grid.width());
    let _ = writeln!(out, "Height: {}", grid.height());
    let _ = writeln!(out, "---");
    let _ = writeln!(out, "Vessels: {}", lengths.join(", "));
    let _ = writeln!(out, "---");

    out.push_str("   ");
    for x in 0..grid.width() {
        let _ = write!(out, " {}", x % 10);
    }
    out.push('\n');
    for y in 0..grid.height() {
        let _ = write!(out, "{:2} ", y);
        for x in 0..grid.width() {
            let coord = Coord::new(x as i32, y as i32);
            let ch = cells.get(&coord).copied().unwrap_or(EMPTY_CELL);
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

pub fn print_grid(grid: &Grid) {
    std::print!("{}", render_grid(grid));
}

/// Print a summary of `game` followed by each of its grids.
pub fn print_game(game: &Game) {
    std::println!("Game {} ({})", game.id(), game.phase());
    for player in game.players() {
        let state = if player.is_active() { "active" } else { "left" };
        std::println!("  player {} [{}]", player.id(), state);
    }
    for action in game.actions() {
        std::println!("  - {}", action);
    }
    for (index, grid) in game.arena().grids().iter().enumerate() {
        std::println!("\nGrid {}:", index + 1);
        print_grid(grid);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vessel::{Orientation, Placeable, Vessel};
    use std::rc::Rc;

    #[test]
    fn render_draws_rows_top_to_bottom() {
        let a: Rc<dyn Placeable> = Rc::new(Vessel::with_symbol(2, 'A'));
        let b: Rc<dyn Placeable> = Rc::new(Vessel::with_symbol(3, 'B'));
        let mut grid = Grid::new(3, 3, vec![Rc::clone(&a), Rc::clone(&b)]);
        grid.place(&a, 0, 0, Orientation::Horizontal).unwrap();
        grid.place(&b, 2, 0, Orientation::Vertical).unwrap();

        let text = render_grid(&grid);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Width: 3");
        assert_eq!(lines[1], "Height: 3");
        assert_eq!(lines[3], "Vessels: 2, 3");
        assert_eq!(lines[5], "    0 1 2");
        assert_eq!(lines[6], " 0  A A B");
        assert_eq!(lines[7], " 1  . . B");
        assert_eq!(lines[8], " 2  . . B");
    }

    #[test]
    fn unplaced_vessels_are_listed_but_not_drawn() {
        let grid = Grid::new(2, 1, vec![Rc::new(Vessel::new(2)) as Rc<dyn Placeable>]);
        let text = render_grid(&grid);
        assert!(text.contains("Vessels: 2"));
        assert!(text.ends_with(" 0  . .\n"));
    }
}
