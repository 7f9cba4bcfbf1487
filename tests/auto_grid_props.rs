use conflict_vessels::{
    default_fleet, AutoGrid, Coord, Grid, GridError, Placeable, Vessel, TOTAL_FLEET_CELLS,
};
use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use std::collections::BTreeSet;
use std::rc::Rc;

fn fleet(lengths: &[usize]) -> Vec<Rc<dyn Placeable>> {
    lengths
        .iter()
        .map(|&l| Rc::new(Vessel::new(l)) as Rc<dyn Placeable>)
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn default_fleet_never_overlaps(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid = AutoGrid::new(10, 10, default_fleet(), &mut rng).unwrap();
        let cells: Vec<Coord> = grid.occupied().collect();
        let unique: BTreeSet<Coord> = cells.iter().copied().collect();
        prop_assert_eq!(cells.len(), TOTAL_FLEET_CELLS);
        prop_assert_eq!(unique.len(), cells.len());
        prop_assert!(cells.iter().all(|c| grid.contains(*c)));
        prop_assert!(grid.is_ready());
    }

    #[test]
    fn small_fleets_stay_on_the_grid(
        seed in any::<u64>(),
        width in 3usize..8,
        height in 3usize..8,
        lengths in prop::collection::vec(1usize..3, 1..4),
    ) {
        let mut rng = SmallRng::seed_from_u64(seed);
        match AutoGrid::new(width, height, fleet(&lengths), &mut rng) {
            Ok(grid) => {
                let cells: Vec<Coord> = grid.occupied().collect();
                let unique: BTreeSet<Coord> = cells.iter().copied().collect();
                prop_assert_eq!(cells.len(), lengths.iter().sum::<usize>());
                prop_assert_eq!(unique.len(), cells.len());
                prop_assert!(cells.iter().all(|c| grid.contains(*c)));
            }
            Err(err) => prop_assert!(
                matches!(err, GridError::GridFull { .. }),
                "unexpected error {:?}",
                err
            ),
        }
    }
}

#[test]
fn two_pairs_do_not_fit_in_a_column_of_three() {
    for seed in 0..32 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let result = AutoGrid::new(1, 3, fleet(&[2, 2]), &mut rng);
        assert!(matches!(result, Err(GridError::GridFull { length: 2, .. })));
    }
}

#[test]
fn auto_grid_converts_into_a_plain_grid() {
    let mut rng = SmallRng::seed_from_u64(99);
    let grid: Grid = AutoGrid::new(6, 6, fleet(&[3, 2]), &mut rng).unwrap().into();
    assert!(grid.is_ready());
    assert_eq!(grid.placements().len(), 2);
}
