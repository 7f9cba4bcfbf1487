use conflict_vessels::{
    from_bytes, from_json, from_json_file, to_bytes, to_json, to_json_file, Arena, Game, GameId,
    GamePhase, Grid, Orientation, PersistenceError, Placeable, Player, PlayerId, Position,
    Vessel,
};
use rand::{rngs::SmallRng, SeedableRng};
use std::rc::Rc;

/// Two grids: the first with one placed and one unplaced vessel, the second
/// empty of placements.
fn mixed_game() -> Game {
    let placed: Rc<dyn Placeable> = Rc::new(Vessel::with_symbol(3, 'C'));
    let loose: Rc<dyn Placeable> = Rc::new(Vessel::new(2));
    let mut first = Grid::new(8, 6, vec![Rc::clone(&placed), Rc::clone(&loose)]);
    first.place(&placed, 4, 1, Orientation::Vertical).unwrap();
    let second = Grid::new(5, 5, Vec::new());

    let players = vec![Player::with_id(PlayerId(3)), Player::with_id(PlayerId(1))];
    let mut game = Game::new(GameId(0xfeed), Arena::pair(first, second), players);
    game.record_action("Player 0000000000000003 placed a vessel");
    game
}

fn assert_same_game(restored: &Game, original: &Game) {
    assert_eq!(restored.id(), original.id());
    assert_eq!(restored.phase(), original.phase());
    assert_eq!(restored.actions(), original.actions());
    let ids = |g: &Game| g.players().iter().map(Player::id).collect::<Vec<_>>();
    assert_eq!(ids(restored), ids(original));

    let grids = restored.arena().grids().iter().zip(original.arena().grids());
    for (a, b) in grids {
        assert_eq!((a.width(), a.height()), (b.width(), b.height()));
        let layout = |g: &Grid| {
            g.placements()
                .iter()
                .map(|p| (p.piece().length(), p.piece().symbol(), p.position()))
                .collect::<Vec<_>>()
        };
        assert_eq!(layout(a), layout(b));
        assert_eq!(a.is_ready(), b.is_ready());
    }
}

#[test]
fn json_round_trip_preserves_the_game() {
    let game = mixed_game();
    let json = to_json(&game).unwrap();
    let restored = from_json(&json).unwrap();
    assert_same_game(&restored, &game);
    assert_eq!(restored.phase(), GamePhase::Setup);
    assert_eq!(
        restored.arena().grids()[0].placements()[0].position(),
        Some(Position::new(4, 1, Orientation::Vertical))
    );
    assert_eq!(restored.arena().grids()[0].placements()[1].position(), None);
}

#[test]
fn restored_game_is_live() {
    let game = mixed_game();
    let mut restored = from_json(&to_json(&game).unwrap()).unwrap();
    let loose = Rc::clone(restored.arena().grids()[0].placements()[1].piece());
    restored
        .arena_mut()
        .grid_mut(0)
        .unwrap()
        .place(&loose, 0, 0, Orientation::Horizontal)
        .unwrap();
    assert_eq!(restored.phase(), GamePhase::Action);
}

#[test]
fn stored_phase_wins_over_readiness() {
    let mut game = mixed_game();
    game.abandon(PlayerId(1)).unwrap();
    let restored = from_json(&to_json(&game).unwrap()).unwrap();
    assert_eq!(restored.phase(), GamePhase::Ended);
    assert_same_game(&restored, &game);
}

#[test]
fn unplaced_positions_are_written_as_null() {
    let json = to_json(&mixed_game()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let vessels = &value["arena"]["grids"][0]["vessels"];
    assert!(vessels[1]["position"].is_null());
    assert_eq!(vessels[0]["position"]["x"], 4);
    assert_eq!(value["players"][1]["id"], 1);
}

#[test]
fn empty_and_invalid_json_are_errors() {
    assert!(matches!(from_json(""), Err(PersistenceError::EmptyInput)));
    assert!(matches!(from_json("   "), Err(PersistenceError::EmptyInput)));
    assert!(matches!(from_json("[1, 2, 3]"), Err(PersistenceError::Json(_))));
    assert!(matches!(
        from_json(r#"{"id": "not a number"}"#),
        Err(PersistenceError::Json(_))
    ));
}

#[test]
fn binary_round_trip_preserves_the_game() {
    let game = mixed_game();
    let bytes = to_bytes(&game).unwrap();
    let restored = from_bytes(&bytes).unwrap();
    assert_same_game(&restored, &game);
}

#[test]
fn truncated_bytes_are_an_error() {
    let bytes = to_bytes(&mixed_game()).unwrap();
    let result = from_bytes(&bytes[..bytes.len() / 2]);
    assert!(matches!(result, Err(PersistenceError::Binary(_))));
}

#[test]
fn default_game_survives_a_file_round_trip() {
    let mut rng = SmallRng::seed_from_u64(77);
    let game = Game::create(&mut rng).unwrap();
    let path = std::env::temp_dir().join(format!("conflict_vessels_{}.json", game.id()));

    to_json_file(&game, &path).unwrap();
    let restored = from_json_file(&path).unwrap();
    let _ = std::fs::remove_file(&path);
    assert_same_game(&restored, &game);
    assert_eq!(restored.phase(), GamePhase::Action);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("conflict_vessels_missing_save.json");
    assert!(matches!(from_json_file(path), Err(PersistenceError::Io(_))));
}
