use std::collections::BTreeSet;

use seabattle::{
    resolve, AttackStatus, CellOutcome, CellStatus, Coordinate, EngineError, GameStatus, Match,
    Orientation, ShipDescriptor,
};

fn desc(x: i32, y: i32, orientation: Orientation, length: usize) -> ShipDescriptor {
    ShipDescriptor::new(Coordinate::new(x, y), orientation, length)
}

fn at(x: i32, y: i32) -> Coordinate {
    Coordinate::new(x, y)
}

/// Player 1 owns a single ship at (0, 0); player 2 the given fleet. Player 1 opens.
fn ready_match(defender_fleet: &[ShipDescriptor]) -> Match {
    let mut game = Match::new(0, 1, 2);
    game.place_fleet(1, &[desc(0, 0, Orientation::Horizontal, 1)])
        .unwrap();
    game.place_fleet(2, defender_fleet).unwrap();
    game
}

fn as_set(outcome: &[CellOutcome]) -> BTreeSet<(i32, i32, u8)> {
    outcome
        .iter()
        .map(|o| {
            let tag = match o.status {
                AttackStatus::Miss => 0,
                AttackStatus::Shot => 1,
                AttackStatus::Killed => 2,
            };
            (o.position.x, o.position.y, tag)
        })
        .collect()
}

#[test]
fn hit_then_kill_of_two_cell_ship() -> Result<(), EngineError> {
    let mut game = ready_match(&[desc(3, 3, Orientation::Horizontal, 2)]);

    let first = game.attack(1, at(3, 3))?;
    assert_eq!(first.outcome, vec![CellOutcome::new(at(3, 3), AttackStatus::Shot)]);
    assert_eq!(first.current_player, 1);
    assert!(!first.turn_changed());
    assert_eq!(first.winner, None);

    let second = game.attack(1, at(4, 3))?;
    assert_eq!(second.current_player, 1);

    let mut expected = BTreeSet::new();
    expected.insert((3, 3, 2));
    expected.insert((4, 3, 2));
    for (x, y) in [
        (2, 3),
        (5, 3),
        (3, 2),
        (4, 2),
        (3, 4),
        (4, 4),
        (2, 2),
        (2, 4),
        (5, 2),
        (5, 4),
    ] {
        expected.insert((x, y, 0));
    }
    assert_eq!(as_set(&second.outcome), expected);
    assert_eq!(second.outcome.len(), 12, "no coordinate may appear twice");

    let defender = game.player_state(2)?;
    assert!(defender.fleet()[0].is_killed());
    assert_eq!(defender.board().get(at(3, 3))?, CellStatus::Killed);
    assert_eq!(defender.board().get(at(5, 4))?, CellStatus::Miss);
    assert_eq!(defender.board().count(CellStatus::Miss), 10);

    assert_eq!(second.winner, Some(1));
    assert_eq!(game.winner(), Some(1));
    assert!(game.is_over());
    assert_eq!(game.status(), GameStatus::Finished { winner: 1 });

    let attacker = game.player_state(1)?;
    assert_eq!(attacker.hits(), 2);
    assert_eq!(attacker.kills(), 1);
    Ok(())
}

#[test]
fn miss_passes_the_turn() -> Result<(), EngineError> {
    let mut game = ready_match(&[desc(3, 3, Orientation::Horizontal, 2)]);
    let report = game.attack(1, at(9, 9))?;
    assert_eq!(report.outcome, vec![CellOutcome::new(at(9, 9), AttackStatus::Miss)]);
    assert!(report.turn_changed());
    assert_eq!(game.current_player(), 2);
    assert_eq!(
        game.player_state(2)?.board().get(at(9, 9))?,
        CellStatus::Miss
    );
    Ok(())
}

#[test]
fn duplicate_target_is_a_no_op() -> Result<(), EngineError> {
    let mut game = ready_match(&[desc(3, 3, Orientation::Horizontal, 3)]);
    game.attack(1, at(3, 3))?;
    let board_after_first = *game.player_state(2)?.board();

    let again = game.attack(1, at(3, 3))?;
    assert!(again.outcome.is_empty());
    assert_eq!(again.current_player, 1);
    assert_eq!(*game.player_state(2)?.board(), board_after_first);
    assert_eq!(game.player_state(1)?.hits(), 1);

    // A missed cell is also a duplicate once the turn comes back.
    game.attack(1, at(9, 9))?;
    game.attack(2, at(8, 8))?;
    let board_before = *game.player_state(2)?.board();
    let again = game.attack(1, at(9, 9))?;
    assert!(again.outcome.is_empty());
    assert_eq!(game.current_player(), 1);
    assert_eq!(*game.player_state(2)?.board(), board_before);
    Ok(())
}

#[test]
fn cells_marked_around_a_kill_are_duplicates() -> Result<(), EngineError> {
    let mut game = ready_match(&[
        desc(0, 5, Orientation::Vertical, 1),
        desc(9, 0, Orientation::Vertical, 1),
    ]);
    game.attack(1, at(0, 5))?;
    let again = game.attack(1, at(1, 5))?;
    assert!(again.outcome.is_empty());
    assert_eq!(game.current_player(), 1);
    Ok(())
}

#[test]
fn kill_does_not_touch_already_marked_cells() -> Result<(), EngineError> {
    let mut game = ready_match(&[
        desc(5, 5, Orientation::Horizontal, 1),
        desc(6, 6, Orientation::Horizontal, 1),
    ]);
    game.attack(1, at(4, 4))?;
    game.attack(2, at(9, 9))?;
    assert_eq!(game.current_player(), 1);

    let report = game.attack(1, at(5, 5))?;
    let cells = as_set(&report.outcome);
    assert!(cells.contains(&(5, 5, 2)));
    assert!(!cells.iter().any(|&(x, y, _)| (x, y) == (4, 4)));
    assert!(!cells.iter().any(|&(x, y, _)| (x, y) == (6, 6)));
    assert_eq!(report.outcome.len(), 1 + 6);

    let board = game.player_state(2)?.board();
    assert_eq!(board.get(at(6, 6))?, CellStatus::Ship);
    assert_eq!(board.get(at(4, 4))?, CellStatus::Miss);
    assert_eq!(report.winner, None);
    Ok(())
}

#[test]
fn kill_at_board_edge_only_marks_in_bounds_neighbors() -> Result<(), EngineError> {
    let mut game = ready_match(&[
        desc(0, 0, Orientation::Vertical, 2),
        desc(9, 9, Orientation::Horizontal, 1),
    ]);
    game.attack(1, at(0, 0))?;
    let report = game.attack(1, at(0, 1))?;
    let mut expected = BTreeSet::new();
    expected.insert((0, 0, 2));
    expected.insert((0, 1, 2));
    for (x, y) in [(1, 0), (1, 1), (1, 2), (0, 2)] {
        expected.insert((x, y, 0));
    }
    assert_eq!(as_set(&report.outcome), expected);
    Ok(())
}

#[test]
fn wrong_player_is_rejected_without_mutation() -> Result<(), EngineError> {
    let mut game = ready_match(&[desc(3, 3, Orientation::Horizontal, 2)]);
    let before = game.player_state(1)?.clone();
    assert_eq!(game.attack(2, at(0, 0)).unwrap_err(), EngineError::NotYourTurn);
    assert_eq!(game.attack(7, at(0, 0)).unwrap_err(), EngineError::NotYourTurn);
    assert_eq!(game.player_state(1)?, &before);
    assert_eq!(game.current_player(), 1);
    Ok(())
}

#[test]
fn out_of_bounds_is_rejected_without_mutation() -> Result<(), EngineError> {
    let mut game = ready_match(&[desc(3, 3, Orientation::Horizontal, 2)]);
    let before = game.player_state(2)?.clone();
    for (x, y) in [(-1, 3), (10, 3), (3, 10), (3, -1)] {
        assert_eq!(
            game.attack(1, at(x, y)).unwrap_err(),
            EngineError::InvalidCoordinate { x, y }
        );
    }
    assert_eq!(game.player_state(2)?, &before);
    assert_eq!(game.current_player(), 1);
    Ok(())
}

#[test]
fn attacks_need_both_fleets() {
    let mut game = Match::new(0, 1, 2);
    game.place_fleet(1, &[desc(0, 0, Orientation::Horizontal, 1)])
        .unwrap();
    assert!(!game.is_ready());
    assert_eq!(game.status(), GameStatus::Placing);
    assert_eq!(game.winner(), None);
    assert_eq!(
        resolve(&mut game, 1, at(0, 0)).unwrap_err(),
        EngineError::FleetNotPlaced
    );
}

#[test]
fn finished_match_refuses_attacks() -> Result<(), EngineError> {
    let mut game = ready_match(&[desc(3, 3, Orientation::Horizontal, 1)]);
    game.attack(1, at(3, 3))?;
    assert_eq!(game.winner(), Some(1));
    assert_eq!(game.attack(1, at(0, 0)).unwrap_err(), EngineError::MatchOver);
    Ok(())
}

#[test]
fn second_player_can_win() -> Result<(), EngineError> {
    let mut game = ready_match(&[desc(3, 3, Orientation::Horizontal, 1)]);
    game.set_first_player(2)?;
    assert_eq!(game.current_player(), 2);
    let report = game.attack(2, at(0, 0))?;
    assert_eq!(report.winner, Some(2));
    assert_eq!(game.winner(), Some(2));
    Ok(())
}

#[test]
fn shared_cell_kills_every_completed_ship() -> Result<(), EngineError> {
    let mut game = ready_match(&[
        desc(0, 0, Orientation::Horizontal, 1),
        desc(0, 0, Orientation::Horizontal, 2),
    ]);

    let report = game.attack(1, at(1, 0))?;
    assert_eq!(as_set(&report.outcome), BTreeSet::from([(1, 0, 1)]));

    let report = game.attack(1, at(0, 0))?;
    assert_eq!(
        as_set(&report.outcome),
        BTreeSet::from([
            (0, 0, 2),
            (1, 0, 2),
            (0, 1, 0),
            (1, 1, 0),
            (2, 0, 0),
            (2, 1, 0),
        ])
    );
    let defender = game.player_state(2)?;
    assert!(defender.fleet().iter().all(|ship| ship.is_killed()));
    assert_eq!(defender.ships_afloat(), 0);
    assert_eq!(game.player_state(1)?.kills(), 2);
    assert_eq!(game.player_state(1)?.hits(), 2);
    assert_eq!(report.winner, Some(1));
    Ok(())
}
