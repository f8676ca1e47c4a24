use seabattle::{
    AttackStatus, Command, Coordinate, EngineError, Event, FleetError, MatchRegistry, Orientation,
    ShipDescriptor,
};

fn desc(x: i32, y: i32, orientation: Orientation, length: usize) -> ShipDescriptor {
    ShipDescriptor::new(Coordinate::new(x, y), orientation, length)
}

fn create(registry: &mut MatchRegistry) -> u32 {
    match registry
        .handle(Command::CreateMatch { first: 1, second: 2 })
        .unwrap()
        .as_slice()
    {
        [Event::MatchCreated { match_id, players }] => {
            assert_eq!(players, &[1, 2]);
            *match_id
        }
        other => panic!("unexpected events {:?}", other),
    }
}

/// Both players get a single one-cell ship; returns the opening player.
fn start(registry: &mut MatchRegistry, match_id: u32) -> u32 {
    let events = registry
        .handle(Command::PlaceFleet {
            match_id,
            player: 1,
            ships: vec![desc(0, 0, Orientation::Horizontal, 1)],
        })
        .unwrap();
    assert!(events.is_empty());
    let events = registry
        .handle(Command::PlaceFleet {
            match_id,
            player: 2,
            ships: vec![desc(9, 9, Orientation::Vertical, 1)],
        })
        .unwrap();
    match events.as_slice() {
        [Event::StartGame {
            match_id: id,
            current_player,
        }] => {
            assert_eq!(*id, match_id);
            *current_player
        }
        other => panic!("unexpected events {:?}", other),
    }
}

#[test]
fn unknown_match_is_rejected() {
    let mut registry = MatchRegistry::seeded(1);
    assert_eq!(
        registry.handle(Command::PlaceFleet {
            match_id: 42,
            player: 1,
            ships: vec![desc(0, 0, Orientation::Horizontal, 1)],
        }),
        Err(EngineError::UnknownMatch(42))
    );
    assert_eq!(
        registry.handle(Command::Attack {
            match_id: 42,
            attacker: 1,
            target: None,
        }),
        Err(EngineError::UnknownMatch(42))
    );
    assert!(registry.get(42).is_err());
}

#[test]
fn players_must_differ() {
    let mut registry = MatchRegistry::seeded(1);
    assert!(registry
        .handle(Command::CreateMatch { first: 5, second: 5 })
        .is_err());
    assert!(registry.is_empty());
}

#[test]
fn malformed_fleet_is_reported() {
    let mut registry = MatchRegistry::seeded(1);
    let id = create(&mut registry);
    assert_eq!(
        registry.handle(Command::PlaceFleet {
            match_id: id,
            player: 2,
            ships: vec![desc(9, 9, Orientation::Horizontal, 2)],
        }),
        Err(EngineError::MalformedFleet(FleetError::OutOfBounds {
            origin: Coordinate::new(9, 9),
            length: 2
        }))
    );
    assert!(!registry.get(id).unwrap().player_state(2).unwrap().is_placed());
}

#[test]
fn ship_origin_at_i32_limit_is_reported() {
    let mut registry = MatchRegistry::seeded(1);
    let id = create(&mut registry);
    assert_eq!(
        registry.handle(Command::PlaceFleet {
            match_id: id,
            player: 1,
            ships: vec![desc(i32::MAX, 0, Orientation::Horizontal, 2)],
        }),
        Err(EngineError::MalformedFleet(FleetError::OutOfBounds {
            origin: Coordinate::new(i32::MAX, 0),
            length: 2
        }))
    );
    assert_eq!(start(&mut registry, id), start_in_fresh_registry(1));
}

fn start_in_fresh_registry(seed: u64) -> u32 {
    let mut registry = MatchRegistry::seeded(seed);
    let id = create(&mut registry);
    start(&mut registry, id)
}

#[test]
fn rejected_commands_do_not_change_the_opener() {
    for seed in 0..16 {
        let mut registry = MatchRegistry::seeded(seed);
        for match_id in [7, 8, 9] {
            assert!(registry
                .handle(Command::PlaceFleet {
                    match_id,
                    player: 1,
                    ships: vec![desc(0, 0, Orientation::Horizontal, 1)],
                })
                .is_err());
        }
        let id = create(&mut registry);
        assert!(registry
            .handle(Command::PlaceFleet {
                match_id: id,
                player: 2,
                ships: vec![desc(0, 0, Orientation::Vertical, 11)],
            })
            .is_err());
        assert_eq!(start(&mut registry, id), start_in_fresh_registry(seed));
    }
}

#[test]
fn full_match_reports_and_records_the_winner() {
    let mut registry = MatchRegistry::seeded(9);
    let id = create(&mut registry);
    let opener = start(&mut registry, id);
    let other = if opener == 1 { 2 } else { 1 };
    assert_eq!(registry.get(id).unwrap().current_player(), opener);

    // Wrong player: rejected, nothing changes.
    assert_eq!(
        registry.handle(Command::Attack {
            match_id: id,
            attacker: other,
            target: Some(Coordinate::new(5, 5)),
        }),
        Err(EngineError::NotYourTurn)
    );

    // Opener misses, turn moves.
    let events = registry
        .handle(Command::Attack {
            match_id: id,
            attacker: opener,
            target: Some(Coordinate::new(5, 5)),
        })
        .unwrap();
    assert_eq!(events.len(), 2);
    match &events[0] {
        Event::AttackOutcome { cells, attacker, .. } => {
            assert_eq!(*attacker, opener);
            assert_eq!(cells.len(), 1);
            assert_eq!(cells[0].status, AttackStatus::Miss);
        }
        e => panic!("unexpected {:?}", e),
    }
    assert_eq!(
        events[1],
        Event::TurnChanged {
            match_id: id,
            current_player: other
        }
    );

    // The other player sinks the opener's only ship.
    let target = if other == 1 {
        Coordinate::new(9, 9)
    } else {
        Coordinate::new(0, 0)
    };
    let events = registry
        .handle(Command::Attack {
            match_id: id,
            attacker: other,
            target: Some(target),
        })
        .unwrap();
    match events.as_slice() {
        [Event::AttackOutcome { cells, .. }, Event::MatchFinished { winner, .. }] => {
            assert!(cells
                .iter()
                .any(|c| c.position == target && c.status == AttackStatus::Killed));
            assert_eq!(*winner, other);
        }
        other => panic!("unexpected events {:?}", other),
    }

    assert_eq!(registry.get(id).unwrap_err(), EngineError::UnknownMatch(id));
    assert_eq!(registry.winners(), vec![(other, 1)]);
}

#[test]
fn attack_without_target_picks_one() {
    let mut registry = MatchRegistry::seeded(4);
    let id = create(&mut registry);
    let opener = start(&mut registry, id);
    let events = registry
        .handle(Command::Attack {
            match_id: id,
            attacker: opener,
            target: None,
        })
        .unwrap();
    match &events[0] {
        Event::AttackOutcome { cells, target, .. } => {
            assert!(!cells.is_empty());
            assert!(cells.iter().any(|c| c.position == *target));
        }
        e => panic!("unexpected {:?}", e),
    }
}

#[test]
fn duplicate_attack_keeps_turn_and_reports_nothing() {
    let mut registry = MatchRegistry::seeded(2);
    let id = create(&mut registry);
    let opener = start(&mut registry, id);
    let other = if opener == 1 { 2 } else { 1 };

    let miss = |attacker| Command::Attack {
        match_id: id,
        attacker,
        target: Some(Coordinate::new(4, 4)),
    };
    registry.handle(miss(opener)).unwrap();
    registry.handle(miss(other)).unwrap();
    let events = registry.handle(miss(opener)).unwrap();
    assert_eq!(
        events,
        vec![Event::AttackOutcome {
            match_id: id,
            attacker: opener,
            target: Coordinate::new(4, 4),
            cells: vec![],
        }]
    );
    assert_eq!(registry.get(id).unwrap().current_player(), opener);
}
