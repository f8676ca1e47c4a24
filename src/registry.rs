#![cfg(feature = "std")]

use std::collections::HashMap;

use log::{info, warn};
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    common::{EngineError, MatchId, PlayerId},
    game::{AttackReport, Match},
    grid::Coordinate,
    protocol::{Command, Event, Reply},
    ship::ShipDescriptor,
};

/// Owns every live match and applies session commands to them one at a time.
///
/// Finished matches are dropped as soon as their winner is reported; the
/// winner is credited in the wins table.
pub struct MatchRegistry {
    matches: HashMap<MatchId, Match>,
    next_id: MatchId,
    wins: HashMap<PlayerId, u32>,
    rng: SmallRng,
}

impl MatchRegistry {
    pub fn new(rng: SmallRng) -> Self {
        Self {
            matches: HashMap::new(),
            next_id: 0,
            wins: HashMap::new(),
            rng,
        }
    }

    /// Registry with a reproducible random stream.
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }

    /// Number of live matches.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn get(&self, id: MatchId) -> Result<&Match, EngineError> {
        self.matches.get(&id).ok_or(EngineError::UnknownMatch(id))
    }

    /// Pair two distinct players into a new match.
    pub fn create_match(&mut self, first: PlayerId, second: PlayerId) -> Result<MatchId, EngineError> {
        if first == second {
            return Err(EngineError::UnknownPlayer(second));
        }
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.matches.insert(id, Match::new(id, first, second));
        Ok(id)
    }

    /// Wins per player, most wins first, ties by player id.
    pub fn winners(&self) -> Vec<(PlayerId, u32)> {
        let mut table: Vec<_> = self.wins.iter().map(|(&p, &w)| (p, w)).collect();
        table.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        table
    }

    /// Apply `command`. Rejections leave every match as it was.
    pub fn handle(&mut self, command: Command) -> Reply {
        let result = match command {
            Command::CreateMatch { first, second } => {
                self.create_match(first, second).map(|match_id| {
                    vec![Event::MatchCreated {
                        match_id,
                        players: [first, second],
                    }]
                })
            }
            Command::PlaceFleet {
                match_id,
                player,
                ships,
            } => self.place_fleet(match_id, player, &ships),
            Command::Attack {
                match_id,
                attacker,
                target,
            } => self.attack(match_id, attacker, target),
        };
        if let Err(e) = &result {
            warn!("command rejected: {}", e);
        }
        result
    }

    fn place_fleet(
        &mut self,
        match_id: MatchId,
        player: PlayerId,
        ships: &[ShipDescriptor],
    ) -> Reply {
        let game = self
            .matches
            .get_mut(&match_id)
            .ok_or(EngineError::UnknownMatch(match_id))?;
        game.place_fleet(player, ships)?;
        if !game.is_ready() {
            return Ok(Vec::new());
        }
        let [a, b] = game.player_ids();
        let opener = if self.rng.random() { a } else { b };
        game.set_first_player(opener)?;
        info!("match {} started, player {} opens", match_id, opener);
        Ok(vec![Event::StartGame {
            match_id,
            current_player: opener,
        }])
    }

    fn attack(
        &mut self,
        match_id: MatchId,
        attacker: PlayerId,
        target: Option<Coordinate>,
    ) -> Reply {
        let game = self
            .matches
            .get_mut(&match_id)
            .ok_or(EngineError::UnknownMatch(match_id))?;
        let report = match target {
            Some(t) => game.attack(attacker, t)?,
            None => game.random_attack(attacker, &mut self.rng)?,
        };
        let events = report_events(match_id, &report);
        if let Some(winner) = report.winner {
            *self.wins.entry(winner).or_insert(0) += 1;
            self.matches.remove(&match_id);
        }
        Ok(events)
    }
}

/// Events describing one resolved attack.
pub fn report_events(match_id: MatchId, report: &AttackReport) -> Vec<Event> {
    let mut events = vec![Event::AttackOutcome {
        match_id,
        attacker: report.attacker,
        target: report.target,
        cells: report.outcome.clone(),
    }];
    if report.turn_changed() {
        events.push(Event::TurnChanged {
            match_id,
            current_player: report.current_player,
        });
    }
    if let Some(winner) = report.winner {
        events.push(Event::MatchFinished { match_id, winner });
    }
    events
}
