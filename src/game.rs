//! Match state: two players, the turn pointer and winner detection.

use core::fmt;

use log::info;
use rand::Rng;

use crate::attack::{self, AttackOutcome};
use crate::board::PlayerState;
use crate::common::{EngineError, MatchId, PlayerId};
use crate::grid::Coordinate;
use crate::picker;
use crate::ship::ShipDescriptor;

/// Current status of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// At least one fleet is still missing.
    Placing,
    InProgress,
    Finished { winner: PlayerId },
}

/// Everything the session layer needs to report after a resolved attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttackReport {
    pub attacker: PlayerId,
    pub target: Coordinate,
    pub outcome: AttackOutcome,
    /// Player holding the turn after the attack.
    pub current_player: PlayerId,
    /// Set once the defender's whole fleet is destroyed.
    pub winner: Option<PlayerId>,
}

impl AttackReport {
    /// Whether the turn moved to the other player.
    pub fn turn_changed(&self) -> bool {
        self.current_player != self.attacker
    }
}

/// A match between exactly two players.
pub struct Match {
    id: MatchId,
    players: [PlayerState; 2],
    current: usize,
    started: bool,
}

impl Match {
    /// Create a match; `first` holds the turn until [`set_first_player`](Self::set_first_player).
    ///
    /// The two ids must differ, otherwise the second seat is unreachable.
    /// `MatchRegistry::create_match` rejects equal ids before getting here.
    pub fn new(id: MatchId, first: PlayerId, second: PlayerId) -> Self {
        debug_assert_ne!(first, second, "a match needs two distinct players");
        info!("match {} created for players {} and {}", id, first, second);
        Match {
            id,
            players: [PlayerState::new(first), PlayerState::new(second)],
            current: 0,
            started: false,
        }
    }

    pub fn id(&self) -> MatchId {
        self.id
    }

    /// Ids of both players in creation order.
    pub fn player_ids(&self) -> [PlayerId; 2] {
        [self.players[0].id(), self.players[1].id()]
    }

    fn slot_of(&self, player: PlayerId) -> Result<usize, EngineError> {
        self.players
            .iter()
            .position(|p| p.id() == player)
            .ok_or(EngineError::UnknownPlayer(player))
    }

    /// State of `player`.
    pub fn player_state(&self, player: PlayerId) -> Result<&PlayerState, EngineError> {
        Ok(&self.players[self.slot_of(player)?])
    }

    /// State of the player facing `player`.
    pub fn opponent_state(&self, player: PlayerId) -> Result<&PlayerState, EngineError> {
        Ok(&self.players[1 - self.slot_of(player)?])
    }

    pub(crate) fn player(&self, slot: usize) -> &PlayerState {
        &self.players[slot]
    }

    pub(crate) fn player_mut(&mut self, slot: usize) -> &mut PlayerState {
        &mut self.players[slot]
    }

    /// Place (or replace) `player`'s fleet. Refused once attacks have begun.
    pub fn place_fleet(
        &mut self,
        player: PlayerId,
        ships: &[ShipDescriptor],
    ) -> Result<(), EngineError> {
        let slot = self.slot_of(player)?;
        if self.started {
            return Err(EngineError::MatchInProgress);
        }
        self.players[slot].place(ships)?;
        info!(
            "match {}: player {} placed {} ship(s)",
            self.id,
            player,
            ships.len()
        );
        Ok(())
    }

    /// Both fleets are placed and attacks can be accepted.
    pub fn is_ready(&self) -> bool {
        self.players.iter().all(|p| p.is_placed())
    }

    /// Hand the opening turn to `player`. Only allowed before the first attack.
    pub fn set_first_player(&mut self, player: PlayerId) -> Result<(), EngineError> {
        let slot = self.slot_of(player)?;
        if self.started {
            return Err(EngineError::MatchInProgress);
        }
        self.current = slot;
        Ok(())
    }

    /// Player whose attack is accepted next.
    pub fn current_player(&self) -> PlayerId {
        self.players[self.current].id()
    }

    pub(crate) fn current_slot(&self) -> usize {
        self.current
    }

    pub(crate) fn pass_turn(&mut self) {
        self.current = 1 - self.current;
    }

    /// The player whose opponent has lost every ship, if any.
    pub fn winner(&self) -> Option<PlayerId> {
        if !self.is_ready() {
            return None;
        }
        self.players
            .iter()
            .position(|p| p.all_killed())
            .map(|loser| self.players[1 - loser].id())
    }

    pub fn is_over(&self) -> bool {
        self.winner().is_some()
    }

    pub fn status(&self) -> GameStatus {
        match self.winner() {
            Some(winner) => GameStatus::Finished { winner },
            None if self.is_ready() => GameStatus::InProgress,
            None => GameStatus::Placing,
        }
    }

    /// Resolve an attack and run the win check.
    pub fn attack(
        &mut self,
        attacker: PlayerId,
        target: Coordinate,
    ) -> Result<AttackReport, EngineError> {
        let outcome = attack::resolve(self, attacker, target)?;
        self.started = true;
        let winner = self.winner();
        if let Some(w) = winner {
            info!("match {} finished, winner {}", self.id, w);
        }
        Ok(AttackReport {
            attacker,
            target,
            outcome,
            current_player: self.current_player(),
            winner,
        })
    }

    /// Attack a random untried cell of the opponent's board.
    pub fn random_attack<R: Rng + ?Sized>(
        &mut self,
        attacker: PlayerId,
        rng: &mut R,
    ) -> Result<AttackReport, EngineError> {
        let slot = self.slot_of(attacker)?;
        if self.is_over() {
            return Err(EngineError::MatchOver);
        }
        if !self.is_ready() {
            return Err(EngineError::FleetNotPlaced);
        }
        if slot != self.current {
            return Err(EngineError::NotYourTurn);
        }
        let target = picker::pick(self.players[1 - slot].board(), rng)?;
        self.attack(attacker, target)
    }
}

impl fmt::Debug for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Match")
            .field("id", &self.id)
            .field("current_player", &self.current_player())
            .field("status", &self.status())
            .field("players", &self.players)
            .finish()
    }
}
