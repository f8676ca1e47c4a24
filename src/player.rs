#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::rngs::SmallRng;

use crate::{
    ai,
    board::Board,
    common::EngineError,
    game::AttackReport,
    grid::Coordinate,
    picker,
    ship::ShipDescriptor,
};

/// Interface implemented by automated participants.
pub trait Player: Send {
    /// Produce the fleet to place at match start.
    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<Vec<ShipDescriptor>, EngineError>;

    /// Choose the next target on the opponent's board.
    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Coordinate, EngineError>;

    /// Inform the player of the result of its last attack.
    fn handle_report(&mut self, _report: &AttackReport) {}
}

/// Bot that lays out a random standard fleet and fires at random untried cells.
#[derive(Debug, Default)]
pub struct BotPlayer {
    attacks: usize,
}

impl BotPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attacks reported back to this bot so far.
    pub fn attacks(&self) -> usize {
        self.attacks
    }
}

impl Player for BotPlayer {
    fn place_ships(&mut self, rng: &mut SmallRng) -> Result<Vec<ShipDescriptor>, EngineError> {
        Ok(ai::random_fleet(rng)?)
    }

    fn select_target(
        &mut self,
        rng: &mut SmallRng,
        opponent: &Board,
    ) -> Result<Coordinate, EngineError> {
        picker::pick(opponent, rng)
    }

    fn handle_report(&mut self, _report: &AttackReport) {
        self.attacks += 1;
    }
}
