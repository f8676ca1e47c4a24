//! Per-player state: the fleet, the board the opponent fires at, and counters.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use crate::common::{CellStatus, EngineError, FleetError, PlayerId};
use crate::config::BOARD_SIZE;
use crate::grid::{Coordinate, Grid};
use crate::ship::{Ship, ShipDescriptor};

/// The standard 10×10 board.
pub type Board = Grid<{ BOARD_SIZE as usize }>;

/// One side of a match.
#[derive(Clone, PartialEq, Eq)]
pub struct PlayerState {
    id: PlayerId,
    fleet: Vec<Ship>,
    board: Board,
    placed: bool,
    hits: usize,
    kills: usize,
}

impl PlayerState {
    /// Player with no fleet yet; attacks are refused until [`place`](Self::place).
    pub fn new(id: PlayerId) -> Self {
        PlayerState {
            id,
            fleet: Vec::new(),
            board: Board::new(),
            placed: false,
            hits: 0,
            kills: 0,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Expand every descriptor and write the fleet onto a fresh board.
    ///
    /// Replaces any previous fleet and board. Overlapping or touching ships
    /// are accepted as given. On error the current state is left as it was.
    pub fn place(&mut self, descriptors: &[ShipDescriptor]) -> Result<(), EngineError> {
        if descriptors.is_empty() {
            return Err(FleetError::Empty.into());
        }
        let fleet = descriptors
            .iter()
            .map(|d| Ship::new(self.id, *d, BOARD_SIZE as usize))
            .collect::<Result<Vec<_>, _>>()?;

        let mut board = Board::new();
        for ship in fleet.iter() {
            for &cell in ship.cells() {
                board.set(cell, CellStatus::Ship)?;
            }
        }

        self.fleet = fleet;
        self.board = board;
        self.placed = true;
        self.hits = 0;
        self.kills = 0;
        Ok(())
    }

    /// Returns `true` once a fleet has been placed.
    pub fn is_placed(&self) -> bool {
        self.placed
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Ships in placement order.
    pub fn fleet(&self) -> &[Ship] {
        &self.fleet
    }

    /// Index into [`fleet`](Self::fleet) of the first ship occupying `coord`.
    pub fn ship_at(&self, coord: Coordinate) -> Option<usize> {
        self.fleet.iter().position(|s| s.contains(coord))
    }

    pub(crate) fn ship_mut(&mut self, index: usize) -> Option<&mut Ship> {
        self.fleet.get_mut(index)
    }

    /// Returns `true` when a fleet is placed and every ship in it is killed.
    pub fn all_killed(&self) -> bool {
        self.placed && self.fleet.iter().all(|s| s.is_killed())
    }

    /// Ships not yet destroyed.
    pub fn ships_afloat(&self) -> usize {
        self.fleet.iter().filter(|s| !s.is_killed()).count()
    }

    /// Cells this player has hit on the opponent's board.
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Opponent ships this player has destroyed.
    pub fn kills(&self) -> usize {
        self.kills
    }

    pub(crate) fn record_hit(&mut self, kills: usize) {
        self.hits += 1;
        self.kills += kills;
    }
}

impl fmt::Debug for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "PlayerState {{\n  id: {},\n  hits: {},\n  kills: {},\n  fleet: {:?},\n  board: {:?}\n}}",
            self.id, self.hits, self.kills, self.fleet, self.board
        )
    }
}
