//! Common types for the engine: cell states, attack outcomes and errors.

use crate::grid::{Coordinate, GridError};

/// Identity of a player as assigned by the session layer.
pub type PlayerId = u32;

/// Identity of a match as assigned by the registry.
pub type MatchId = u32;

/// State of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    #[default]
    Empty,
    /// Undamaged ship segment.
    Ship,
    /// Attacked water, or water next to a destroyed ship.
    Miss,
    /// Hit segment of a ship that is still afloat.
    Shot,
    /// Segment of a destroyed ship.
    Killed,
}

impl CellStatus {
    /// Whether the cell has already been targeted (directly or by kill marking).
    pub fn is_attacked(self) -> bool {
        matches!(self, CellStatus::Miss | CellStatus::Shot | CellStatus::Killed)
    }

    /// Whether the cell holds a ship segment that has been hit.
    pub fn is_hit(self) -> bool {
        matches!(self, CellStatus::Shot | CellStatus::Killed)
    }
}

/// Outcome tag reported to clients for an affected cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackStatus {
    Miss,
    Shot,
    Killed,
}

/// One affected cell of an attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellOutcome {
    pub position: Coordinate,
    pub status: AttackStatus,
}

impl CellOutcome {
    pub const fn new(position: Coordinate, status: AttackStatus) -> Self {
        Self { position, status }
    }
}

/// Why a fleet description was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum FleetError {
    /// The fleet contained no ships.
    Empty,
    /// A ship had length zero.
    ZeroLength,
    /// A ship extended past the edge of the board.
    OutOfBounds { origin: Coordinate, length: usize },
    /// Random placement could not fit the fleet.
    NoRoom,
}

impl core::fmt::Display for FleetError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            FleetError::Empty => write!(f, "fleet has no ships"),
            FleetError::ZeroLength => write!(f, "ship length must be at least 1"),
            FleetError::OutOfBounds { origin, length } => write!(
                f,
                "ship of length {} at {} does not fit on the board",
                length, origin
            ),
            FleetError::NoRoom => write!(f, "unable to fit the fleet on the board"),
        }
    }
}

/// Errors returned to the caller of the engine. None of them mutate match state.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum EngineError {
    /// Target lies outside the board.
    InvalidCoordinate { x: i32, y: i32 },
    /// Attack submitted by the player who does not hold the turn.
    NotYourTurn,
    /// No match with this id is registered.
    UnknownMatch(MatchId),
    /// The player is not part of the match.
    UnknownPlayer(PlayerId),
    /// Fleet description could not be placed.
    MalformedFleet(FleetError),
    /// Attack received before both fleets were placed.
    FleetNotPlaced,
    /// Attack received after a winner was decided.
    MatchOver,
    /// Fleet or opening turn changed after the first attack.
    MatchInProgress,
    /// Random target requested but every cell has been attacked.
    BoardExhausted,
}

impl From<GridError> for EngineError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { x, y } => EngineError::InvalidCoordinate { x, y },
        }
    }
}

impl From<FleetError> for EngineError {
    fn from(err: FleetError) -> Self {
        EngineError::MalformedFleet(err)
    }
}

impl core::fmt::Display for EngineError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EngineError::InvalidCoordinate { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the board", x, y)
            }
            EngineError::NotYourTurn => write!(f, "It is not this player's turn"),
            EngineError::UnknownMatch(id) => write!(f, "No match with id {}", id),
            EngineError::UnknownPlayer(id) => write!(f, "Player {} is not in this match", id),
            EngineError::MalformedFleet(e) => write!(f, "Malformed fleet: {}", e),
            EngineError::FleetNotPlaced => write!(f, "Both fleets must be placed before attacking"),
            EngineError::MatchOver => write!(f, "Match already has a winner"),
            EngineError::MatchInProgress => write!(f, "Match has already started"),
            EngineError::BoardExhausted => write!(f, "No untried cells remain on the board"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EngineError {}
