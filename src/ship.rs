//! Ship descriptions and their expansion into occupied coordinates.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

use crate::common::{FleetError, PlayerId};
use crate::grid::Coordinate;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Extends along +x from the origin.
    Horizontal,
    /// Extends along +y from the origin.
    Vertical,
}

impl Orientation {
    /// Clients send a `direction` flag that is `true` for vertical ships.
    pub fn from_vertical(vertical: bool) -> Self {
        if vertical {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// Per-segment step as `(dx, dy)`.
    pub const fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (1, 0),
            Orientation::Vertical => (0, 1),
        }
    }
}

/// Named ship sizes of the standard fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShipClass {
    Small,
    Medium,
    Large,
    Huge,
}

impl ShipClass {
    pub const fn length(self) -> usize {
        match self {
            ShipClass::Small => 1,
            ShipClass::Medium => 2,
            ShipClass::Large => 3,
            ShipClass::Huge => 4,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            ShipClass::Small => "small",
            ShipClass::Medium => "medium",
            ShipClass::Large => "large",
            ShipClass::Huge => "huge",
        }
    }

    /// Class of a ship with the given length, if it is a standard one.
    pub fn from_length(length: usize) -> Option<Self> {
        match length {
            1 => Some(ShipClass::Small),
            2 => Some(ShipClass::Medium),
            3 => Some(ShipClass::Large),
            4 => Some(ShipClass::Huge),
            _ => None,
        }
    }
}

/// Compact ship description as supplied by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShipDescriptor {
    pub origin: Coordinate,
    pub orientation: Orientation,
    pub length: usize,
}

impl ShipDescriptor {
    pub const fn new(origin: Coordinate, orientation: Orientation, length: usize) -> Self {
        Self {
            origin,
            orientation,
            length,
        }
    }

    /// The `length` contiguous coordinates starting at `origin`, or `None`
    /// when the run does not fit in `i32` coordinates.
    pub fn cells(&self) -> Option<Vec<Coordinate>> {
        let (dx, dy) = self.orientation.step();
        let length = i32::try_from(self.length).ok()?;
        (0..length)
            .map(|i| self.origin.offset(dx * i, dy * i))
            .collect()
    }
}

/// A ship placed on an `N×N` board.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    owner: PlayerId,
    length: usize,
    orientation: Orientation,
    origin: Coordinate,
    cells: Vec<Coordinate>,
    killed: bool,
}

impl Ship {
    /// Expand `descriptor` for a board of side `board_size`.
    /// Fails if the ship is empty or any segment falls off the board.
    pub fn new(
        owner: PlayerId,
        descriptor: ShipDescriptor,
        board_size: usize,
    ) -> Result<Self, FleetError> {
        if descriptor.length == 0 {
            return Err(FleetError::ZeroLength);
        }
        let out_of_bounds = FleetError::OutOfBounds {
            origin: descriptor.origin,
            length: descriptor.length,
        };
        if descriptor.length > board_size {
            return Err(out_of_bounds);
        }
        let n = i32::try_from(board_size).map_err(|_| out_of_bounds)?;
        let cells = descriptor.cells().ok_or(out_of_bounds)?;
        if cells
            .iter()
            .any(|c| c.x < 0 || c.y < 0 || c.x >= n || c.y >= n)
        {
            return Err(out_of_bounds);
        }
        Ok(Ship {
            owner,
            length: descriptor.length,
            orientation: descriptor.orientation,
            origin: descriptor.origin,
            cells,
            killed: false,
        })
    }

    pub fn owner(&self) -> PlayerId {
        self.owner
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    /// Occupied coordinates, origin first.
    pub fn cells(&self) -> &[Coordinate] {
        &self.cells
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells.contains(&coord)
    }

    pub fn is_killed(&self) -> bool {
        self.killed
    }

    pub(crate) fn mark_killed(&mut self) {
        self.killed = true;
    }

    /// Descriptor this ship was built from.
    pub fn descriptor(&self) -> ShipDescriptor {
        ShipDescriptor::new(self.origin, self.orientation, self.length)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ owner: {}, origin: {}, orientation: {:?}, length: {}, killed: {} }}",
            self.owner, self.origin, self.orientation, self.length, self.killed,
        )
    }
}
