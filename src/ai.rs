// Random fleet layout for automated players.
// Ships never overlap and never touch, diagonals included.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::board::Board;
use crate::common::{CellStatus, FleetError};
use crate::config::{BOARD_SIZE, FLEET, TOTAL_SHIPS};
use crate::grid::Coordinate;
use crate::ship::{Orientation, ShipDescriptor};

const SHIP_ATTEMPTS: usize = 100;
const FLEET_ATTEMPTS: usize = 20;

/// Lay out the standard fleet at random, largest ships first.
pub fn random_fleet<R: Rng + ?Sized>(rng: &mut R) -> Result<Vec<ShipDescriptor>, FleetError> {
    for _ in 0..FLEET_ATTEMPTS {
        if let Some(fleet) = try_fleet(rng) {
            return Ok(fleet);
        }
    }
    Err(FleetError::NoRoom)
}

fn try_fleet<R: Rng + ?Sized>(rng: &mut R) -> Option<Vec<ShipDescriptor>> {
    let mut scratch = Board::new();
    let mut fleet = Vec::with_capacity(TOTAL_SHIPS);
    for &(class, count) in FLEET.iter() {
        for _ in 0..count {
            let desc = random_placement(rng, &scratch, class.length())?;
            for c in desc.cells()? {
                scratch.set(c, CellStatus::Ship).ok()?;
            }
            fleet.push(desc);
        }
    }
    Some(fleet)
}

/// Returns a random position for a ship of `length` that is clear of every
/// ship already on `scratch` and of their neighbors.
pub fn random_placement<R: Rng + ?Sized>(
    rng: &mut R,
    scratch: &Board,
    length: usize,
) -> Option<ShipDescriptor> {
    let size = BOARD_SIZE as usize;
    if length == 0 || length > size {
        return None;
    }
    for _ in 0..SHIP_ATTEMPTS {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let (max_x, max_y) = match orientation {
            Orientation::Horizontal => (size - length, size - 1),
            Orientation::Vertical => (size - 1, size - length),
        };
        let origin = Coordinate::new(
            rng.random_range(0..=max_x) as i32,
            rng.random_range(0..=max_y) as i32,
        );
        let desc = ShipDescriptor::new(origin, orientation, length);
        if is_clear(scratch, &desc) {
            return Some(desc);
        }
    }
    None
}

fn is_clear(scratch: &Board, desc: &ShipDescriptor) -> bool {
    desc.cells().is_some_and(|cells| {
        cells.into_iter().all(|c| {
            scratch.get(c) == Ok(CellStatus::Empty)
                && scratch.neighbors(c).all(|(_, s)| s == CellStatus::Empty)
        })
    })
}
