// Random target selection for attacks submitted without coordinates.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use rand::Rng;

use crate::common::EngineError;
use crate::grid::{Coordinate, Grid};

/// Rejection draws attempted before falling back to the list of untried cells.
const MAX_DRAWS: usize = 32;

/// Pick a uniformly random cell of `board` that has not been attacked yet
/// (`Empty` or `Ship`).
///
/// Draws at random a bounded number of times, then samples directly from the
/// remaining untried cells so a nearly full board still terminates.
pub fn pick<R: Rng + ?Sized, const N: usize>(
    board: &Grid<N>,
    rng: &mut R,
) -> Result<Coordinate, EngineError> {
    if N == 0 {
        return Err(EngineError::BoardExhausted);
    }
    for _ in 0..MAX_DRAWS {
        let c = Coordinate::new(
            rng.random_range(0..N as i32),
            rng.random_range(0..N as i32),
        );
        if !board.get(c)?.is_attacked() {
            return Ok(c);
        }
    }
    let untried: Vec<Coordinate> = board
        .iter()
        .filter(|(_, status)| !status.is_attacked())
        .map(|(c, _)| c)
        .collect();
    if untried.is_empty() {
        return Err(EngineError::BoardExhausted);
    }
    Ok(untried[rng.random_range(0..untried.len())])
}
