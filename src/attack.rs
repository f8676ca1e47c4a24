//! Attack resolution: classify a shot, update the defender's board and fleet,
//! and report every affected cell.

use alloc::collections::BTreeSet;
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

use log::debug;

use crate::common::{AttackStatus, CellOutcome, CellStatus, EngineError, PlayerId};
use crate::game::Match;
use crate::grid::Coordinate;

/// Cells affected by one attack. Order carries no meaning; empty when the
/// target had already been attacked.
pub type AttackOutcome = Vec<CellOutcome>;

/// Resolve `attacker` firing at `target` on the opponent's board.
///
/// * Rejections (`MatchOver`, `FleetNotPlaced`, `NotYourTurn`,
///   `InvalidCoordinate`) leave the match untouched.
/// * A cell that was already attacked yields an empty outcome and keeps the turn.
/// * A miss passes the turn to the opponent; a hit or kill keeps it.
/// * Cells of a destroyed ship are stored on the board as `Killed`, not
///   `Shot`. Both count as hit.
///
/// The winner is not decided here, see [`Match::attack`].
pub fn resolve(
    game: &mut Match,
    attacker: PlayerId,
    target: Coordinate,
) -> Result<AttackOutcome, EngineError> {
    if game.winner().is_some() {
        return Err(EngineError::MatchOver);
    }
    if !game.is_ready() {
        return Err(EngineError::FleetNotPlaced);
    }
    if game.current_player() != attacker {
        return Err(EngineError::NotYourTurn);
    }
    let attacker_slot = game.current_slot();
    let defender_slot = 1 - attacker_slot;

    let cell = game.player(defender_slot).board().get(target)?;

    let outcome = match cell {
        CellStatus::Miss | CellStatus::Shot | CellStatus::Killed => Vec::new(),
        CellStatus::Empty => {
            game.player_mut(defender_slot)
                .board_mut()
                .set(target, CellStatus::Miss)?;
            game.pass_turn();
            vec![CellOutcome::new(target, AttackStatus::Miss)]
        }
        CellStatus::Ship => {
            let (outcome, kills) = hit(game, defender_slot, target)?;
            game.player_mut(attacker_slot).record_hit(kills);
            outcome
        }
    };

    debug!(
        "player {} attacked {} ({:?}): {} cell(s) affected",
        attacker,
        target,
        cell,
        outcome.len()
    );
    Ok(outcome)
}

/// Mark `target` as shot and kill every ship that hit completes, surrounding
/// the dead ships with misses. Returns the outcome and the number of kills.
///
/// Overlapping ships may share `target`, so all of them are checked.
fn hit(
    game: &mut Match,
    defender_slot: usize,
    target: Coordinate,
) -> Result<(AttackOutcome, usize), EngineError> {
    let defender = game.player_mut(defender_slot);
    defender.board_mut().set(target, CellStatus::Shot)?;

    let board = defender.board();
    let finished: Vec<usize> = defender
        .fleet()
        .iter()
        .enumerate()
        .filter(|(_, ship)| !ship.is_killed() && ship.contains(target))
        .filter(|(_, ship)| {
            ship.cells()
                .iter()
                .all(|&c| board.get(c).is_ok_and(CellStatus::is_hit))
        })
        .map(|(index, _)| index)
        .collect();
    if finished.is_empty() {
        return Ok((vec![CellOutcome::new(target, AttackStatus::Shot)], 0));
    }

    let mut seen: BTreeSet<Coordinate> = BTreeSet::new();
    let mut outcome = AttackOutcome::new();
    for &index in finished.iter() {
        for &c in defender.fleet()[index].cells() {
            if seen.insert(c) {
                outcome.push(CellOutcome::new(c, AttackStatus::Killed));
            }
        }
    }
    for &index in finished.iter() {
        for &c in defender.fleet()[index].cells() {
            for (n, status) in board.neighbors(c) {
                if status == CellStatus::Empty && seen.insert(n) {
                    outcome.push(CellOutcome::new(n, AttackStatus::Miss));
                }
            }
        }
    }

    let board = defender.board_mut();
    for o in outcome.iter() {
        let status = match o.status {
            AttackStatus::Killed => CellStatus::Killed,
            _ => CellStatus::Miss,
        };
        board.set(o.position, status)?;
    }
    for &index in finished.iter() {
        if let Some(ship) = defender.ship_mut(index) {
            ship.mark_killed();
        }
    }
    Ok((outcome, finished.len()))
}
