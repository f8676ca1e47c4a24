#![cfg(feature = "std")]

//! Messages exchanged between the session layer and the engine, and the
//! length-prefixed bincode framing used to carry them.

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::common::{CellOutcome, EngineError, MatchId, PlayerId};
use crate::grid::Coordinate;
use crate::ship::ShipDescriptor;

/// Largest frame body accepted by [`decode_frame`].
pub const MAX_FRAME_SIZE: u32 = 64 * 1024;

/// Requests constructed by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Pair two players into a new match.
    CreateMatch { first: PlayerId, second: PlayerId },
    /// Place (or replace) a player's fleet.
    PlaceFleet {
        match_id: MatchId,
        player: PlayerId,
        ships: Vec<ShipDescriptor>,
    },
    /// Fire at `target`, or at a random untried cell when it is `None`.
    Attack {
        match_id: MatchId,
        attacker: PlayerId,
        target: Option<Coordinate>,
    },
}

/// Results forwarded to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    MatchCreated {
        match_id: MatchId,
        players: [PlayerId; 2],
    },
    /// Both fleets are placed; `current_player` opens.
    StartGame {
        match_id: MatchId,
        current_player: PlayerId,
    },
    /// Affected cells of one attack; empty for an already attacked target.
    AttackOutcome {
        match_id: MatchId,
        attacker: PlayerId,
        target: Coordinate,
        cells: Vec<CellOutcome>,
    },
    TurnChanged {
        match_id: MatchId,
        current_player: PlayerId,
    },
    MatchFinished { match_id: MatchId, winner: PlayerId },
}

/// Reply to a [`Command`]: the events to broadcast, or the rejection to
/// surface to the sender.
pub type Reply = Result<Vec<Event>, EngineError>;

/// Serialize `msg` as a big-endian `u32` length followed by its bincode body.
pub fn encode_frame<T: Serialize>(msg: &T) -> anyhow::Result<Vec<u8>> {
    let body =
        bincode::serialize(msg).map_err(|e| anyhow::anyhow!("Serialization error: {}", e))?;
    if body.len() as u64 > MAX_FRAME_SIZE as u64 {
        return Err(anyhow::anyhow!(
            "Message too large: {} bytes (max: {})",
            body.len(),
            MAX_FRAME_SIZE
        ));
    }
    let mut frame = Vec::with_capacity(4 + body.len());
    frame.extend_from_slice(&(body.len() as u32).to_be_bytes());
    frame.extend_from_slice(&body);
    Ok(frame)
}

/// Decode one frame from the front of `buf`, returning the message and the
/// number of bytes consumed. `Ok(None)` means more bytes are needed.
pub fn decode_frame<T: DeserializeOwned>(buf: &[u8]) -> anyhow::Result<Option<(T, usize)>> {
    let Some(len_buf) = buf.get(..4) else {
        return Ok(None);
    };
    let len = u32::from_be_bytes([len_buf[0], len_buf[1], len_buf[2], len_buf[3]]);
    if len == 0 {
        return Err(anyhow::anyhow!("Invalid message length: 0"));
    }
    if len > MAX_FRAME_SIZE {
        return Err(anyhow::anyhow!(
            "Message too large: {} bytes (max: {})",
            len,
            MAX_FRAME_SIZE
        ));
    }
    let end = 4 + len as usize;
    let Some(body) = buf.get(4..end) else {
        return Ok(None);
    };
    let msg = bincode::deserialize(body)
        .map_err(|e| anyhow::anyhow!("Deserialization error: {}", e))?;
    Ok(Some((msg, end)))
}
