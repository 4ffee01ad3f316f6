//! Wire protocol for the air-hockey peer channel.
//!
//! Uses postcard for efficient binary serialization. The transport delivers
//! messages in order per connection but makes no guarantee beyond
//! best-effort; nothing here is acknowledged or retried — the periodic
//! broadcast re-synchronizes peers by repetition.

use postcard::{from_bytes, to_allocvec};
use serde::{Deserialize, Serialize};

/// Team tag on the wire. Mirrors the core's team enum without depending on
/// the physics crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TeamTag {
    Red,
    Blue,
}

/// Snapshot of one moving disc (puck or racket).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleState {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
}

/// One roster entry, keyed by the transport-assigned player id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerEntry {
    pub id: String,
    pub name: String,
    pub team: TeamTag,
    pub score: u32,
    pub racket: CircleState,
}

/// Messages exchanged between peers, one variant per kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Message {
    /// Authoritative puck snapshot (host to clients only).
    Puck(CircleState),

    /// Full or partial roster, merged by player id on receipt.
    Players(Vec<PlayerEntry>),

    /// Team switch for a specific player.
    TeamChange { player_id: String, team: TeamTag },

    /// Authoritative score for a specific player (host to that client).
    Scored { player_id: String, score: u32 },

    /// Authoritative settings broadcast (host to clients). Receivers resize
    /// their circles immediately.
    GameSettings {
        max_puck_speed: f32,
        puck_radius: f32,
        racket_radius: f32,
    },
}

impl Message {
    /// Serialize to postcard bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, postcard::Error> {
        to_allocvec(self)
    }

    /// Deserialize from postcard bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, postcard::Error> {
        from_bytes(bytes)
    }
}
