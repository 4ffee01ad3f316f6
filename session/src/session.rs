use crate::wire::{
    circle_from_wire, circle_to_wire, player_from_wire, player_to_wire, team_from_wire,
    team_to_wire,
};
use glam::Vec2;
use log::{debug, info, warn};
use proto::Message;
use rink_core::{systems, Events, GameSettings, Player, PlayerId, SettingsError, Team, World};
use thiserror::Error;

/// Transport send failure. Sends are fire-and-forget: the session logs
/// these and moves on, relying on the next periodic broadcast.
#[derive(Debug, Error)]
#[error("peer channel send failed: {0}")]
pub struct SendError(pub String);

/// One side of an established peer connection.
///
/// Connection setup, NAT traversal and id negotiation happen outside the
/// core; the session only writes already-encoded payloads into the channel.
/// `Send` so a whole session can live behind the tick thread's mutex.
pub trait PeerChannel: Send {
    fn send(&self, bytes: &[u8]) -> Result<(), SendError>;
}

/// Which peer runs the authoritative simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Host,
    Client,
}

/// A locally rejected operation. Network input is never an error: bad
/// payloads are logged and dropped without touching the world.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("only the host may change other players")]
    NotHost,
    #[error("unknown player {0}")]
    UnknownPlayer(PlayerId),
    #[error(transparent)]
    InvalidSettings(#[from] SettingsError),
}

/// One peer's view of the match: the world, the channels to every other
/// peer, and the role deciding who owns the physics.
///
/// All entry points mutate through `&mut self`; embedders serialize tick
/// and transport callbacks through one exclusive-access point (see
/// [`crate::scheduler::Ticker`]).
pub struct Session {
    role: Role,
    pub world: World,
    pub events: Events,
    peers: Vec<(PlayerId, Box<dyn PeerChannel>)>,
    ticks: u32,
}

impl Session {
    pub fn new(role: Role, local: Player) -> Self {
        Self {
            role,
            world: World::new(local),
            events: Events::new(),
            peers: Vec::new(),
            ticks: 0,
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn is_host(&self) -> bool {
        self.role == Role::Host
    }

    /// The transport reported a newly opened connection. The host seeds the
    /// newcomer with settings, the full roster and the current puck so it
    /// can draw a populated rink before the first periodic broadcast.
    pub fn peer_open(&mut self, id: PlayerId, channel: Box<dyn PeerChannel>) {
        info!("peer {id} connected");
        self.peers.retain(|(pid, _)| *pid != id);
        self.peers.push((id.clone(), channel));

        if self.is_host() {
            let settings = self.settings_message();
            let roster = self.roster_message();
            let puck = Message::Puck(circle_to_wire(&self.world.puck));
            self.send_to(&id, &settings);
            self.send_to(&id, &roster);
            self.send_to(&id, &puck);
        }
    }

    /// The transport reported a closed connection. The peer's paddle is
    /// removed synchronously so the puck cannot keep colliding with a
    /// stale, immobile mirror.
    pub fn peer_close(&mut self, id: &PlayerId) {
        self.peers.retain(|(pid, _)| pid != id);
        if self.world.remove_remote(id) {
            info!("peer {id} disconnected, paddle removed");
        } else {
            debug!("peer {id} disconnected without a roster entry");
        }
    }

    /// Inbound payload from a peer. Undecodable data is discarded.
    pub fn peer_data(&mut self, from: &PlayerId, bytes: &[u8]) {
        match Message::from_bytes(bytes) {
            Ok(msg) => self.apply_message(from, msg),
            Err(e) => warn!("discarding undecodable message from {from}: {e}"),
        }
    }

    fn apply_message(&mut self, from: &PlayerId, msg: Message) {
        match msg {
            Message::Puck(state) => {
                if self.is_host() {
                    debug!("ignoring puck snapshot from {from}: host is authoritative");
                    return;
                }
                self.world.puck = circle_from_wire(&state);
            }
            Message::Players(entries) => {
                for entry in &entries {
                    // My own entry coming back around is never mirrored.
                    if entry.id == self.world.local.id.0 {
                        continue;
                    }
                    self.world.upsert_remote(player_from_wire(entry));
                }
            }
            Message::TeamChange { player_id, team } => {
                let id = PlayerId(player_id);
                let team = team_from_wire(team);
                if self.is_host() && id != *from {
                    warn!("peer {from} may not change the team of {id}");
                    return;
                }
                match self.world.player_mut(&id) {
                    Some(player) => player.team = team,
                    None => warn!("team change for unknown player {id}"),
                }
            }
            Message::Scored { player_id, score } => {
                // Score state is owned by its player: only apply when it
                // names the local one.
                if player_id == self.world.local.id.0 {
                    self.world.local.score = score;
                } else {
                    warn!("dropping score update for {player_id}: not the local player");
                }
            }
            Message::GameSettings {
                max_puck_speed,
                puck_radius,
                racket_radius,
            } => {
                if self.is_host() {
                    warn!("ignoring settings from non-host peer {from}");
                    return;
                }
                self.world.apply_settings(GameSettings {
                    max_puck_speed,
                    puck_radius,
                    racket_radius,
                });
            }
        }
    }

    /// Pointer/touch position for the local racket, in rink-normalized
    /// coordinates. May be called any number of times between ticks.
    pub fn pointer_input(&mut self, pos: Vec2) {
        systems::apply_pointer(&mut self.world, pos);
    }

    /// Host-only: validate, apply and broadcast new settings. Invalid
    /// values leave the previous settings in effect and nothing is sent.
    pub fn update_settings(&mut self, settings: GameSettings) -> Result<(), SessionError> {
        if !self.is_host() {
            return Err(SessionError::NotHost);
        }
        settings.validate()?;
        self.world.apply_settings(settings);
        let msg = self.settings_message();
        self.broadcast(&msg);
        Ok(())
    }

    /// Switch a player's team. The host may retarget anyone; a client only
    /// itself. The change is applied locally and notified to every peer.
    pub fn set_team(&mut self, id: &PlayerId, team: Team) -> Result<(), SessionError> {
        if !self.is_host() && *id != self.world.local.id {
            return Err(SessionError::NotHost);
        }
        match self.world.player_mut(id) {
            Some(player) => player.team = team,
            None => return Err(SessionError::UnknownPlayer(id.clone())),
        }
        self.broadcast(&Message::TeamChange {
            player_id: id.0.clone(),
            team: team_to_wire(team),
        });
        Ok(())
    }

    /// One fixed-period tick. The host advances physics and broadcasts the
    /// authoritative puck plus the full roster, so clients also track each
    /// other through it; a client reports only its own entry. The
    /// accumulated racket velocity is zeroed afterwards.
    pub fn tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
        if self.ticks % 60 == 0 {
            debug!(
                "tick {}: {} peers, {} remote paddles",
                self.ticks,
                self.peers.len(),
                self.world.remotes.len()
            );
        }

        if self.is_host() {
            rink_core::step(&mut self.world, &mut self.events);

            if let Some(goal) = self.events.goal.clone() {
                info!("goal for side {}, scorer {:?}", goal.side, goal.scorer);
                if let Some(scorer) = &goal.scorer {
                    if *scorer != self.world.local.id {
                        // The peer owns its count; hand it the incremented
                        // value instead of mutating the mirror.
                        let score =
                            self.world.player(scorer).map(|p| p.score).unwrap_or(0) + 1;
                        self.send_to(
                            scorer,
                            &Message::Scored {
                                player_id: scorer.0.clone(),
                                score,
                            },
                        );
                    }
                }
            } else {
                self.broadcast(&Message::Puck(circle_to_wire(&self.world.puck)));
            }
        }

        let roster = if self.is_host() {
            self.roster_message()
        } else {
            Message::Players(vec![player_to_wire(&self.world.local)])
        };
        self.broadcast(&roster);
        systems::settle_local_racket(&mut self.world);
    }

    /// Full roster snapshot: the local player followed by every remote
    /// mirror in arrival order.
    fn roster_message(&self) -> Message {
        Message::Players(
            std::iter::once(&self.world.local)
                .chain(self.world.remotes.iter())
                .map(player_to_wire)
                .collect(),
        )
    }

    fn settings_message(&self) -> Message {
        let s = self.world.settings;
        Message::GameSettings {
            max_puck_speed: s.max_puck_speed,
            puck_radius: s.puck_radius,
            racket_radius: s.racket_radius,
        }
    }

    fn broadcast(&self, msg: &Message) {
        let bytes = match msg.to_bytes() {
            Ok(bytes) => bytes,
            Err(e) => {
                warn!("failed to encode broadcast: {e}");
                return;
            }
        };
        for (id, channel) in &self.peers {
            if let Err(e) = channel.send(&bytes) {
                debug!("send to {id} failed: {e}");
            }
        }
    }

    fn send_to(&self, id: &PlayerId, msg: &Message) {
        let Some((_, channel)) = self.peers.iter().find(|(pid, _)| pid == id) else {
            debug!("no channel for {id}");
            return;
        };
        match msg.to_bytes() {
            Ok(bytes) => {
                if let Err(e) = channel.send(&bytes) {
                    debug!("send to {id} failed: {e}");
                }
            }
            Err(e) => warn!("failed to encode message for {id}: {e}"),
        }
    }
}
