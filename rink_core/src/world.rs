use crate::{Circle, GameSettings, Params, Player, PlayerId, Rink};
use glam::Vec2;

/// Scoring event recorded by the tick that detected it.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    /// Goal mouth that was crossed (0 = left, 1 = right).
    pub side: usize,
    /// Last player to touch the puck on the opposing team, if any.
    pub scorer: Option<PlayerId>,
}

/// Per-tick observations, cleared at the start of every step.
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub goal: Option<Goal>,
    pub puck_hit_wall: bool,
    pub puck_hit_racket: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.goal = None;
        self.puck_hit_wall = false;
        self.puck_hit_racket = false;
    }
}

/// The complete simulation state. Owned by exactly one session; every
/// mutation goes through that owner, tick and network handlers alike.
#[derive(Debug, Clone)]
pub struct World {
    pub puck: Circle,
    /// The player this process drives. Never present in `remotes`.
    pub local: Player,
    /// Remote mirrors, in arrival order.
    pub remotes: Vec<Player>,
    pub settings: GameSettings,
    /// Most recent toucher per team side. Only read when a goal fires;
    /// never reset in between.
    pub last_touch: [Option<PlayerId>; 2],
    pub rink: Rink,
}

impl World {
    pub fn new(local: Player) -> Self {
        let settings = GameSettings::default();
        Self {
            puck: Self::serve_puck(Vec2::new(Params::LENGTH / 2.0, Params::WIDTH / 2.0), &settings),
            local,
            remotes: Vec::new(),
            settings,
            last_touch: [None, None],
            rink: Rink::new(settings.puck_radius),
        }
    }

    fn serve_puck(center: Vec2, settings: &GameSettings) -> Circle {
        Circle::new(center, Vec2::splat(Params::SERVE_BIAS), settings.puck_radius)
    }

    /// Look up any player, local or remote.
    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        if self.local.id == *id {
            return Some(&self.local);
        }
        self.remotes.iter().find(|p| p.id == *id)
    }

    pub fn player_mut(&mut self, id: &PlayerId) -> Option<&mut Player> {
        if self.local.id == *id {
            return Some(&mut self.local);
        }
        self.remotes.iter_mut().find(|p| p.id == *id)
    }

    /// Merge a remote player by id: update in place when known, append when
    /// new. The local player never enters the remote roster.
    pub fn upsert_remote(&mut self, player: Player) {
        if player.id == self.local.id {
            return;
        }
        if let Some(existing) = self.remotes.iter_mut().find(|p| p.id == player.id) {
            *existing = player;
        } else {
            self.remotes.push(player);
        }
    }

    /// Remove a departed peer's mirror. Returns whether one was removed.
    pub fn remove_remote(&mut self, id: &PlayerId) -> bool {
        let before = self.remotes.len();
        self.remotes.retain(|p| p.id != *id);
        self.remotes.len() != before
    }

    /// Apply new settings: resize the existing circles in place and rebuild
    /// the boundary for the new puck radius.
    pub fn apply_settings(&mut self, settings: GameSettings) {
        self.settings = settings;
        self.puck.radius = settings.puck_radius;
        self.local.racket.radius = settings.racket_radius;
        for player in &mut self.remotes {
            player.racket.radius = settings.racket_radius;
        }
        self.rink = Rink::new(settings.puck_radius);
    }

    /// Put the puck back in play after a goal at `side`, offset from center
    /// toward the side that conceded by the combined radii scaled to the
    /// rink length.
    pub fn reset_puck(&mut self, side: usize) {
        let offset =
            Params::LENGTH * (self.settings.racket_radius + self.settings.puck_radius);
        let x = if side == 0 {
            Params::LENGTH / 2.0 - offset
        } else {
            Params::LENGTH / 2.0 + offset
        };
        self.puck = Self::serve_puck(Vec2::new(x, Params::WIDTH / 2.0), &self.settings);
    }
}
