use crate::{GameSettings, Params};
use glam::Vec2;
use std::fmt;

/// A moving disc: the puck or one racket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, vel: Vec2, radius: f32) -> Self {
        Self {
            center,
            vel,
            radius,
        }
    }

    /// Advance the center by one tick worth of velocity.
    pub fn advance(&mut self) {
        self.center += self.vel;
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }
}

/// Team, doubling as the defended side: `Red` defends side 0 (the left
/// goal), `Blue` side 1 (the right goal).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    pub fn side(self) -> usize {
        match self {
            Team::Red => 0,
            Team::Blue => 1,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }
}

/// Stable player identifier, assigned by the transport for the lifetime of
/// the connection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerId(pub String);

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One participant: identity plus the racket they drive.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: Team,
    pub score: u32,
    pub racket: Circle,
}

impl Player {
    /// New player with the racket at rest in the middle of its team's half.
    pub fn new(id: PlayerId, name: String, team: Team, settings: &GameSettings) -> Self {
        let x = match team {
            Team::Red => Params::LENGTH / 4.0,
            Team::Blue => 3.0 * Params::LENGTH / 4.0,
        };
        Self {
            id,
            name,
            team,
            score: 0,
            racket: Circle::new(
                Vec2::new(x, Params::WIDTH / 2.0),
                Vec2::ZERO,
                settings.racket_radius,
            ),
        }
    }
}
