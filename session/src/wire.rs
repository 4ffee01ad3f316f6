//! Conversions between the core simulation types and their wire twins.

use glam::Vec2;
use proto::{CircleState, PlayerEntry, TeamTag};
use rink_core::{Circle, Player, PlayerId, Team};

pub fn circle_to_wire(c: &Circle) -> CircleState {
    CircleState {
        x: c.center.x,
        y: c.center.y,
        vx: c.vel.x,
        vy: c.vel.y,
        radius: c.radius,
    }
}

pub fn circle_from_wire(s: &CircleState) -> Circle {
    Circle::new(Vec2::new(s.x, s.y), Vec2::new(s.vx, s.vy), s.radius)
}

pub fn team_to_wire(team: Team) -> TeamTag {
    match team {
        Team::Red => TeamTag::Red,
        Team::Blue => TeamTag::Blue,
    }
}

pub fn team_from_wire(tag: TeamTag) -> Team {
    match tag {
        TeamTag::Red => Team::Red,
        TeamTag::Blue => Team::Blue,
    }
}

pub fn player_to_wire(p: &Player) -> PlayerEntry {
    PlayerEntry {
        id: p.id.0.clone(),
        name: p.name.clone(),
        team: team_to_wire(p.team),
        score: p.score,
        racket: circle_to_wire(&p.racket),
    }
}

pub fn player_from_wire(e: &PlayerEntry) -> Player {
    Player {
        id: PlayerId(e.id.clone()),
        name: e.name.clone(),
        team: team_from_wire(e.team),
        score: e.score,
        racket: circle_from_wire(&e.racket),
    }
}
