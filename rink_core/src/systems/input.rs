use crate::{Rink, World};
use glam::Vec2;

/// Apply a pointer position to the local racket.
///
/// Racket velocity is the per-tick positional delta, accumulated additively
/// across input events within one tick and zeroed after each broadcast; it
/// is never integrated over time. A racket that stopped moving before its
/// last tick therefore collides as if at rest.
pub fn apply_pointer(world: &mut World, pos: Vec2) {
    let clamped = Rink::clamp_racket(pos, world.local.team, world.settings.racket_radius);
    let racket = &mut world.local.racket;
    racket.vel += clamped - racket.center;
    racket.center = clamped;
}

/// Zero the accumulated racket velocity at end of tick.
pub fn settle_local_racket(world: &mut World) {
    world.local.racket.vel = Vec2::ZERO;
}
