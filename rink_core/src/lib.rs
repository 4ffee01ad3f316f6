pub mod components;
pub mod config;
pub mod geometry;
pub mod params;
pub mod rink;
pub mod systems;
pub mod world;

pub use components::*;
pub use config::*;
pub use params::*;
pub use rink::*;
pub use world::*;

use systems::*;

/// Advance the authoritative simulation by one fixed tick.
///
/// Canonical order: puck advance, corner sweep, segment sweep with the goal
/// lines pre-empting wall response, then, on goal-free ticks only, racket
/// collisions (local racket first) and the speed clamp. On a goal tick the
/// scorer is credited and the puck reset instead.
///
/// Only the host runs this; other peers mirror the broadcast results. The
/// caller broadcasts the resulting state and then zeroes the local racket
/// velocity via [`systems::settle_local_racket`].
pub fn step(world: &mut World, events: &mut Events) {
    events.clear();
    move_puck(world);
    collide_boundary(world, events);
    if events.goal.is_none() {
        collide_rackets(world, events);
        clamp_puck_speed(world);
    } else {
        apply_goal(world, events);
    }
}
