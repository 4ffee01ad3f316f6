use crate::{Events, World};

/// Apply a goal recorded by the boundary sweep: credit the scorer and put
/// the puck back in play toward the side that conceded.
///
/// Only the local player's count is incremented here. A remote scorer's
/// count is owned by that peer; the session routes a score message to it
/// instead of mutating the mirror. `last_touch` is deliberately left alone.
pub fn apply_goal(world: &mut World, events: &Events) {
    let Some(goal) = &events.goal else {
        return;
    };
    if let Some(scorer) = &goal.scorer {
        if *scorer == world.local.id {
            world.local.score += 1;
        }
    }
    world.reset_puck(goal.side);
}
