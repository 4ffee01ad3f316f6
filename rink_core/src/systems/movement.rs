use crate::World;

/// Advance the puck by one tick of velocity (fixed-step Euler).
pub fn move_puck(world: &mut World) {
    world.puck.advance();
}

/// Rescale the puck velocity down to the configured cap.
pub fn clamp_puck_speed(world: &mut World) {
    let max = world.settings.max_puck_speed;
    let speed = world.puck.speed();
    if speed > max {
        world.puck.vel *= max / speed;
    }
}
