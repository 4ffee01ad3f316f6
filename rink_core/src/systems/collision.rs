use crate::geometry::{distance_to_segment, is_ccw, reflect};
use crate::{Circle, Events, Goal, Rink, World, EDGE_COUNT};
use glam::Vec2;

/// True iff the two circles touch or overlap.
pub fn is_colliding(a: &Circle, b: &Circle) -> bool {
    a.center.distance(b.center) <= a.radius + b.radius
}

/// Resolve a circle against the wall segment `pq`.
///
/// No-op beyond the radius; otherwise the circle is pushed out along the
/// inward edge normal by the penetration depth and its velocity reflected
/// about that normal. Afterwards the circle rests exactly on the boundary.
pub fn circle_segment_collision(circle: &Circle, p: Vec2, q: Vec2) -> Circle {
    let dist = distance_to_segment(circle.center, p, q);
    if dist > circle.radius {
        return *circle;
    }
    // The boundary winds so that perp(p - q) points into the rink.
    let normal = (p - q).perp().normalize_or_zero();
    Circle {
        center: circle.center + normal * (circle.radius - dist),
        vel: reflect(circle.vel, normal),
        radius: circle.radius,
    }
}

/// Resolve the wedge case at vertex `b` between edges `a-b` and `b-c`.
///
/// Triggers only when the center lies inside the angular wedge and within
/// the radius of `b`. The last displacement is rolled back and the velocity
/// reflected about the bisector of the two edge normals, deflecting the
/// circle smoothly instead of biting the corner off as two edge hits.
pub fn circle_corner_collision(circle: &Circle, a: Vec2, b: Vec2, c: Vec2) -> Circle {
    let dist = circle.center.distance(b);
    if !is_ccw(circle.center, c, b) || !is_ccw(circle.center, b, a) || dist >= circle.radius {
        return *circle;
    }
    let bisector = (b - a).normalize_or_zero() + (b - c).normalize_or_zero();
    Circle {
        center: circle.center - circle.vel,
        vel: reflect(circle.vel, bisector),
        radius: circle.radius,
    }
}

/// Resolve `moving` against `driver`. The driver receives no impulse back:
/// the controlling player's racket motion is authoritative.
///
/// The relative velocity is reflected about the center line, then the
/// driver velocity added back. Position is corrected by back-solving, along
/// the reversed approach ray, the time offset at which the circles were
/// exactly touching, plus a `0.1 * dt` nudge along the new velocity so the
/// pair does not re-trigger on the very next tick. Discrete check only:
/// no-op when the circles are not currently overlapping.
pub fn circle_circle_collision(driver: &Circle, moving: &Circle) -> Circle {
    let d = driver.center.distance(moving.center);
    if d > driver.radius + moving.radius {
        return *moving;
    }
    let relative = moving.vel - driver.vel;
    let dir = (moving.center - driver.center).normalize_or_zero();
    let new_vel = reflect(relative, dir) + driver.vel;

    let a = moving.center - driver.center;
    let c = driver.radius + moving.radius;
    let b = if relative.dot(dir) < 0.0 {
        relative
    } else {
        -relative
    };
    let b_len_sq = b.length_squared();
    if b_len_sq == 0.0 {
        // No relative motion: keep the exchanged velocity, skip the
        // positional correction.
        return Circle {
            center: moving.center,
            vel: new_vel,
            radius: moving.radius,
        };
    }
    let k = 2.0 * a.dot(b);
    let disc = (k * k - 4.0 * (a.length_squared() - c * c) * b_len_sq).max(0.0);
    let dt = (k + disc.sqrt()) / (2.0 * b_len_sq);
    Circle {
        center: moving.center - b * dt + new_vel * (dt * 0.1),
        vel: new_vel,
        radius: moving.radius,
    }
}

/// Sweep the puck against the rink boundary: corners over every edge first,
/// then segments, with the goal-line proximity check pre-empting wall
/// response on goal edges.
pub fn collide_boundary(world: &mut World, events: &mut Events) {
    for i in 0..EDGE_COUNT {
        let (a, b, c) = world.rink.corner(i);
        let resolved = circle_corner_collision(&world.puck, a, b, c);
        if resolved != world.puck {
            events.puck_hit_wall = true;
            world.puck = resolved;
        }
    }

    for i in 0..EDGE_COUNT {
        let (p, q) = world.rink.edge(i);
        if let Some(side) = Rink::goal_side(i) {
            if distance_to_segment(world.puck.center, p, q) <= world.puck.radius
                && events.goal.is_none()
            {
                let scorer = world.last_touch[1 - side].clone();
                events.goal = Some(Goal { side, scorer });
            }
            // A goal line never bounces the puck.
            continue;
        }
        let resolved = circle_segment_collision(&world.puck, p, q);
        if resolved != world.puck {
            events.puck_hit_wall = true;
            world.puck = resolved;
        }
    }
}

/// Resolve the puck against every known racket, the local player first,
/// then the remote mirrors in arrival order. A contact records the toucher
/// for goal attribution before it is resolved.
pub fn collide_rackets(world: &mut World, events: &mut Events) {
    let rackets: Vec<_> = std::iter::once(&world.local)
        .chain(world.remotes.iter())
        .map(|p| (p.racket, p.team, p.id.clone()))
        .collect();

    for (racket, team, id) in rackets {
        if is_colliding(&racket, &world.puck) {
            world.last_touch[team.side()] = Some(id);
            events.puck_hit_racket = true;
            world.puck = circle_circle_collision(&racket, &world.puck);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GameSettings, Params, Player, Team};

    #[test]
    fn test_segment_collision_noop_beyond_radius() {
        let circle = Circle::new(Vec2::new(0.5, 0.5), Vec2::new(0.01, 0.0), 0.03);
        let p = Vec2::new(0.0, 0.0);
        let q = Vec2::new(0.0, 1.0);
        assert_eq!(circle_segment_collision(&circle, p, q), circle);
    }

    #[test]
    fn test_segment_collision_rests_on_boundary() {
        // A left wall in boundary winding order: perp(p - q) pushes +x.
        let p = Vec2::new(0.0, 0.0);
        let q = Vec2::new(0.0, 1.0);
        let circle = Circle::new(Vec2::new(0.02, 0.5), Vec2::new(-0.01, 0.0), 0.03);
        let resolved = circle_segment_collision(&circle, p, q);
        let dist = distance_to_segment(resolved.center, p, q);
        assert!(
            (dist - circle.radius).abs() < 1e-6,
            "post-condition: resting exactly on the boundary, got {dist}"
        );
        assert!(resolved.vel.x > 0.0, "velocity reflected off the wall");
        assert_eq!(resolved.vel.y, circle.vel.y);
    }

    #[test]
    fn test_corner_collision_requires_wedge_and_radius() {
        // Corner at b in boundary order: incoming edge from a, outgoing to
        // c, interior toward +x +y.
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 0.0);
        let c = Vec2::new(0.0, 1.0);

        // Inside the wedge but too far away.
        let far = Circle::new(Vec2::new(0.2, 0.2), Vec2::new(-0.01, -0.01), 0.03);
        assert_eq!(circle_corner_collision(&far, a, b, c), far);

        // Close enough and inside the wedge: rollback plus reflection.
        let near = Circle::new(Vec2::new(0.015, 0.015), Vec2::new(-0.01, -0.01), 0.03);
        let resolved = circle_corner_collision(&near, a, b, c);
        assert_eq!(
            resolved.center,
            near.center - near.vel,
            "last displacement rolled back"
        );
        // Bisector here is the diagonal: a head-on approach bounces back.
        assert!(resolved.vel.x > 0.0 && resolved.vel.y > 0.0);
    }

    #[test]
    fn test_corner_collision_ignores_center_outside_wedge() {
        let a = Vec2::new(1.0, 0.0);
        let b = Vec2::new(0.0, 0.0);
        let c = Vec2::new(0.0, 1.0);
        // Near the vertex but on the back side of the corner.
        let behind = Circle::new(Vec2::new(-0.01, -0.01), Vec2::new(0.01, 0.0), 0.03);
        assert_eq!(circle_corner_collision(&behind, a, b, c), behind);
    }

    #[test]
    fn test_circle_collision_noop_when_apart() {
        let driver = Circle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 0.06);
        let moving = Circle::new(Vec2::new(0.2, 0.0), Vec2::new(-0.01, 0.0), 0.03);
        assert_eq!(circle_circle_collision(&driver, &moving), moving);
    }

    #[test]
    fn test_circle_collision_reflects_and_separates() {
        let driver = Circle::new(Vec2::new(0.0, 0.0), Vec2::new(0.01, 0.0), 0.06);
        let moving = Circle::new(Vec2::new(0.11, 0.0), Vec2::new(-0.01, 0.0), 0.06);
        let resolved = circle_circle_collision(&driver, &moving);

        // Relative velocity reflected about the center line, driver's added
        // back: (-0.02, 0) -> (0.02, 0) -> (0.03, 0).
        assert!((resolved.vel - Vec2::new(0.03, 0.0)).length() < 1e-6);

        // Touching point plus the 0.1 * dt forward nudge.
        let dt = 0.5;
        let expected_x = 0.12 + 0.1 * dt * 0.03;
        assert!((resolved.center.x - expected_x).abs() < 1e-5);
        assert!(resolved.center.distance(driver.center) >= 0.12);
    }

    #[test]
    fn test_circle_collision_zero_relative_velocity_guard() {
        let vel = Vec2::new(0.01, 0.0);
        let driver = Circle::new(Vec2::new(0.0, 0.0), vel, 0.06);
        let moving = Circle::new(Vec2::new(0.1, 0.0), vel, 0.06);
        let resolved = circle_circle_collision(&driver, &moving);
        assert_eq!(resolved.center, moving.center, "no correction without approach");
        assert!(resolved.vel.x.is_finite() && resolved.vel.y.is_finite());
    }

    #[test]
    fn test_is_colliding_includes_touching() {
        let a = Circle::new(Vec2::new(0.0, 0.0), Vec2::ZERO, 0.06);
        let b = Circle::new(Vec2::new(0.12, 0.0), Vec2::ZERO, 0.06);
        assert!(is_colliding(&a, &b));
        let c = Circle::new(Vec2::new(0.121, 0.0), Vec2::ZERO, 0.06);
        assert!(!is_colliding(&a, &c));
    }

    #[test]
    fn test_racket_contact_records_last_touch() {
        let settings = GameSettings::default();
        let local = Player::new("me".into(), "Me".into(), Team::Red, &settings);
        let mut world = World::new(local);
        world.puck.center = world.local.racket.center
            + Vec2::new(world.local.racket.radius + world.puck.radius - 0.005, 0.0);
        world.puck.vel = Vec2::new(-0.01, 0.0);

        let mut events = Events::new();
        collide_rackets(&mut world, &mut events);

        assert!(events.puck_hit_racket);
        assert_eq!(world.last_touch[Team::Red.side()], Some("me".into()));
        assert_eq!(world.last_touch[Team::Blue.side()], None);
        assert!(world.puck.vel.x > 0.0, "puck driven away from the racket");
    }

    #[test]
    fn test_boundary_sweep_detects_left_goal() {
        let settings = GameSettings::default();
        let local = Player::new("me".into(), "Me".into(), Team::Red, &settings);
        let mut world = World::new(local);
        world.puck.center = Vec2::new(
            Params::BORDER_SIZE - settings.puck_radius - 0.001,
            Params::WIDTH / 2.0,
        );

        let mut events = Events::new();
        collide_boundary(&mut world, &mut events);

        let goal = events.goal.expect("goal should fire");
        assert_eq!(goal.side, 0);
        assert_eq!(goal.scorer, None, "no touch recorded yet");
    }
}
