//! Pure 2D helpers shared by the collision engine.

use glam::Vec2;

/// 2D cross product (z component of the 3D cross).
pub fn cross(a: Vec2, b: Vec2) -> f32 {
    a.perp_dot(b)
}

/// Area of the triangle `abc`.
pub fn triangle_area(a: Vec2, b: Vec2, c: Vec2) -> f32 {
    cross(b - a, c - a).abs() / 2.0
}

/// True when `a`, `b`, `c` wind counter-clockwise.
pub fn is_ccw(a: Vec2, b: Vec2, c: Vec2) -> bool {
    cross(b - a, c - a) > 0.0
}

/// Shortest distance from `o` to the segment `pq`.
///
/// When the projection of `o` falls inside the segment this is the
/// perpendicular distance via the triangle-area identity; otherwise it is
/// the distance to the nearer endpoint.
pub fn distance_to_segment(o: Vec2, p: Vec2, q: Vec2) -> f32 {
    if (o - p).dot(q - p) >= 0.0 && (o - q).dot(p - q) >= 0.0 {
        2.0 * triangle_area(o, p, q) / p.distance(q)
    } else {
        o.distance(p).min(o.distance(q))
    }
}

/// Reflect `v` about `axis` (any length). A zero axis reflects nothing and
/// returns `v` unchanged, so degenerate geometry never produces NaN.
pub fn reflect(v: Vec2, axis: Vec2) -> Vec2 {
    let n = axis.normalize_or_zero();
    if n == Vec2::ZERO {
        return v;
    }
    v - 2.0 * v.dot(n) * n
}
