use crate::{Params, Team};
use glam::Vec2;

/// Number of boundary vertices (and edges).
pub const EDGE_COUNT: usize = 12;

/// The closed 12-vertex boundary with two recessed goal mouths.
///
/// Vertex order is load-bearing: edge `i` runs `v[i] -> v[(i + 1) % 12]`,
/// walls wind so that `perp(p - q)` points into the rink, and every edge
/// with `i % 6 == 2` is a goal line (edge 2 guards side 0 on the left,
/// edge 8 side 1 on the right). The goal lines sit behind the goal mouth by
/// the current puck radius, so a crossing puck reaches them while still
/// fully inside the opening.
#[derive(Debug, Clone, PartialEq)]
pub struct Rink {
    vertices: [Vec2; EDGE_COUNT],
}

impl Rink {
    pub fn new(puck_radius: f32) -> Self {
        let b = Params::BORDER_SIZE;
        let w = Params::WIDTH;
        let l = Params::LENGTH;
        let gh = Params::GOAL_HEIGHT;
        let gs = Params::GOAL_SIZE;
        let r = puck_radius;
        let vertices = [
            Vec2::new(b, b),
            Vec2::new(b, gh),
            Vec2::new(b - r, gh),
            Vec2::new(b - r, gh + gs),
            Vec2::new(b, gh + gs),
            Vec2::new(b, w - b),
            Vec2::new(l - b, w - b),
            Vec2::new(l - b, w - gh),
            Vec2::new(l - b + r, w - gh),
            Vec2::new(l - b + r, gh),
            Vec2::new(l - b, gh),
            Vec2::new(l - b, b),
        ];
        Self { vertices }
    }

    pub fn vertices(&self) -> &[Vec2; EDGE_COUNT] {
        &self.vertices
    }

    /// Endpoints of edge `i` (wrapping).
    pub fn edge(&self, i: usize) -> (Vec2, Vec2) {
        (
            self.vertices[i % EDGE_COUNT],
            self.vertices[(i + 1) % EDGE_COUNT],
        )
    }

    /// Corner triple `(a, b, c)` for the wedge at vertex `i + 1` between
    /// edges `i` and `i + 1`.
    pub fn corner(&self, i: usize) -> (Vec2, Vec2, Vec2) {
        (
            self.vertices[i % EDGE_COUNT],
            self.vertices[(i + 1) % EDGE_COUNT],
            self.vertices[(i + 2) % EDGE_COUNT],
        )
    }

    /// Side whose goal edge `i` is, if it is a goal line.
    pub fn goal_side(i: usize) -> Option<usize> {
        (i % 6 == 2).then_some(i / 6)
    }

    /// Clamp a racket center into its team's legal region: the rink inset
    /// by `racket_radius + BORDER_SIZE` on every wall, restricted to the
    /// team's own half of the long axis.
    pub fn clamp_racket(pos: Vec2, team: Team, racket_radius: f32) -> Vec2 {
        let inset = racket_radius + Params::BORDER_SIZE;
        let (min_x, max_x) = match team {
            Team::Red => (inset, Params::LENGTH / 2.0),
            Team::Blue => (Params::LENGTH / 2.0, Params::LENGTH - inset),
        };
        Vec2::new(
            pos.x.clamp(min_x, max_x),
            pos.y.clamp(inset, Params::WIDTH - inset),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goal_side_mapping() {
        assert_eq!(Rink::goal_side(2), Some(0));
        assert_eq!(Rink::goal_side(8), Some(1));
        for i in [0, 1, 3, 4, 5, 6, 7, 9, 10, 11] {
            assert_eq!(Rink::goal_side(i), None, "edge {i} is not a goal line");
        }
    }

    #[test]
    fn test_goal_lines_are_recessed_by_puck_radius() {
        let rink = Rink::new(Params::PUCK_RADIUS);
        let (p, q) = rink.edge(2);
        assert_eq!(p.x, Params::BORDER_SIZE - Params::PUCK_RADIUS);
        assert_eq!(p.x, q.x);
        let (p, q) = rink.edge(8);
        assert_eq!(p.x, Params::LENGTH - Params::BORDER_SIZE + Params::PUCK_RADIUS);
        assert_eq!(p.x, q.x);
    }

    #[test]
    fn test_edges_wrap_closed() {
        let rink = Rink::new(Params::PUCK_RADIUS);
        let (_, last_end) = rink.edge(EDGE_COUNT - 1);
        let (first_start, _) = rink.edge(0);
        assert_eq!(last_end, first_start, "boundary must close");
    }

    #[test]
    fn test_clamp_racket_respects_team_half() {
        let r = Params::RACKET_RADIUS;
        let far_right = Vec2::new(Params::LENGTH, 0.5);
        let clamped = Rink::clamp_racket(far_right, Team::Red, r);
        assert_eq!(clamped.x, Params::LENGTH / 2.0, "red stays in left half");

        let far_left = Vec2::new(0.0, 0.5);
        let clamped = Rink::clamp_racket(far_left, Team::Blue, r);
        assert_eq!(clamped.x, Params::LENGTH / 2.0, "blue stays in right half");
    }

    #[test]
    fn test_clamp_racket_insets_walls() {
        let r = Params::RACKET_RADIUS;
        let inset = r + Params::BORDER_SIZE;
        let clamped = Rink::clamp_racket(Vec2::new(-1.0, -1.0), Team::Red, r);
        assert_eq!(clamped, Vec2::new(inset, inset));
        let clamped = Rink::clamp_racket(Vec2::new(9.0, 9.0), Team::Blue, r);
        assert_eq!(
            clamped,
            Vec2::new(Params::LENGTH - inset, Params::WIDTH - inset)
        );
    }
}
