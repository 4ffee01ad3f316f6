/// Fixed rink dimensions and tuning defaults.
///
/// Everything is in rink-normalized units: the short side of the table is
/// 1.0 and `x` runs along the long axis. The goals sit on the short sides.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Rink
    pub const WIDTH: f32 = 1.0;
    pub const LENGTH: f32 = 1.671_728_1;
    pub const BORDER_SIZE: f32 = 0.053_399_132;
    pub const GOAL_SIZE: f32 = 0.447_646_74;
    pub const GOAL_HEIGHT: f32 = 0.276_176_63;

    // Puck
    pub const PUCK_RADIUS: f32 = 0.03;
    pub const MAX_PUCK_SPEED: f32 = 0.04;
    /// Serve velocity component. Near-zero but never exactly zero, so the
    /// first collision never normalizes a zero vector.
    pub const SERVE_BIAS: f32 = 0.001;

    // Racket
    pub const RACKET_RADIUS: f32 = 0.06;

    // Tick
    pub const TICK_PERIOD_MS: u64 = 17;
}
