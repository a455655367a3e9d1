pub type Float = f64;

/// Tolerance used when deciding whether a projected point sits on a wall
pub const WALL_EPSILON: Float = 1e-9;
