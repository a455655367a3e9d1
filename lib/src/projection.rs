//! Rotation of a turtle about the center of a square followed by a projection
//! of the rotated point onto the nearest wall.
//!
//! The projection assumes the rotated point stays within the quadrant pair
//! picked from the direction of travel. Paths that would cross three quadrants
//! are not handled and land on whichever wall that direction selects.

use std::{f64::consts::PI, fmt::Display};

use serde::Serialize;

use crate::{
    math::{noneg_float, sign, NegError, NoNeg, Point, Vector},
    utils::Float,
};

/// Which pair of walls a projection ends on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Wall {
    /// `x = ±c`, projection runs along x
    Vertical,
    /// `y = ±c`, projection runs along y
    Horizontal,
}

impl Wall {
    /// Wall closest to the direction `theta` (radians).
    ///
    /// `cos(2θ + π)` is positive exactly when the direction is steeper than
    /// 45°. Zero and NaN fall to [`Wall::Vertical`]. Note that the 45° ties do
    /// not round the same way: `θ = π/4` gives `Vertical` and `θ = -π/4` gives
    /// `Horizontal`, because `cos` of `3π/2` and `π/2` round to opposite signs.
    pub fn nearest(theta: Float) -> Self {
        if (2. * theta + PI).cos() > 0. {
            Wall::Horizontal
        } else {
            Wall::Vertical
        }
    }
}

impl Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Wall::Vertical => write!(f, "vertical"),
            Wall::Horizontal => write!(f, "horizontal"),
        }
    }
}

/// Every intermediate of [`project`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Projection {
    turtle: Vector,
    rotated: Vector,
    direction: Vector,
    wall: Wall,
    projected: Vector,
    displacement: Vector,
}

impl Projection {
    /// Turtle position relative to the center
    pub fn turtle(&self) -> Vector {
        self.turtle
    }

    /// Turtle rotated by +90° about the center
    pub fn rotated(&self) -> Vector {
        self.rotated
    }

    /// From turtle to rotated turtle. Its angle is the projection direction.
    pub fn direction(&self) -> Vector {
        self.direction
    }

    pub fn wall(&self) -> Wall {
        self.wall
    }

    /// Rotated turtle pushed out onto the wall
    pub fn projected(&self) -> Vector {
        self.projected
    }

    /// From turtle to projected point
    pub fn displacement(&self) -> Vector {
        self.displacement
    }
}

/// Runs the rotate and project algorithm keeping all intermediates.
///
/// `x`, `y` are shifted by `-c` before use, so the turtle relative to the
/// center is `(x - c, y - c)`. `c` is the distance from the center to each wall.
/// Nothing is validated. A turtle in the center gives a zero displacement,
/// a zero `c` collapses the walls onto the axes, and NaN or infinite inputs
/// propagate into the result.
pub fn project(x: Float, y: Float, c: Float) -> Projection {
    let turtle = Vector::new(x - c, y - c);
    let rotated = Vector::new(-turtle.y(), turtle.x());
    let direction = rotated - turtle;
    // angle of the ray from the rotated point to the wall equals the angle of `direction`
    let theta = direction.a();
    let wall = Wall::nearest(theta);

    let offset = match wall {
        Wall::Vertical => {
            let dx = sign(direction.x()) * c - rotated.x();
            Vector::new(dx, dx * theta.tan())
        }
        Wall::Horizontal => {
            // the wall side is picked from the x direction on this branch too
            let dy = sign(direction.x()) * c - rotated.y();
            Vector::new(dy * theta.tan(), dy)
        }
    };

    let projected = rotated + offset;
    Projection {
        turtle,
        rotated,
        direction,
        wall,
        projected,
        displacement: projected - turtle,
    }
}

/// Displacement from the turtle to the wall projection of the turtle rotated 90° about the center.
///
/// See [`project`] for the meaning of the arguments.
pub fn rotate_and_project(x: Float, y: Float, c: Float) -> Vector {
    project(x, y, c).displacement()
}

/// Square centered on the origin with a validated half width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SquareBoundary {
    half_width: NoNeg<Float>,
}

impl SquareBoundary {
    pub const UNIT: SquareBoundary = SquareBoundary {
        half_width: noneg_float(1.),
    };

    pub fn new(half_width: Float) -> Result<Self, NegError<Float>> {
        Ok(Self {
            half_width: NoNeg::wrap(half_width)?,
        })
    }

    pub fn half_width(&self) -> Float {
        self.half_width.unwrap()
    }

    pub fn side(&self) -> Float {
        self.half_width.doubled().unwrap()
    }

    /// Wall the point lies on within `epsilon`, vertical walls checked first
    pub fn wall_of(&self, point: Point<Float>, epsilon: Float) -> Option<Wall> {
        let c = self.half_width();
        if (point.x().abs() - c).abs() <= epsilon {
            Some(Wall::Vertical)
        } else if (point.y().abs() - c).abs() <= epsilon {
            Some(Wall::Horizontal)
        } else {
            None
        }
    }

    pub fn rotate_and_project(&self, turtle: Point<Float>) -> Projection {
        project(turtle.x(), turtle.y(), self.half_width())
    }
}
