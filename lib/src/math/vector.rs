use std::{
    fmt::Display,
    ops::{Add, Sub},
};

use serde::Serialize;

use crate::utils::Float;

use super::{Angle, Atan2, Sqr as _, Sqrt};

/// 2D vector holding both cartesian (`x`, `y`) and polar (`r`, `a`) components.
///
/// The polar part is derived with a single argument arctangent, so `a` is the
/// geometric angle only when `x > 0`. For `x < 0` the magnitude `r` becomes
/// negative instead, which keeps `x == r * cos(a)` and `y == r * sin(a)` true
/// for every vector. When `x == 0` both `r` and `a` are zero, even if `y` is not.
/// Use [`Vector::len`] and [`Vector::heading`] for the quadrant correct values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Vector {
    x: Float,
    y: Float,
    r: Float,
    a: Float,
}

impl Vector {
    pub fn new(x: Float, y: Float) -> Self {
        let a = if x == 0. { 0. } else { (y / x).atan() };
        let r = if x == 0. { 0. } else { x / a.cos() };
        Self { x, y, r, a }
    }

    pub fn from_polar(r: Float, a: Float) -> Self {
        Self {
            x: r * a.cos(),
            y: r * a.sin(),
            r,
            a,
        }
    }

    pub fn x(&self) -> Float {
        self.x
    }

    pub fn y(&self) -> Float {
        self.y
    }

    /// Signed magnitude, see type level docs
    pub fn r(&self) -> Float {
        self.r
    }

    /// Angle in radians, in range -PI/2..PI/2
    pub fn a(&self) -> Float {
        self.a
    }

    /// Euclidean length, never negative
    pub fn len(&self) -> Float {
        Sqrt::sqrt(self.x.sqr() + self.y.sqr())
    }

    /// Four quadrant direction of the vector
    pub fn heading(&self) -> Angle<Float> {
        Angle::from_radians(Atan2::atan2(self.y, self.x))
    }

    /// Unit vector along `a`. The zero vector is returned as is.
    pub fn normalized(&self) -> Self {
        if self.x == 0. && self.y == 0. {
            Self::new(self.x, self.y)
        } else {
            Self::from_polar(1., self.a)
        }
    }

    pub fn add(self, dx: Float, dy: Float) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn scaled(&self, r: Float) -> Self {
        Self::from_polar(r, self.a)
    }

    /// Rotates counterclockwise by `angle` radians. No degree conversion is done here.
    pub fn rotate(&self, angle: Float) -> Self {
        let cos = angle.cos();
        let sin = angle.sin();
        Self::new(
            self.x * cos + self.y * -sin,
            self.x * sin + self.y * cos,
        )
    }

    pub fn rotate_by(&self, angle: Angle<Float>) -> Self {
        self.rotate(angle.raw_radians())
    }
}

impl Add for Vector {
    type Output = Vector;
    fn add(self, rhs: Self) -> Self::Output {
        Vector::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector {
    type Output = Vector;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Vector {{ x: {}, y: {}, r: {}, a: {} }}",
            self.x, self.y, self.r, self.a
        )
    }
}
