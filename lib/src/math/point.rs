use std::ops::{Add, Sub};

use crate::utils::Float;

use super::Vector;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point<T> {
    x: T,
    y: T,
}

impl<T> From<(T, T)> for Point<T> {
    fn from(value: (T, T)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl Sub for Point<Float> {
    type Output = Vector;
    fn sub(self, rhs: Self) -> Self::Output {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Vector> for Point<Float> {
    type Output = Point<Float>;
    fn add(self, rhs: Vector) -> Self::Output {
        (self.x + rhs.x(), self.y + rhs.y()).into()
    }
}

impl<T> Point<T> {
    pub fn x(self) -> T {
        self.x
    }
    pub fn y(self) -> T {
        self.y
    }
}

impl From<Vector> for Point<Float> {
    fn from(value: Vector) -> Self {
        (value.x(), value.y()).into()
    }
}
