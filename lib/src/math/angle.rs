use std::ops::{Div, Mul};

use super::{Pi, RemEuclid, Two};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angle<T> {
    value: T,
}

impl<T> Angle<T> {
    pub fn from_radians(value: T) -> Self {
        Self { value }
    }

    pub fn from_degrees(value: T) -> Self
    where
        T: Pi + Mul<Output = T> + Div<f64, Output = T>,
    {
        Self {
            value: value * T::pi() / 180.,
        }
    }

    /// Result in range 0..PI*2
    pub fn radians(self) -> T
    where
        T: Pi + Two + Mul<Output = T> + RemEuclid<Output = T>,
    {
        normalize_radians(self.value)
    }

    /// Result in range 0..360
    pub fn degrees(self) -> T
    where
        T: Pi
            + Two
            + Mul<Output = T>
            + Mul<f64, Output = T>
            + Div<Output = T>
            + RemEuclid<Output = T>,
    {
        normalize_radians(self.value) / T::pi() * 180.
    }

    /// Value as constructed, not normalized
    pub fn raw_radians(self) -> T {
        self.value
    }
}

fn normalize_radians<T>(value: T) -> T
where
    T: Pi + Two + Mul<Output = T> + RemEuclid<Output = T>,
{
    value.rem_euclid(T::pi() * T::two())
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use approx::assert_abs_diff_eq;

    use super::Angle;

    #[test]
    fn normalize() {
        assert_eq!(super::normalize_radians(0.5 * PI), 0.5 * PI);
        assert_eq!(super::normalize_radians(-0.5 * PI), 1.5 * PI);
        assert_eq!(super::normalize_radians(2.5 * PI), 0.5 * PI);
        assert_eq!(super::normalize_radians(-2.5 * PI), 1.5 * PI);
    }

    #[test]
    fn degrees_to_radians() {
        assert_abs_diff_eq!(Angle::from_degrees(90.).radians(), PI / 2., epsilon = 1e-15);
        assert_abs_diff_eq!(Angle::from_degrees(-90.).radians(), 1.5 * PI, epsilon = 1e-15);
        assert_abs_diff_eq!(Angle::from_degrees(450.).degrees(), 90., epsilon = 1e-12);
    }

    #[test]
    fn raw_radians_are_not_normalized() {
        assert_eq!(Angle::from_radians(90.).raw_radians(), 90.);
        assert_eq!(Angle::from_radians(-0.5 * PI).raw_radians(), -0.5 * PI);
        assert_abs_diff_eq!(Angle::from_degrees(-90.).raw_radians(), -0.5 * PI, epsilon = 1e-15);
    }
}
