use std::{
    error::Error,
    fmt::{Debug, Display},
    ops::Mul,
};

use crate::utils::Float;

use super::{IsNeg, Two};

/// Can not store negative numbers or NaN
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct NoNeg<T> {
    value: T,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NegError<T> {
    original_value: T,
}

impl<T> NegError<T> {
    pub fn original_value(self) -> T {
        self.original_value
    }
}

impl<T: Debug> Display for NegError<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "expected a non-negative number, got {:?}",
            self.original_value
        )
    }
}

impl<T> Error for NegError<T> where T: Debug {}

impl<T> NoNeg<T> {
    pub fn wrap(value: T) -> Result<Self, NegError<T>>
    where
        T: IsNeg,
    {
        if value.is_neg() {
            Err(NegError {
                original_value: value,
            })
        } else {
            Ok(Self { value })
        }
    }

    pub fn unwrap(self) -> T {
        self.value
    }

    pub fn doubled(self) -> NoNeg<<T as Mul>::Output>
    where
        T: Two + Mul,
    {
        NoNeg {
            value: self.value * T::two(),
        }
    }
}

pub const fn noneg_float(value: Float) -> NoNeg<Float> {
    assert!(value >= 0.);
    NoNeg { value }
}
