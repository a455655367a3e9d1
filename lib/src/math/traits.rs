pub trait Sqr {
    type Output;
    fn sqr(self) -> Self::Output;
}

impl Sqr for f32 {
    type Output = f32;
    fn sqr(self) -> Self::Output {
        self * self
    }
}

impl Sqr for f64 {
    type Output = f64;
    fn sqr(self) -> Self::Output {
        self * self
    }
}

pub trait Sqrt {
    type Output;
    fn sqrt(self) -> Self::Output;
}

impl Sqrt for f32 {
    type Output = f32;

    fn sqrt(self) -> Self::Output {
        f32::sqrt(self)
    }
}

impl Sqrt for f64 {
    type Output = f64;

    fn sqrt(self) -> Self::Output {
        f64::sqrt(self)
    }
}

pub trait Atan2<Rhs = Self> {
    type Output;
    fn atan2(self, rhs: Rhs) -> Self::Output;
}

impl Atan2 for f32 {
    type Output = f32;

    fn atan2(self, rhs: Self) -> Self::Output {
        f32::atan2(self, rhs)
    }
}

impl Atan2 for f64 {
    type Output = f64;

    fn atan2(self, rhs: Self) -> Self::Output {
        f64::atan2(self, rhs)
    }
}

pub trait RemEuclid<Rhs = Self> {
    type Output;
    fn rem_euclid(self, rhs: Rhs) -> Self::Output;
}

impl RemEuclid for f32 {
    type Output = f32;

    fn rem_euclid(self, rhs: Self) -> Self::Output {
        f32::rem_euclid(self, rhs)
    }
}

impl RemEuclid for f64 {
    type Output = f64;

    fn rem_euclid(self, rhs: Self) -> Self::Output {
        f64::rem_euclid(self, rhs)
    }
}

pub trait Pi {
    fn pi() -> Self;
}

pub trait Two {
    fn two() -> Self;
}

pub trait IsNeg {
    /// NaN counts as negative: it can not be proven to be >= 0
    fn is_neg(&self) -> bool;
}

macro_rules! impl_float_traits {
    ($($t:ident),*) => {
        $(
            impl Pi for $t {
                fn pi() -> Self {
                    std::$t::consts::PI
                }
            }

            impl Two for $t {
                fn two() -> Self {
                    2.
                }
            }

            impl IsNeg for $t {
                fn is_neg(&self) -> bool {
                    !(*self >= 0.)
                }
            }
        )*
    };
}

impl_float_traits!(f32, f64);

#[cfg(test)]
mod tests {
    use super::IsNeg;

    #[test]
    fn is_neg() {
        assert!((-1.0_f64).is_neg());
        assert!(f64::NAN.is_neg());
        assert!(f64::NEG_INFINITY.is_neg());
        assert!(!0.0_f64.is_neg());
        assert!(!(-0.0_f64).is_neg());
        assert!(!f32::INFINITY.is_neg());
    }
}
