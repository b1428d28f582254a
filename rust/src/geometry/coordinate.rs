use serde::Serialize;
use std::fmt::{Debug, Display};

/// Numeric type a shape is measured in.
///
/// Arithmetic goes through `try_add` / `try_mul` so that a result which does
/// not fit the type surfaces as `None` instead of panicking or wrapping.
pub trait Coordinate: Copy + PartialEq + PartialOrd + Debug + Display + Serialize + From<i32> {
    fn try_add(self, rhs: Self) -> Option<Self>;
    fn try_mul(self, rhs: Self) -> Option<Self>;
}

macro_rules! integer_coordinate {
    ($($t:ty),*) => {
        $(
            impl Coordinate for $t {
                fn try_add(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_add(self, rhs)
                }

                fn try_mul(self, rhs: Self) -> Option<Self> {
                    <$t>::checked_mul(self, rhs)
                }
            }
        )*
    };
}

integer_coordinate!(i32, i64);

impl Coordinate for f64 {
    fn try_add(self, rhs: Self) -> Option<Self> {
        let sum = self + rhs;
        sum.is_finite().then_some(sum)
    }

    fn try_mul(self, rhs: Self) -> Option<Self> {
        let product = self * rhs;
        product.is_finite().then_some(product)
    }
}
