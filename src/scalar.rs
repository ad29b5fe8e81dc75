//! Element types the arithmetic engine accepts
//!
//! Arithmetic on entries goes through checked operations so that a result
//! that cannot be represented surfaces as [`crate::MatrixError::Overflow`]
//! instead of panicking or wrapping.

use std::ops::Neg;

use num_traits::Num;

/// A signed integer or real usable as a matrix value
///
/// Each checked operation returns `None` when the result is not
/// representable: integer overflow, or a non-finite result for reals.
pub trait Scalar: Copy + Num + Neg<Output = Self> + 'static {
    fn add_checked(self, rhs: Self) -> Option<Self>;

    fn sub_checked(self, rhs: Self) -> Option<Self>;

    fn mul_checked(self, rhs: Self) -> Option<Self>;

    fn neg_checked(self) -> Option<Self>;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn add_checked(self, rhs: Self) -> Option<Self> {
                self.checked_add(rhs)
            }

            #[inline]
            fn sub_checked(self, rhs: Self) -> Option<Self> {
                self.checked_sub(rhs)
            }

            #[inline]
            fn mul_checked(self, rhs: Self) -> Option<Self> {
                self.checked_mul(rhs)
            }

            #[inline]
            fn neg_checked(self) -> Option<Self> {
                self.checked_neg()
            }
        }
    )*};
}

macro_rules! impl_scalar_float {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn add_checked(self, rhs: Self) -> Option<Self> {
                Some(self + rhs).filter(|v| v.is_finite())
            }

            #[inline]
            fn sub_checked(self, rhs: Self) -> Option<Self> {
                Some(self - rhs).filter(|v| v.is_finite())
            }

            #[inline]
            fn mul_checked(self, rhs: Self) -> Option<Self> {
                Some(self * rhs).filter(|v| v.is_finite())
            }

            #[inline]
            fn neg_checked(self) -> Option<Self> {
                Some(-self).filter(|v| v.is_finite())
            }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64, i128, isize);
impl_scalar_float!(f32, f64);
