//! Arithmetic on points.
//!
//! Point-by-point operators work element-wise. Integer division by a point with a zero
//! coordinate panics, as integer division does; use [`Point::checked_div`] to avoid that.
//! Multiplying or dividing by an `f32` factor goes through `f32` and casts back to the coordinate
//! type.
//!
//! Masking with `&` is only available for integer coordinates:
//!
//! ```
//! # use planar::Point;
//! assert_eq!(Point::new(0x1234, -1) & 0xff, Point::new(0x34, 0xff));
//! ```
//!
//! ```compile_fail
//! # use planar::PointF;
//! let _ = PointF::new(1.0, 2.0) & 1.0;
//! ```

use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{Coordinate, IntCoordinate, Point};

impl<T: Coordinate> Neg for Point<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

macro_rules! elementwise {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $op:tt;)*) => {$(
        impl<T: Coordinate> $trait for Point<T> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                Self::new(self.x $op rhs.x, self.y $op rhs.y)
            }
        }

        impl<T: Coordinate> $assign_trait for Point<T> {
            fn $assign_method(&mut self, rhs: Self) {
                *self = *self $op rhs;
            }
        }
    )*};
}

elementwise! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

macro_rules! factor {
    ($($trait:ident::$method:ident, $assign_trait:ident::$assign_method:ident, $op:tt;)*) => {$(
        impl<T: Coordinate> $trait<f32> for Point<T> {
            type Output = Self;

            fn $method(self, factor: f32) -> Self {
                Self::new(
                    T::from_f32(self.x.to_f32() $op factor),
                    T::from_f32(self.y.to_f32() $op factor),
                )
            }
        }

        impl<T: Coordinate> $assign_trait<f32> for Point<T> {
            fn $assign_method(&mut self, factor: f32) {
                *self = *self $op factor;
            }
        }
    )*};
}

factor! {
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

// Spelled out per coordinate type, so `Point<T> + T` never has to be told apart from
// `Point<T> + Point<T>` generically.
macro_rules! scalar {
    ($($t:ty),*) => {$(
        impl Point<$t> {
            pub const ZERO: Self = Self::new(0 as $t, 0 as $t);
        }

        impl Add<$t> for Point<$t> {
            type Output = Self;

            fn add(self, rhs: $t) -> Self {
                Self::new(self.x + rhs, self.y + rhs)
            }
        }

        impl AddAssign<$t> for Point<$t> {
            fn add_assign(&mut self, rhs: $t) {
                *self = *self + rhs;
            }
        }

        impl Sub<$t> for Point<$t> {
            type Output = Self;

            fn sub(self, rhs: $t) -> Self {
                Self::new(self.x - rhs, self.y - rhs)
            }
        }

        impl SubAssign<$t> for Point<$t> {
            fn sub_assign(&mut self, rhs: $t) {
                *self = *self - rhs;
            }
        }
    )*};
}

scalar!(i16, i32, i64, f32);

impl<T: IntCoordinate> BitAnd<T> for Point<T> {
    type Output = Self;

    fn bitand(self, mask: T) -> Self {
        Self::new(self.x & mask, self.y & mask)
    }
}

impl<T: IntCoordinate> BitAndAssign<T> for Point<T> {
    fn bitand_assign(&mut self, mask: T) {
        self.x &= mask;
        self.y &= mask;
    }
}
