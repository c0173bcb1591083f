use std::{
    fmt::{Debug, Display},
    ops::{BitAnd, BitAndAssign},
};

use num_traits::{CheckedDiv, Num, Signed};
use winnow::{
    ascii::{dec_int, float},
    PResult,
};

/// A numeric type usable as the element of a [`Point`](crate::Point).
///
/// Integer and floating-point coordinates mix freely with `f32` scale factors: every coordinate
/// can be cast to `f32` and back with the semantics of an `as` cast, so integer results truncate
/// toward zero and saturate at the bounds of the type.
///
/// `f64` is not a coordinate: scale factors are `f32`, and scaling through them would drop
/// precision and range.
///
/// ```compile_fail
/// # use planar::Point;
/// let _ = Point::<f64>::new(0.0, 0.0).scaled(2.0);
/// ```
pub trait Coordinate: Num + Signed + Copy + PartialOrd + Display + Debug {
    /// Widens the coordinate to `f32`, as `self as f32`. Large `i64` values lose precision.
    fn to_f32(self) -> f32;

    /// Converts back from `f32`, as `f as Self`.
    ///
    /// Integers truncate toward zero and saturate at `Self::MIN`/`Self::MAX`, so infinities land
    /// on the bounds. NaN becomes `0`.
    fn from_f32(f: f32) -> Self;

    /// Bit pattern fed into [`Point::hash_value`](crate::Point::hash_value).
    ///
    /// Coordinates that compare equal must produce the same bits.
    fn hash_bits(self) -> u64;

    /// Reads the standard textual form of the coordinate from the front of `input`.
    fn parse_coordinate(input: &mut &str) -> PResult<Self>;
}

/// Coordinates that support masking with `&`.
pub trait IntCoordinate: Coordinate + BitAnd<Output = Self> + BitAndAssign + CheckedDiv {}

macro_rules! int_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            fn to_f32(self) -> f32 {
                self as f32
            }

            fn from_f32(f: f32) -> Self {
                f as $t
            }

            fn hash_bits(self) -> u64 {
                self as i64 as u64
            }

            fn parse_coordinate(input: &mut &str) -> PResult<Self> {
                dec_int(input)
            }
        }

        impl IntCoordinate for $t {}
    )*};
}

macro_rules! float_coordinate {
    ($($t:ty),*) => {$(
        impl Coordinate for $t {
            fn to_f32(self) -> f32 {
                self as f32
            }

            fn from_f32(f: f32) -> Self {
                f as $t
            }

            fn hash_bits(self) -> u64 {
                // -0.0 == 0.0
                if self == 0.0 {
                    0
                } else {
                    self.to_bits() as u64
                }
            }

            fn parse_coordinate(input: &mut &str) -> PResult<Self> {
                float(input)
            }
        }
    )*};
}

int_coordinate!(i16, i32, i64);
float_coordinate!(f32);
