use std::hash::{Hash, Hasher};

use num_traits::CheckedDiv;

use crate::{Coordinate, IntCoordinate, Size};

mod ops;
pub mod parse;

pub use self::parse::{Axis, ParsePointError};

/// A position on the plane.
///
/// Integer points ([`Point`]) and floating-point points ([`PointF`]) share one implementation;
/// the coordinate type only has to be a [`Coordinate`].
///
/// Points are compared exactly, with no epsilon, even when the coordinates are floats. They are
/// deliberately not [`PartialOrd`]: see [`Point::all_lt`] and friends for the coordinate-wise
/// comparisons used for containment checks.
#[derive(Default, PartialEq, Eq, Debug, Clone, Copy)]
pub struct Point<T = i32> {
    pub x: T,
    pub y: T,
}

pub type PointF = Point<f32>;

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T: Copy> Point<T> {
    /// A point with both coordinates set to `xy`.
    pub fn splat(xy: T) -> Self {
        Self::new(xy, xy)
    }

    pub fn to_size(&self) -> Size<T> {
        Size::new(self.x, self.y)
    }
}

impl<T: Coordinate> Point<T> {
    /// `true` if both coordinates are exactly zero.
    pub fn is_null(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn translated(&self, dx: T, dy: T) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Divides both coordinates by `factor` in place, and returns the scaled point.
    ///
    /// The division is carried out as `coord - coord * (1 - 1 / factor)` in `f32` and cast back
    /// to `T`, so integer coordinates truncate toward zero. A factor of exactly `1.0` leaves the
    /// point untouched, bit for bit.
    ///
    /// A factor of zero is not rejected: float coordinates become infinite or NaN, and integer
    /// coordinates saturate through the cast (or become zero, for a zero coordinate).
    ///
    /// ```
    /// # use planar::Point;
    /// let mut p = Point::new(6, 6);
    /// assert_eq!(p.scale(2.0), Point::new(3, 3));
    /// assert_eq!(p, Point::new(3, 3));
    /// ```
    pub fn scale(&mut self, factor: f32) -> Self {
        if factor != 1.0 {
            let shrink = 1.0 - 1.0 / factor;

            self.x = T::from_f32(self.x.to_f32() - self.x.to_f32() * shrink);
            self.y = T::from_f32(self.y.to_f32() - self.y.to_f32() * shrink);
        }

        *self
    }

    /// Non-mutating version of [`Point::scale`].
    pub fn scaled(mut self, factor: f32) -> Self {
        self.scale(factor)
    }

    /// Euclidean distance from the origin.
    ///
    /// Always computed in `f32`, so squaring large integer coordinates cannot overflow.
    pub fn length(&self) -> f32 {
        let (x, y) = (self.x.to_f32(), self.y.to_f32());
        (x * x + y * y).sqrt()
    }

    /// `|x| + |y|`, in the coordinate type.
    ///
    /// # Panics
    ///
    /// Like any integer arithmetic, overflows in debug builds when a coordinate is `T::MIN` or
    /// the sum does not fit.
    pub fn manhattan_length(&self) -> T {
        self.x.abs() + self.y.abs()
    }

    pub fn distance_from(&self, other: &Self) -> f32 {
        (*self - *other).length()
    }

    pub fn all_le(&self, other: &Self) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    pub fn all_ge(&self, other: &Self) -> bool {
        self.x >= other.x && self.y >= other.y
    }

    /// `true` if both coordinates are strictly less than those of `other`.
    ///
    /// This is a partial order: two points can be incomparable, with neither `a.all_lt(&b)` nor
    /// `b.all_lt(&a)` (nor `a == b`) holding.
    ///
    /// ```
    /// # use planar::Point;
    /// let (a, b) = (Point::new(1, 5), Point::new(5, 1));
    /// assert!(!a.all_lt(&b) && !b.all_lt(&a));
    /// assert!(Point::new(0, 0).all_lt(&b));
    /// ```
    pub fn all_lt(&self, other: &Self) -> bool {
        self.x < other.x && self.y < other.y
    }

    pub fn all_gt(&self, other: &Self) -> bool {
        self.x > other.x && self.y > other.y
    }

    /// Combines both coordinates into a hash suitable for hash-based containers.
    ///
    /// Equal points always hash the same. Not suitable for anything security-related.
    pub fn hash_value(&self) -> u64 {
        (7 * 15_u64)
            .wrapping_add(self.x.hash_bits())
            .wrapping_mul(15)
            .wrapping_add(self.y.hash_bits())
    }
}

impl<T: IntCoordinate> Point<T> {
    /// Element-wise division that returns `None` instead of panicking on a zero divisor (or on
    /// overflow, as with `i32::MIN / -1`).
    pub fn checked_div(&self, other: &Self) -> Option<Self> {
        Some(Self::new(
            CheckedDiv::checked_div(&self.x, &other.x)?,
            CheckedDiv::checked_div(&self.y, &other.y)?,
        ))
    }
}

impl<T: Coordinate> Hash for Point<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_value());
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self::new(x, y)
    }
}

impl<T> From<Size<T>> for Point<T> {
    fn from(size: Size<T>) -> Self {
        Self::new(size.width, size.height)
    }
}
