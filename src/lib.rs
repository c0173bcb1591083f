//! Points on the plane, for integer and floating-point coordinates.
//!
//! ```
//! use planar::{Point, PointF};
//!
//! let p = Point::new(3, 4);
//! assert_eq!(p.length(), 5.0);
//! assert_eq!(p.to_string(), "3 4");
//! assert_eq!("3 4".parse::<Point>().unwrap(), p);
//!
//! let q = PointF::new(6.0, 6.0).scaled(2.0);
//! assert_eq!(q, PointF::new(3.0, 3.0));
//! ```

mod coordinate;
pub mod point;
mod size;

pub use self::{
    coordinate::{Coordinate, IntCoordinate},
    point::{Axis, ParsePointError, Point, PointF},
    size::{Size, SizeF},
};
