use serde_derive::{Deserialize, Serialize};

use crate::{Coordinate, Point};

#[derive(Default, PartialEq, Eq, Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Size<T = i32> {
    pub width: T,
    pub height: T,
}

pub type SizeF = Size<f32>;

impl<T> Size<T> {
    pub fn new(width: T, height: T) -> Self {
        Self { width, height }
    }
}

impl<T: Coordinate> Size<T> {
    pub fn is_empty(&self) -> bool {
        self.width <= T::zero() || self.height <= T::zero()
    }
}

impl<T> From<Point<T>> for Size<T> {
    fn from(point: Point<T>) -> Self {
        Self::new(point.x, point.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[test]
    fn size_from_point() {
        assert_eq!(Size::from(Point::new(3, -4)), Size::new(3, -4));
        assert_eq!(Point::from(Size::new(2.5, 1.0)), Point::new(2.5, 1.0));
    }

    #[test]
    fn empty_sizes() {
        assert!(Size::<i32>::default().is_empty());
        assert!(Size::new(5, -1).is_empty());
        assert!(!SizeF::new(0.5, 0.5).is_empty());
    }
}
