//! The `"<x> <y>"` text form of a point.
//!
//! Both coordinates are written with their standard [`Display`] form, separated by a single
//! space. Reading accepts any whitespace around and between the two tokens.
//!
//! Floats are written in Rust's shortest round-trip decimal spelling, never in exponent form:
//! `1e20` is written as `100000000000000000000` and `1e-7` as `0.0000001`. Readers that expect
//! C-stream output such as `1e+20` must accept plain decimals; this reader accepts both.

use std::{
    fmt::{self, Display, Formatter},
    marker::PhantomData,
    str::FromStr,
};

use miette::{Diagnostic, SourceSpan};
use serde::{
    de::{self, Visitor},
    Deserialize, Deserializer, Serialize, Serializer,
};
use winnow::{ascii::multispace0, combinator::preceded, token::take_till, PResult, Parser};

use crate::{Coordinate, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

impl Display for Axis {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => formatter.write_str("x"),
            Self::Y => formatter.write_str("y"),
        }
    }
}

/// Reading a point failed. The point being read is never partially updated.
///
/// Spans are byte offsets into `src`, the input as it was when reading started.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ParsePointError {
    #[error("Missing {axis} coordinate")]
    #[diagnostic(code(planar::point::missing_coordinate))]
    Missing {
        axis: Axis,
        #[source_code]
        src: String,
        #[label("input ends here")]
        span: SourceSpan,
    },
    #[error("Invalid {axis} coordinate '{token}'")]
    #[diagnostic(code(planar::point::invalid_coordinate))]
    Malformed {
        axis: Axis,
        token: String,
        #[source_code]
        src: String,
        #[label("not a valid coordinate")]
        span: SourceSpan,
    },
    #[error("Unexpected input after the y coordinate")]
    #[diagnostic(
        code(planar::point::trailing_input),
        help("a point is written as two whitespace-separated coordinates, like '7 -3'")
    )]
    TrailingInput {
        #[source_code]
        src: String,
        #[label("unexpected")]
        span: SourceSpan,
    },
}

impl ParsePointError {
    pub fn span(&self) -> SourceSpan {
        match self {
            Self::Missing { span, .. }
            | Self::Malformed { span, .. }
            | Self::TrailingInput { span, .. } => *span,
        }
    }
}

fn parse_token<'s>(input: &mut &'s str) -> PResult<&'s str> {
    preceded(multispace0, take_till(1.., |c: char| c.is_whitespace())).parse_next(input)
}

fn read_coordinate<T: Coordinate>(
    rest: &mut &str,
    src: &str,
    axis: Axis,
) -> Result<T, ParsePointError> {
    let Ok(token) = parse_token(rest) else {
        return Err(ParsePointError::Missing {
            axis,
            src: src.to_owned(),
            span: (src.len(), 0).into(),
        });
    };

    let offset = src.len() - rest.len() - token.len();

    T::parse_coordinate
        .parse(token)
        .map_err(|_| ParsePointError::Malformed {
            axis,
            token: token.to_owned(),
            src: src.to_owned(),
            span: (offset, token.len()).into(),
        })
}

fn read_point<T: Coordinate>(rest: &mut &str, src: &str) -> Result<Point<T>, ParsePointError> {
    let x = read_coordinate(rest, src, Axis::X)?;
    let y = read_coordinate(rest, src, Axis::Y)?;

    Ok(Point::new(x, y))
}

impl<T: Coordinate> Point<T> {
    /// Reads one point from the front of `input`, and advances `input` past it.
    ///
    /// Leaves `input` untouched on failure, so consecutive points can be read from one string:
    ///
    /// ```
    /// # use planar::Point;
    /// let mut input = "1 2\n3 4";
    /// assert_eq!(Point::<i32>::read(&mut input).unwrap(), Point::new(1, 2));
    /// assert_eq!(Point::<i32>::read(&mut input).unwrap(), Point::new(3, 4));
    /// assert!(Point::<i32>::read(&mut input).is_err());
    /// ```
    pub fn read(input: &mut &str) -> Result<Self, ParsePointError> {
        let src = *input;
        let mut rest = src;

        match read_point(&mut rest, src) {
            Ok(point) => {
                *input = rest;
                Ok(point)
            }
            Err(err) => {
                tracing::trace!(input = src, offset = err.span().offset(), "{err}");
                Err(err)
            }
        }
    }
}

impl<T: Coordinate> Display for Point<T> {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} {}", self.x, self.y)
    }
}

impl<T: Coordinate> FromStr for Point<T> {
    type Err = ParsePointError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rest = s;
        let point = Self::read(&mut rest)?;

        let trailing = rest.trim_start();
        if trailing.is_empty() {
            Ok(point)
        } else {
            Err(ParsePointError::TrailingInput {
                src: s.to_owned(),
                span: (s.len() - trailing.len(), trailing.trim_end().len()).into(),
            })
        }
    }
}

impl<T: Coordinate> Serialize for Point<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct PointVisitor<T>(PhantomData<T>);

impl<'de, T: Coordinate> Visitor<'de> for PointVisitor<T> {
    type Value = Point<T>;

    fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str("a point written as two whitespace-separated coordinates")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }
}

impl<'de, T: Coordinate> Deserialize<'de> for Point<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(PointVisitor(PhantomData))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use serde::de::{
        value::{Error as ValueError, StrDeserializer},
        IntoDeserializer,
    };

    use pretty_assertions::assert_eq;

    use crate::PointF;

    #[test]
    fn display_is_space_separated() {
        assert_eq!(Point::new(7, -3).to_string(), "7 -3");
        assert_eq!(PointF::new(1.5, -0.25).to_string(), "1.5 -0.25");
        assert_eq!(PointF::new(2.0, 0.0).to_string(), "2 0");
    }

    #[test]
    fn floats_are_written_without_exponents() {
        assert_eq!(
            PointF::new(1.0e20, 1.0e-7).to_string(),
            "100000000000000000000 0.0000001"
        );
        assert_eq!(
            "1e+20 1e-7".parse::<PointF>().unwrap(),
            PointF::new(1.0e20, 1.0e-7)
        );
    }

    #[test]
    fn round_trip() {
        let p = Point::new(7, -3);
        assert_eq!(p.to_string().parse::<Point>().unwrap(), p);

        for &p in &[
            PointF::new(0.1, -123.456),
            PointF::new(1.0e-7, 3.0e20),
            PointF::new(f32::MAX, f32::MIN_POSITIVE),
        ] {
            assert_eq!(p.to_string().parse::<PointF>().unwrap(), p);
        }

        let p = Point::<i64>::new(i64::MIN + 1, i64::MAX);
        assert_eq!(p.to_string().parse::<Point<i64>>().unwrap(), p);
    }

    #[test]
    fn surrounding_whitespace() {
        assert_eq!("  4\t\n-5  \n".parse::<Point>().unwrap(), Point::new(4, -5));
        assert_eq!("+4 5".parse::<Point>().unwrap(), Point::new(4, 5));
        assert_eq!("1 2.5e-1".parse::<PointF>().unwrap(), PointF::new(1.0, 0.25));
    }

    #[test]
    fn malformed_coordinates() {
        let err = "7 x".parse::<Point>().unwrap_err();
        match err {
            ParsePointError::Malformed {
                axis, ref token, ..
            } => {
                assert_eq!(axis, Axis::Y);
                assert_eq!(token, "x");
            }
            ref other => panic!("unexpected error {other:?}"),
        }
        assert_eq!(err.span(), (2, 1).into());

        let err = "1.5 2".parse::<Point>().unwrap_err();
        assert!(matches!(
            err,
            ParsePointError::Malformed { axis: Axis::X, .. }
        ));
        assert_eq!(err.span(), (0, 3).into());

        assert!(matches!(
            "5a 2".parse::<Point>(),
            Err(ParsePointError::Malformed { axis: Axis::X, .. })
        ));
        assert!(matches!(
            "1 99999".parse::<Point<i16>>(),
            Err(ParsePointError::Malformed { axis: Axis::Y, .. })
        ));
    }

    #[test]
    fn missing_coordinates() {
        let err = "".parse::<Point>().unwrap_err();
        assert!(matches!(err, ParsePointError::Missing { axis: Axis::X, .. }));

        let err = "  12  ".parse::<Point>().unwrap_err();
        assert!(matches!(err, ParsePointError::Missing { axis: Axis::Y, .. }));
        assert_eq!(err.span(), (6, 0).into());
    }

    #[test]
    fn trailing_input() {
        let err = "1 2 3".parse::<Point>().unwrap_err();
        assert!(matches!(err, ParsePointError::TrailingInput { .. }));
        assert_eq!(err.span(), (4, 1).into());
        assert_eq!(err.to_string(), "Unexpected input after the y coordinate");
    }

    #[test]
    fn read_stops_after_one_point() {
        let mut input = "10 20 -30 40 oops";

        assert_eq!(Point::<i32>::read(&mut input).unwrap(), Point::new(10, 20));
        assert_eq!(input, " -30 40 oops");
        assert_eq!(Point::<i32>::read(&mut input).unwrap(), Point::new(-30, 40));
        assert_eq!(input, " oops");

        assert!(Point::<i32>::read(&mut input).is_err());
        assert_eq!(input, " oops");
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            "7 x".parse::<Point>().unwrap_err().to_string(),
            "Invalid y coordinate 'x'"
        );
        assert_eq!(
            "7".parse::<Point>().unwrap_err().to_string(),
            "Missing y coordinate"
        );
    }

    #[test]
    fn deserializes_from_text() {
        let de: StrDeserializer<'_, ValueError> = "7 -3".into_deserializer();
        assert_eq!(Point::<i32>::deserialize(de).unwrap(), Point::new(7, -3));

        let de: StrDeserializer<'_, ValueError> = "7".into_deserializer();
        assert!(Point::<i32>::deserialize(de).is_err());
    }
}
