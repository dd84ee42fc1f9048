//! Decoded geometry payloads.

use std::fmt;

use super::{Point, ShapeType};

/// A decoded geometry record.
///
/// Closed sum over the record kinds this crate decodes; each decoded kind
/// carries its own payload. Tags without a variant here are still valid
/// members of [`ShapeType`] but fail decoding with an explicit
/// unsupported-type error, so a `Shape` value always holds fully parsed
/// geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Null shape: a placeholder record with no geometry.
    Null,
    /// A single point.
    Point(Point),
}

impl Shape {
    /// The tag this payload was decoded from.
    pub fn shape_type(&self) -> ShapeType {
        match self {
            Shape::Null => ShapeType::Null,
            Shape::Point(_) => ShapeType::Point,
        }
    }

    /// Render the geometry as Well-Known Text.
    ///
    /// A null shape has no geometry and renders as the empty collection.
    pub fn to_wkt(&self) -> String {
        match self {
            Shape::Null => "GEOMETRYCOLLECTION EMPTY".to_string(),
            Shape::Point(point) => format!("POINT ({} {})", point.x, point.y),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_wkt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_type() {
        assert_eq!(Shape::Null.shape_type(), ShapeType::Null);
        assert_eq!(
            Shape::Point(Point::new(1.0, 2.0)).shape_type(),
            ShapeType::Point
        );
    }

    #[test]
    fn test_wkt_point() {
        let shape = Shape::Point(Point::new(1.5, -2.25));
        assert_eq!(shape.to_wkt(), "POINT (1.5 -2.25)");
        assert_eq!(shape.to_string(), shape.to_wkt());
    }

    #[test]
    fn test_wkt_null() {
        assert_eq!(Shape::Null.to_wkt(), "GEOMETRYCOLLECTION EMPTY");
    }
}
