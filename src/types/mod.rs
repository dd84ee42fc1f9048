//! Core types used throughout shp-tools-rs

pub mod bounds;
pub mod point;
pub mod shape;

pub use bounds::{BoundingRect, ValueRange};
pub use point::Point;
pub use shape::Shape;

/// Shape type enumeration
///
/// Every record kind the shapefile format defines, identified on disk by
/// an integer tag. A tag being listed here means it is *valid*; whether
/// this crate can decode the matching geometry body is a separate
/// question answered by [`ShapeType::is_decodable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    /// Null shape (tag 0), carrying no geometry
    Null,
    /// Point (tag 1)
    Point,
    /// Polyline (tag 3)
    Polyline,
    /// Polygon (tag 5)
    Polygon,
    /// MultiPoint (tag 8)
    Multipoint,
    /// PointZ (tag 11)
    PointZ,
    /// PolylineZ (tag 13)
    PolylineZ,
    /// PolygonZ (tag 15)
    PolygonZ,
    /// MultiPointZ (tag 18)
    MultipointZ,
    /// PointM (tag 21)
    PointM,
    /// PolylineM (tag 23)
    PolylineM,
    /// PolygonM (tag 25)
    PolygonM,
    /// MultiPointM (tag 28)
    MultipointM,
    /// MultiPatch (tag 31)
    Multipatch,
}

impl ShapeType {
    /// Get the type name (e.g., "Polygon")
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeType::Null => "Null",
            ShapeType::Point => "Point",
            ShapeType::Polyline => "Polyline",
            ShapeType::Polygon => "Polygon",
            ShapeType::Multipoint => "MultiPoint",
            ShapeType::PointZ => "PointZ",
            ShapeType::PolylineZ => "PolylineZ",
            ShapeType::PolygonZ => "PolygonZ",
            ShapeType::MultipointZ => "MultiPointZ",
            ShapeType::PointM => "PointM",
            ShapeType::PolylineM => "PolylineM",
            ShapeType::PolygonM => "PolygonM",
            ShapeType::MultipointM => "MultiPointM",
            ShapeType::Multipatch => "MultiPatch",
        }
    }

    /// Parse a type from its on-disk tag, `None` for tags outside the set
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ShapeType::Null),
            1 => Some(ShapeType::Point),
            3 => Some(ShapeType::Polyline),
            5 => Some(ShapeType::Polygon),
            8 => Some(ShapeType::Multipoint),
            11 => Some(ShapeType::PointZ),
            13 => Some(ShapeType::PolylineZ),
            15 => Some(ShapeType::PolygonZ),
            18 => Some(ShapeType::MultipointZ),
            21 => Some(ShapeType::PointM),
            23 => Some(ShapeType::PolylineM),
            25 => Some(ShapeType::PolygonM),
            28 => Some(ShapeType::MultipointM),
            31 => Some(ShapeType::Multipatch),
            _ => None,
        }
    }

    /// Get the on-disk integer tag
    pub fn code(&self) -> i32 {
        match self {
            ShapeType::Null => 0,
            ShapeType::Point => 1,
            ShapeType::Polyline => 3,
            ShapeType::Polygon => 5,
            ShapeType::Multipoint => 8,
            ShapeType::PointZ => 11,
            ShapeType::PolylineZ => 13,
            ShapeType::PolygonZ => 15,
            ShapeType::MultipointZ => 18,
            ShapeType::PointM => 21,
            ShapeType::PolylineM => 23,
            ShapeType::PolygonM => 25,
            ShapeType::MultipointM => 28,
            ShapeType::Multipatch => 31,
        }
    }

    /// Whether this crate decodes the geometry body for this kind.
    ///
    /// Kinds that return `false` are still valid tags; a record carrying
    /// one fails decoding with an unsupported-type error instead of being
    /// misparsed.
    pub fn is_decodable(&self) -> bool {
        matches!(self, ShapeType::Null | ShapeType::Point)
    }
}

impl std::fmt::Display for ShapeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
