//! Geometry type names and the style categories they map to.
//!
//! GeoJSON defines six styleable geometry types. Each of them belongs to one
//! of three style categories, and the category alone decides which style
//! properties apply to a feature:
//!
//! | Geometry type | Category |
//! |---------------|----------|
//! | `Polygon`, `MultiPolygon` | [`StyleCategory::Polygon`] |
//! | `LineString`, `MultiLineString` | [`StyleCategory::Line`] |
//! | `Point`, `MultiPoint` | [`StyleCategory::Point`] |
//!
//! Anything else (including `GeometryCollection`) is unstyled.

use std::fmt;

/// One of the six styleable RFC 7946 geometry types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GeometryType {
    Point,
    MultiPoint,
    LineString,
    MultiLineString,
    Polygon,
    MultiPolygon,
}

/// The group of style properties a geometry type is styled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleCategory {
    /// Fill plus outline stroke.
    Polygon,
    /// Stroke only.
    Line,
    /// Marker color, size and symbol.
    Point,
}

impl GeometryType {
    /// All styleable geometry types, in RFC 7946 order.
    pub const ALL: [GeometryType; 6] = [
        GeometryType::Point,
        GeometryType::MultiPoint,
        GeometryType::LineString,
        GeometryType::MultiLineString,
        GeometryType::Polygon,
        GeometryType::MultiPolygon,
    ];

    /// Looks up a geometry type by its GeoJSON `type` member.
    ///
    /// Matching is case-sensitive, as in RFC 7946. Unknown names and
    /// `GeometryCollection` return `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geostyle::GeometryType;
    ///
    /// assert_eq!(GeometryType::from_name("Polygon"), Some(GeometryType::Polygon));
    /// assert_eq!(GeometryType::from_name("polygon"), None);
    /// ```
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Point" => Some(GeometryType::Point),
            "MultiPoint" => Some(GeometryType::MultiPoint),
            "LineString" => Some(GeometryType::LineString),
            "MultiLineString" => Some(GeometryType::MultiLineString),
            "Polygon" => Some(GeometryType::Polygon),
            "MultiPolygon" => Some(GeometryType::MultiPolygon),
            _ => None,
        }
    }

    /// Returns the geometry type of a parsed [`geojson::Value`].
    pub fn from_geojson(value: &geojson::Value) -> Option<Self> {
        match value {
            geojson::Value::Point(_) => Some(GeometryType::Point),
            geojson::Value::MultiPoint(_) => Some(GeometryType::MultiPoint),
            geojson::Value::LineString(_) => Some(GeometryType::LineString),
            geojson::Value::MultiLineString(_) => Some(GeometryType::MultiLineString),
            geojson::Value::Polygon(_) => Some(GeometryType::Polygon),
            geojson::Value::MultiPolygon(_) => Some(GeometryType::MultiPolygon),
            geojson::Value::GeometryCollection(_) => None,
        }
    }

    /// The GeoJSON `type` member for this geometry.
    pub fn name(self) -> &'static str {
        match self {
            GeometryType::Point => "Point",
            GeometryType::MultiPoint => "MultiPoint",
            GeometryType::LineString => "LineString",
            GeometryType::MultiLineString => "MultiLineString",
            GeometryType::Polygon => "Polygon",
            GeometryType::MultiPolygon => "MultiPolygon",
        }
    }

    pub fn category(self) -> StyleCategory {
        match self {
            GeometryType::Point | GeometryType::MultiPoint => StyleCategory::Point,
            GeometryType::LineString | GeometryType::MultiLineString => StyleCategory::Line,
            GeometryType::Polygon | GeometryType::MultiPolygon => StyleCategory::Polygon,
        }
    }
}

impl fmt::Display for GeometryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
