//! The resolved style descriptor and its per-category parts.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use super::defaults::{
    DEFAULT_COLOR, DEFAULT_OPACITY, DEFAULT_VISIBLE, LINE_STROKE_WIDTH, POLYGON_STROKE_WIDTH,
};
use super::keys;
use crate::geometry::{GeometryType, StyleCategory};

/// Size of a point marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl MarkerSize {
    /// Parses the exact lowercase names `small`, `medium` and `large`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "small" => Some(MarkerSize::Small),
            "medium" => Some(MarkerSize::Medium),
            "large" => Some(MarkerSize::Large),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MarkerSize::Small => "small",
            MarkerSize::Medium => "medium",
            MarkerSize::Large => "large",
        }
    }
}

impl fmt::Display for MarkerSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outline or line stroke.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    /// CSS color string.
    pub color: String,
    /// Width in pixels, never negative.
    pub width: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
    /// Alternating dash and gap lengths; `None` draws a solid line.
    pub dash_array: Option<Vec<f64>>,
}

impl StrokeStyle {
    /// A default black, opaque, solid stroke of the given width.
    pub fn with_width(width: f64) -> Self {
        Self {
            color: DEFAULT_COLOR.to_string(),
            width,
            opacity: DEFAULT_OPACITY,
            dash_array: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PolygonStyle {
    pub fill: String,
    pub fill_opacity: f64,
    pub stroke: StrokeStyle,
}

impl Default for PolygonStyle {
    fn default() -> Self {
        Self {
            fill: DEFAULT_COLOR.to_string(),
            fill_opacity: DEFAULT_OPACITY,
            stroke: StrokeStyle::with_width(POLYGON_STROKE_WIDTH),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub stroke: StrokeStyle,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            stroke: StrokeStyle::with_width(LINE_STROKE_WIDTH),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointStyle {
    pub marker_color: String,
    pub marker_size: MarkerSize,
    /// Icon name or emoji drawn on the marker.
    pub marker_symbol: Option<String>,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            marker_color: DEFAULT_COLOR.to_string(),
            marker_size: MarkerSize::default(),
            marker_symbol: None,
        }
    }
}

/// The geometry-specific part of a descriptor.
///
/// Only the fields relevant to the feature's geometry category exist, so a
/// line never carries a fill and a polygon never carries a marker.
#[derive(Debug, Clone, PartialEq)]
pub enum GeometryStyle {
    Polygon(PolygonStyle),
    Line(LineStyle),
    Point(PointStyle),
    /// Unknown geometry types and `GeometryCollection`: shared fields only.
    Unstyled,
}

impl GeometryStyle {
    /// The all-default style for a category.
    pub fn default_for(category: Option<StyleCategory>) -> Self {
        match category {
            Some(StyleCategory::Polygon) => GeometryStyle::Polygon(PolygonStyle::default()),
            Some(StyleCategory::Line) => GeometryStyle::Line(LineStyle::default()),
            Some(StyleCategory::Point) => GeometryStyle::Point(PointStyle::default()),
            None => GeometryStyle::Unstyled,
        }
    }

    pub fn category(&self) -> Option<StyleCategory> {
        match self {
            GeometryStyle::Polygon(_) => Some(StyleCategory::Polygon),
            GeometryStyle::Line(_) => Some(StyleCategory::Line),
            GeometryStyle::Point(_) => Some(StyleCategory::Point),
            GeometryStyle::Unstyled => None,
        }
    }
}

/// Fully resolved style of one feature.
///
/// Serializes to a flat object keyed by the GeoJSON property names
/// (`fill-opacity`, `marker-size`, ...), with absent optional fields omitted.
/// Feeding that object back to the resolver yields the same descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleDescriptor {
    pub title: String,
    pub description: String,
    pub visible: bool,
    pub geometry: GeometryStyle,
}

impl StyleDescriptor {
    /// The descriptor of a feature whose properties are empty.
    pub fn defaults_for(geometry_type: Option<GeometryType>) -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            visible: DEFAULT_VISIBLE,
            geometry: GeometryStyle::default_for(geometry_type.map(GeometryType::category)),
        }
    }

    pub fn category(&self) -> Option<StyleCategory> {
        self.geometry.category()
    }

    pub fn polygon(&self) -> Option<&PolygonStyle> {
        match &self.geometry {
            GeometryStyle::Polygon(style) => Some(style),
            _ => None,
        }
    }

    pub fn line(&self) -> Option<&LineStyle> {
        match &self.geometry {
            GeometryStyle::Line(style) => Some(style),
            _ => None,
        }
    }

    pub fn point(&self) -> Option<&PointStyle> {
        match &self.geometry {
            GeometryStyle::Point(style) => Some(style),
            _ => None,
        }
    }

    /// The stroke of a polygon outline or a line.
    pub fn stroke(&self) -> Option<&StrokeStyle> {
        match &self.geometry {
            GeometryStyle::Polygon(style) => Some(&style.stroke),
            GeometryStyle::Line(style) => Some(&style.stroke),
            _ => None,
        }
    }

    /// Converts the descriptor back into GeoJSON style properties.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geostyle::{GeometryType, StyleDescriptor};
    ///
    /// let line = StyleDescriptor::defaults_for(Some(GeometryType::LineString));
    /// let props = line.to_properties();
    /// assert_eq!(props["stroke-width"], 2.0);
    /// assert!(props.get("fill").is_none());
    /// ```
    pub fn to_properties(&self) -> Map<String, Value> {
        let mut props = Map::new();
        props.insert(keys::TITLE.into(), Value::from(self.title.as_str()));
        props.insert(keys::DESCRIPTION.into(), Value::from(self.description.as_str()));
        props.insert(keys::VISIBLE.into(), Value::from(self.visible));

        match &self.geometry {
            GeometryStyle::Polygon(style) => {
                props.insert(keys::FILL.into(), Value::from(style.fill.as_str()));
                props.insert(keys::FILL_OPACITY.into(), Value::from(style.fill_opacity));
                insert_stroke(&mut props, &style.stroke);
            }
            GeometryStyle::Line(style) => insert_stroke(&mut props, &style.stroke),
            GeometryStyle::Point(style) => {
                props.insert(
                    keys::MARKER_COLOR.into(),
                    Value::from(style.marker_color.as_str()),
                );
                props.insert(
                    keys::MARKER_SIZE.into(),
                    Value::from(style.marker_size.as_str()),
                );
                if let Some(symbol) = &style.marker_symbol {
                    props.insert(keys::MARKER_SYMBOL.into(), Value::from(symbol.as_str()));
                }
            }
            GeometryStyle::Unstyled => {}
        }

        props
    }
}

fn insert_stroke(props: &mut Map<String, Value>, stroke: &StrokeStyle) {
    props.insert(keys::STROKE.into(), Value::from(stroke.color.as_str()));
    props.insert(keys::STROKE_WIDTH.into(), Value::from(stroke.width));
    props.insert(keys::STROKE_OPACITY.into(), Value::from(stroke.opacity));
    if let Some(dashes) = &stroke.dash_array {
        props.insert(keys::LINE_DASHARRAY.into(), Value::from(dashes.clone()));
    }
}

impl Serialize for StyleDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_properties().serialize(serializer)
    }
}
