//! Resolution of feature properties into style descriptors.
//!
//! The resolver reads the SimpleStyle-like keys from a feature's `properties`
//! and fills every field of the feature's style category, substituting the
//! documented default for anything missing or malformed. It never fails:
//!
//! - Missing or non-object `properties` behave like an empty object
//! - Unknown keys are ignored
//! - Values of the wrong JSON type fall back to the default
//! - Out-of-range opacities follow the configured [`RangePolicy`]
//! - Unknown geometry types resolve to the shared fields only
//!
//! # Example
//!
//! ```rust
//! use geostyle::StyleResolver;
//! use serde_json::json;
//!
//! let props = json!({"fill": "#ff0000", "fill-opacity": 0.3});
//! let style = StyleResolver::new().resolve(props.as_object(), "Polygon");
//!
//! let polygon = style.polygon().unwrap();
//! assert_eq!(polygon.fill, "#ff0000");
//! assert_eq!(polygon.fill_opacity, 0.3);
//! assert_eq!(polygon.stroke.width, 1.0);
//! ```

use log::trace;
use serde_json::{Map, Value};

use crate::geometry::{GeometryType, StyleCategory};
use crate::style::defaults::{
    DEFAULT_COLOR, DEFAULT_OPACITY, DEFAULT_VISIBLE, LINE_STROKE_WIDTH, POLYGON_STROKE_WIDTH,
};
use crate::style::keys;
use crate::style::value::PropertyReader;
use crate::style::{
    GeometryStyle, LineStyle, PointStyle, PolygonStyle, StrokeStyle, StyleDescriptor,
};

/// What to do with an opacity outside `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RangePolicy {
    /// Clamp to the nearest bound, keeping as much of the author's intent as
    /// possible: `1.5` becomes `1.0`, `-0.2` becomes `0.0`.
    #[default]
    Clamp,
    /// Discard the value and use the default opacity.
    Fallback,
}

/// Maps feature properties to a [`StyleDescriptor`].
///
/// The resolver is a small `Copy` value holding only its options, so one
/// instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleResolver {
    range_policy: RangePolicy,
}

impl StyleResolver {
    /// Creates a resolver that clamps out-of-range opacities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the resolver with a different out-of-range policy.
    pub fn with_range_policy(self, range_policy: RangePolicy) -> Self {
        Self { range_policy }
    }

    pub fn range_policy(&self) -> RangePolicy {
        self.range_policy
    }

    /// Resolves properties for a geometry given by its GeoJSON type name.
    ///
    /// Names other than the six styleable RFC 7946 types produce a descriptor
    /// with the shared fields only.
    pub fn resolve(
        &self,
        properties: Option<&Map<String, Value>>,
        geometry_type: &str,
    ) -> StyleDescriptor {
        let parsed = GeometryType::from_name(geometry_type);
        if parsed.is_none() {
            trace!("geometry type `{geometry_type}` has no style properties");
        }
        self.resolve_geometry(properties, parsed)
    }

    /// Resolves properties for an already classified geometry type.
    pub fn resolve_geometry(
        &self,
        properties: Option<&Map<String, Value>>,
        geometry_type: Option<GeometryType>,
    ) -> StyleDescriptor {
        let reader = PropertyReader::new(properties);

        let geometry = match geometry_type.map(GeometryType::category) {
            Some(StyleCategory::Polygon) => GeometryStyle::Polygon(self.polygon(&reader)),
            Some(StyleCategory::Line) => GeometryStyle::Line(LineStyle {
                stroke: self.stroke(&reader, LINE_STROKE_WIDTH),
            }),
            Some(StyleCategory::Point) => GeometryStyle::Point(point(&reader)),
            None => GeometryStyle::Unstyled,
        };

        StyleDescriptor {
            title: reader.string(keys::TITLE).unwrap_or("").to_string(),
            description: reader.string(keys::DESCRIPTION).unwrap_or("").to_string(),
            visible: reader.boolean(keys::VISIBLE).unwrap_or(DEFAULT_VISIBLE),
            geometry,
        }
    }

    /// Resolves a parsed GeoJSON feature.
    ///
    /// Features without a geometry, or with a `GeometryCollection`, are
    /// unstyled.
    pub fn resolve_feature(&self, feature: &geojson::Feature) -> StyleDescriptor {
        let geometry_type = feature
            .geometry
            .as_ref()
            .and_then(|geometry| GeometryType::from_geojson(&geometry.value));
        self.resolve_geometry(feature.properties.as_ref(), geometry_type)
    }

    /// Resolves a feature given as raw JSON.
    ///
    /// Only `geometry.type` and `properties` are read. Unlike
    /// [`resolve_feature`](Self::resolve_feature) this accepts any geometry
    /// type string, and treats `"properties": null` like an empty object.
    pub fn resolve_value(&self, feature: &Value) -> StyleDescriptor {
        let properties = feature.get("properties").and_then(Value::as_object);
        let geometry_type = feature
            .get("geometry")
            .and_then(|geometry| geometry.get("type"))
            .and_then(Value::as_str)
            .unwrap_or_default();
        self.resolve(properties, geometry_type)
    }

    fn polygon(&self, reader: &PropertyReader<'_>) -> PolygonStyle {
        PolygonStyle {
            fill: color(reader, keys::FILL),
            fill_opacity: self.opacity(reader, keys::FILL_OPACITY),
            stroke: self.stroke(reader, POLYGON_STROKE_WIDTH),
        }
    }

    fn stroke(&self, reader: &PropertyReader<'_>, default_width: f64) -> StrokeStyle {
        StrokeStyle {
            color: color(reader, keys::STROKE),
            width: reader.width(keys::STROKE_WIDTH).unwrap_or(default_width),
            opacity: self.opacity(reader, keys::STROKE_OPACITY),
            dash_array: reader.dash_array(keys::LINE_DASHARRAY),
        }
    }

    fn opacity(&self, reader: &PropertyReader<'_>, key: &str) -> f64 {
        reader
            .opacity(key, self.range_policy)
            .unwrap_or(DEFAULT_OPACITY)
    }
}

fn point(reader: &PropertyReader<'_>) -> PointStyle {
    PointStyle {
        marker_color: color(reader, keys::MARKER_COLOR),
        marker_size: reader.marker_size(keys::MARKER_SIZE).unwrap_or_default(),
        marker_symbol: reader.symbol(keys::MARKER_SYMBOL).map(str::to_string),
    }
}

fn color(reader: &PropertyReader<'_>, key: &str) -> String {
    reader.color(key).unwrap_or(DEFAULT_COLOR).to_string()
}

/// Resolves properties with the default resolver.
///
/// Shorthand for `StyleResolver::new().resolve(properties, geometry_type)`.
pub fn resolve(properties: Option<&Map<String, Value>>, geometry_type: &str) -> StyleDescriptor {
    StyleResolver::new().resolve(properties, geometry_type)
}

/// Resolves a parsed GeoJSON feature with the default resolver.
pub fn resolve_feature(feature: &geojson::Feature) -> StyleDescriptor {
    StyleResolver::new().resolve_feature(feature)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn any_geometry_type() -> impl Strategy<Value = &'static str> {
        prop::sample::select(vec![
            "Point",
            "MultiPoint",
            "LineString",
            "MultiLineString",
            "Polygon",
            "MultiPolygon",
            "GeometryCollection",
            "Unknown",
        ])
    }

    fn any_json_scalar() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::from),
            (-1.0e6f64..1.0e6).prop_map(Value::from),
            "[a-z#0-9 ]{0,12}".prop_map(Value::from),
        ]
    }

    proptest! {
        #[test]
        fn resolution_is_idempotent(
            geometry_type in any_geometry_type(),
            chosen in prop::collection::vec(
                prop::sample::select(vec![
                    "title", "description", "visible", "fill", "fill-opacity", "stroke",
                    "stroke-width", "stroke-opacity", "line-dasharray", "marker-color",
                    "marker-size", "marker-symbol",
                ]),
                0..8,
            ),
            values in prop::collection::vec(any_json_scalar(), 8),
        ) {
            let props: Map<String, Value> = chosen
                .into_iter()
                .zip(values)
                .map(|(k, v)| (k.to_string(), v))
                .collect();

            let first = resolve(Some(&props), geometry_type);
            let second = resolve(Some(&first.to_properties()), geometry_type);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn opacities_always_in_unit_range(
            fill_opacity in -10.0f64..10.0,
            stroke_opacity in -10.0f64..10.0,
            fallback in any::<bool>(),
        ) {
            let policy = if fallback { RangePolicy::Fallback } else { RangePolicy::Clamp };
            let props = json!({"fill-opacity": fill_opacity, "stroke-opacity": stroke_opacity});
            let resolved = StyleResolver::new()
                .with_range_policy(policy)
                .resolve(props.as_object(), "Polygon");
            let polygon = resolved.polygon().unwrap();
            prop_assert!((0.0..=1.0).contains(&polygon.fill_opacity));
            prop_assert!((0.0..=1.0).contains(&polygon.stroke.opacity));
        }

        #[test]
        fn unknown_keys_never_change_the_result(
            geometry_type in any_geometry_type(),
            key in "[a-z_]{1,12}",
            value in any_json_scalar(),
        ) {
            prop_assume!(!crate::style::is_style_key(&key));
            let mut props = Map::new();
            props.insert(key, value);
            prop_assert_eq!(resolve(Some(&props), geometry_type), resolve(None, geometry_type));
        }

        #[test]
        fn stroke_width_is_never_negative(width in -100.0f64..100.0) {
            let props = json!({"stroke-width": width});
            let resolved = resolve(props.as_object(), "LineString");
            let stroke = resolved.stroke().unwrap();
            prop_assert!(stroke.width >= 0.0);
            if width >= 0.0 {
                prop_assert_eq!(stroke.width, width);
            }
        }
    }
}
