//! Layer rendering configuration and feature stamping.
//!
//! Map overlays are usually authored per layer ("roads are light green, 1px")
//! rather than per feature. This module turns such layer settings into the
//! per-feature style properties the resolver reads, and writes them onto every
//! feature of the layer so that a single consolidated `FeatureCollection`
//! carries its own styling.
//!
//! # Configuration format
//!
//! ```yaml
//! name: BurningMan
//! attribution: Data courtesy of the event organizers
//! layers:
//!   streetOutlines:
//!     name: Street Outlines
//!     description: Main street outlines and roads
//!     rendering:
//!       lineColor: "#90EE90"
//!       lineOpacity: 1.0
//!       lineThickness: 1.0
//!       fillOpacity: 0.0
//! ```
//!
//! Layers are merged in the order they are declared. Fields not listed here
//! (input paths, simplification settings) are accepted and ignored.

use geojson::{Feature, FeatureCollection};
use indexmap::IndexMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::geometry::GeometryType;
use crate::style::defaults::DEFAULT_COLOR;
use crate::style::{is_css_color, keys, MarkerSize};

/// Property holding the id of the layer a feature was stamped from.
pub const LAYER_ID: &str = "layer_id";
/// Property holding the human-readable layer name.
pub const LAYER_NAME: &str = "layer_name";

/// Thickness assumed when a layer doesn't set one.
const DEFAULT_THICKNESS: f64 = 1.0;

/// Drawing settings shared by every feature of a layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerRendering {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
}

impl LayerRendering {
    /// Converts the layer settings into GeoJSON style properties.
    ///
    /// The line color doubles as marker color, and as fill color when the
    /// fill is visible. A fully transparent fill gets the default color. The
    /// marker size follows the line thickness.
    ///
    /// # Example
    ///
    /// ```rust
    /// use geostyle::layer::LayerRendering;
    ///
    /// let rendering = LayerRendering {
    ///     line_color: Some("#FFA500".into()),
    ///     line_opacity: Some(1.0),
    ///     line_thickness: Some(2.5),
    ///     fill_opacity: Some(0.4),
    /// };
    /// let props = rendering.to_style_properties();
    /// assert_eq!(props["stroke"], "#FFA500");
    /// assert_eq!(props["fill"], "#FFA500");
    /// assert_eq!(props["marker-size"], "large");
    /// ```
    pub fn to_style_properties(&self) -> Map<String, Value> {
        let mut props = Map::new();

        if let Some(color) = &self.line_color {
            props.insert(keys::STROKE.into(), Value::from(color.as_str()));
            props.insert(keys::MARKER_COLOR.into(), Value::from(color.as_str()));
        }
        if let Some(opacity) = self.line_opacity {
            props.insert(keys::STROKE_OPACITY.into(), Value::from(opacity));
        }
        if let Some(thickness) = self.line_thickness {
            props.insert(keys::STROKE_WIDTH.into(), Value::from(thickness));
        }
        if let Some(fill_opacity) = self.fill_opacity {
            props.insert(keys::FILL_OPACITY.into(), Value::from(fill_opacity));
            if fill_opacity > 0.0 {
                if let Some(color) = &self.line_color {
                    props.insert(keys::FILL.into(), Value::from(color.as_str()));
                }
            } else if fill_opacity == 0.0 {
                props.insert(keys::FILL.into(), Value::from(DEFAULT_COLOR));
            }
        }

        let size = marker_size_for_thickness(self.line_thickness.unwrap_or(DEFAULT_THICKNESS));
        props.insert(keys::MARKER_SIZE.into(), Value::from(size.as_str()));
        props.insert(keys::VISIBLE.into(), Value::from(true));

        props
    }

    /// Checks that every set value is usable.
    pub fn validate(&self, layer: &str) -> Result<(), ConfigError> {
        if let Some(color) = &self.line_color {
            if !is_css_color(color) {
                return Err(ConfigError::validation(
                    layer,
                    "lineColor",
                    format!("is not a CSS color: '{color}'"),
                ));
            }
        }
        for (field, value) in [("lineOpacity", self.line_opacity), ("fillOpacity", self.fill_opacity)] {
            if let Some(opacity) = value {
                if !(0.0..=1.0).contains(&opacity) {
                    return Err(ConfigError::validation(
                        layer,
                        field,
                        format!("must be within [0, 1], got {opacity}"),
                    ));
                }
            }
        }
        if let Some(thickness) = self.line_thickness {
            if !(thickness.is_finite() && thickness >= 0.0) {
                return Err(ConfigError::validation(
                    layer,
                    "lineThickness",
                    format!("must be a non-negative number, got {thickness}"),
                ));
            }
        }
        Ok(())
    }
}

/// Marker size for a line thickness: up to 1 is small, up to 2 medium.
pub fn marker_size_for_thickness(thickness: f64) -> MarkerSize {
    if thickness <= 1.0 {
        MarkerSize::Small
    } else if thickness <= 2.0 {
        MarkerSize::Medium
    } else {
        MarkerSize::Large
    }
}

/// One layer of an overlay.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub rendering: LayerRendering,
}

impl LayerConfig {
    /// Writes layer metadata and style properties into `properties`.
    ///
    /// Existing values for the same keys are overwritten; other keys are kept.
    pub fn stamp(&self, layer_id: &str, properties: &mut Map<String, Value>) {
        properties.insert(LAYER_ID.into(), Value::from(layer_id));
        properties.insert(LAYER_NAME.into(), Value::from(self.name.as_str()));
        properties.insert(keys::DESCRIPTION.into(), Value::from(self.description.as_str()));
        properties.extend(self.rendering.to_style_properties());
    }

    /// Stamps a feature, creating its `properties` object if needed.
    pub fn stamp_feature(&self, layer_id: &str, feature: &mut Feature) {
        let properties = feature.properties.get_or_insert_with(Map::new);
        self.stamp(layer_id, properties);
    }
}

/// A named set of layers merged into one feature collection.
///
/// The optional attribution fields are copied into the consolidated
/// collection's `metadata` so third-party data keeps its terms.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverlayConfig {
    pub name: String,
    /// Layers keyed by id, in declaration (draw) order.
    #[serde(default)]
    pub layers: IndexMap<String, LayerConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage_terms: Option<String>,
}

impl OverlayConfig {
    /// Parses and validates an overlay from JSON.
    pub fn from_json_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates an overlay from YAML.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (id, layer) in &self.layers {
            if layer.name.trim().is_empty() {
                return Err(ConfigError::validation(id, "name", "must not be empty"));
            }
            layer.rendering.validate(id)?;
        }
        Ok(())
    }

    /// Merges per-layer collections into one styled collection.
    ///
    /// Layers are visited in declaration order. Every feature with one of the
    /// six styleable geometries (points included) is stamped with its layer's
    /// metadata and style; features without one are dropped. Sources for
    /// unknown layer ids are ignored.
    pub fn consolidate(&self, mut sources: BTreeMap<String, FeatureCollection>) -> FeatureCollection {
        let mut features = Vec::new();

        for (id, layer) in &self.layers {
            let Some(source) = sources.remove(id) else {
                warn!("overlay '{}': no features supplied for layer '{id}'", self.name);
                continue;
            };

            let before = features.len();
            for mut feature in source.features {
                if !has_styleable_geometry(&feature) {
                    debug!("layer '{id}': dropping feature without styleable geometry");
                    continue;
                }
                layer.stamp_feature(id, &mut feature);
                features.push(feature);
            }
            debug!("layer '{id}': stamped {} features", features.len() - before);
        }

        for id in sources.keys() {
            warn!("overlay '{}': ignoring features for unknown layer '{id}'", self.name);
        }

        let mut foreign_members = Map::new();
        foreign_members.insert("metadata".into(), Value::Object(self.metadata()));

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: Some(foreign_members),
        }
    }

    /// The `metadata` member written onto consolidated collections.
    pub fn metadata(&self) -> Map<String, Value> {
        let mut metadata = Map::new();
        metadata.insert(
            "name".into(),
            Value::from(format!("{} GeoJSON Map Data", self.name)),
        );
        metadata.insert(
            "description".into(),
            Value::from("Consolidated GeoJSON data with embedded styling"),
        );

        let attribution = [
            ("license", &self.license),
            ("attribution", &self.attribution),
            ("source", &self.source),
            ("disclaimer", &self.disclaimer),
            ("usage_terms", &self.usage_terms),
        ];
        for (key, value) in attribution {
            if let Some(text) = value {
                metadata.insert(key.into(), Value::from(text.as_str()));
            }
        }
        metadata
    }
}

fn has_styleable_geometry(feature: &Feature) -> bool {
    feature
        .geometry
        .as_ref()
        .and_then(|geometry| GeometryType::from_geojson(&geometry.value))
        .is_some()
}
