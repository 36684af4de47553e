//! # Geostyle - typed styles for GeoJSON features
//!
//! `geostyle` reads the SimpleStyle-like styling keys (`fill`, `stroke-width`,
//! `marker-size`, `visible`, ...) from the `properties` of GeoJSON features and
//! resolves them into a typed [`StyleDescriptor`] a map renderer can consume
//! directly.
//!
//! Resolution never fails. Missing keys, values of the wrong type and
//! out-of-range numbers are replaced by documented defaults, and only the
//! properties relevant to the feature's geometry are produced:
//!
//! | Geometry | Properties |
//! |----------|------------|
//! | all | `title`, `description`, `visible` |
//! | `Polygon`, `MultiPolygon` | `fill`, `fill-opacity`, `stroke`, `stroke-width` (1), `stroke-opacity`, `line-dasharray` |
//! | `LineString`, `MultiLineString` | `stroke`, `stroke-width` (2), `stroke-opacity`, `line-dasharray` |
//! | `Point`, `MultiPoint` | `marker-color`, `marker-size`, `marker-symbol` |
//!
//! ## Quick Start
//!
//! ```rust
//! use geostyle::{MarkerSize, StyleResolver};
//! use serde_json::json;
//!
//! let feature = json!({
//!     "type": "Feature",
//!     "geometry": {"type": "Point", "coordinates": [-119.21612, 40.8029]},
//!     "properties": {"marker-color": "#4169E1", "marker-size": "huge"}
//! });
//!
//! let style = StyleResolver::new().resolve_value(&feature);
//! let marker = style.point().unwrap();
//! assert_eq!(marker.marker_color, "#4169E1");
//! // Unknown sizes fall back to the default
//! assert_eq!(marker.marker_size, MarkerSize::Medium);
//! ```
//!
//! ## Out-of-range opacities
//!
//! By default opacities outside `[0, 1]` are clamped. Use
//! [`RangePolicy::Fallback`] to replace them with the default instead:
//!
//! ```rust
//! use geostyle::{RangePolicy, StyleResolver};
//! use serde_json::json;
//!
//! let props = json!({"fill-opacity": -0.5});
//!
//! let clamped = StyleResolver::new().resolve(props.as_object(), "Polygon");
//! assert_eq!(clamped.polygon().unwrap().fill_opacity, 0.0);
//!
//! let strict = StyleResolver::new()
//!     .with_range_policy(RangePolicy::Fallback)
//!     .resolve(props.as_object(), "Polygon");
//! assert_eq!(strict.polygon().unwrap().fill_opacity, 1.0);
//! ```
//!
//! ## Layers
//!
//! The [`layer`] module turns per-layer rendering settings into per-feature
//! style properties and merges layers into one styled collection.
//!
//! ## Features
//!
//! - `parallel`: resolve collections on rayon's thread pool

pub mod collection;
pub mod error;
pub mod geometry;
pub mod layer;
pub mod resolve;
pub mod style;

pub use collection::{resolve_collection, CollectionSummary};
pub use error::ConfigError;
pub use geometry::{GeometryType, StyleCategory};
pub use resolve::{resolve, resolve_feature, RangePolicy, StyleResolver};
pub use style::{
    GeometryStyle, LineStyle, MarkerSize, PointStyle, PolygonStyle, StrokeStyle, StyleDescriptor,
};
