//! Style primitives for GeoJSON features.
//!
//! This module provides the building blocks the resolver works with:
//!
//! - [`StyleDescriptor`]: The fully resolved style of one feature
//! - [`GeometryStyle`]: The polygon, line or point specific part of a descriptor
//! - [`MarkerSize`]: The `small`/`medium`/`large` marker enum
//! - [`is_css_color`]: Validation of color-valued properties
//! - [`keys`]: The recognized property names
//! - [`defaults`]: The values substituted for missing or invalid properties

mod color;
pub mod defaults;
mod descriptor;
pub mod keys;
pub(crate) mod value;

pub use color::is_css_color;
pub use descriptor::{
    GeometryStyle, LineStyle, MarkerSize, PointStyle, PolygonStyle, StrokeStyle, StyleDescriptor,
};
pub use keys::{is_style_key, keys_for};
