//! Default values applied when a style property is missing or invalid.
//!
//! | Property | Polygon | Line | Point |
//! |----------|---------|------|-------|
//! | `fill` | `#000000` | | |
//! | `fill-opacity` | `1.0` | | |
//! | `stroke` | `#000000` | `#000000` | |
//! | `stroke-width` | `1` | `2` | |
//! | `stroke-opacity` | `1.0` | `1.0` | |
//! | `line-dasharray` | absent | absent | |
//! | `marker-color` | | | `#000000` |
//! | `marker-size` | | | `medium` |
//! | `marker-symbol` | | | absent |
//!
//! Shared by all categories: `title = ""`, `description = ""`, `visible = true`.

/// Fallback for every color-valued property.
pub const DEFAULT_COLOR: &str = "#000000";

/// Fallback for `fill-opacity` and `stroke-opacity`.
pub const DEFAULT_OPACITY: f64 = 1.0;

/// Outline width of polygons.
pub const POLYGON_STROKE_WIDTH: f64 = 1.0;

/// Width of line geometries. Lines default wider than polygon outlines.
pub const LINE_STROKE_WIDTH: f64 = 2.0;

pub const DEFAULT_VISIBLE: bool = true;
