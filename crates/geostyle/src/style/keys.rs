//! Recognized style property names.
//!
//! Only these keys are read from a feature's `properties`. Everything else is
//! application data and is ignored by the resolver.

use once_cell::sync::Lazy;
use std::collections::HashSet;

use crate::geometry::StyleCategory;

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const VISIBLE: &str = "visible";

pub const FILL: &str = "fill";
pub const FILL_OPACITY: &str = "fill-opacity";
pub const STROKE: &str = "stroke";
pub const STROKE_WIDTH: &str = "stroke-width";
pub const STROKE_OPACITY: &str = "stroke-opacity";
pub const LINE_DASHARRAY: &str = "line-dasharray";

pub const MARKER_COLOR: &str = "marker-color";
pub const MARKER_SIZE: &str = "marker-size";
pub const MARKER_SYMBOL: &str = "marker-symbol";

/// Keys that apply to every geometry category.
pub const SHARED: &[&str] = &[TITLE, DESCRIPTION, VISIBLE];

const POLYGON: &[&str] = &[
    FILL,
    FILL_OPACITY,
    STROKE,
    STROKE_WIDTH,
    STROKE_OPACITY,
    LINE_DASHARRAY,
];
const LINE: &[&str] = &[STROKE, STROKE_WIDTH, STROKE_OPACITY, LINE_DASHARRAY];
const POINT: &[&str] = &[MARKER_COLOR, MARKER_SIZE, MARKER_SYMBOL];

static RECOGNIZED: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    SHARED
        .iter()
        .chain(POLYGON)
        .chain(LINE)
        .chain(POINT)
        .copied()
        .collect()
});

/// Returns `true` if `key` is a style property for any geometry category.
///
/// # Example
///
/// ```rust
/// use geostyle::style::is_style_key;
///
/// assert!(is_style_key("stroke-width"));
/// assert!(!is_style_key("layer_id"));
/// ```
pub fn is_style_key(key: &str) -> bool {
    RECOGNIZED.contains(key)
}

/// The geometry-specific keys of a category, excluding the shared ones.
pub fn keys_for(category: StyleCategory) -> &'static [&'static str] {
    match category {
        StyleCategory::Polygon => POLYGON,
        StyleCategory::Line => LINE,
        StyleCategory::Point => POINT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_key_is_recognized() {
        for category in [StyleCategory::Polygon, StyleCategory::Line, StyleCategory::Point] {
            for key in keys_for(category) {
                assert!(is_style_key(key), "{key} should be recognized");
            }
        }
        for key in SHARED {
            assert!(is_style_key(key));
        }
    }

    #[test]
    fn test_line_keys_are_subset_of_polygon_keys() {
        let polygon = keys_for(StyleCategory::Polygon);
        for key in keys_for(StyleCategory::Line) {
            assert!(polygon.contains(key));
        }
    }

    #[test]
    fn test_unrelated_keys_not_recognized() {
        assert!(!is_style_key("nonexistent-key"));
        assert!(!is_style_key("Fill"));
        assert!(!is_style_key("layer_name"));
        assert!(!is_style_key(""));
    }
}
