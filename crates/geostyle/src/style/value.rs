//! Loose readers for style values in a GeoJSON `properties` object.
//!
//! Every reader returns `None` when the key is absent or its value fails the
//! type or range check, leaving the choice of default to the caller. Values
//! are never coerced across JSON types: `"yes"` is not a boolean and `"2"` is
//! not a number.

use log::debug;
use serde_json::{Map, Value};

use super::color::is_css_color;
use super::descriptor::MarkerSize;
use crate::resolve::RangePolicy;

/// Read-only view over a feature's properties.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PropertyReader<'a> {
    properties: Option<&'a Map<String, Value>>,
}

impl<'a> PropertyReader<'a> {
    pub(crate) fn new(properties: Option<&'a Map<String, Value>>) -> Self {
        Self { properties }
    }

    fn get(&self, key: &str) -> Option<&'a Value> {
        self.properties.and_then(|props| props.get(key))
    }

    pub(crate) fn string(&self, key: &str) -> Option<&'a str> {
        let value = self.get(key)?;
        let text = value.as_str();
        if text.is_none() {
            rejected(key, value, "expected a string");
        }
        text
    }

    pub(crate) fn boolean(&self, key: &str) -> Option<bool> {
        let value = self.get(key)?;
        let flag = value.as_bool();
        if flag.is_none() {
            rejected(key, value, "expected a boolean");
        }
        flag
    }

    pub(crate) fn color(&self, key: &str) -> Option<&'a str> {
        let value = self.get(key)?;
        match value.as_str() {
            Some(text) if is_css_color(text) => Some(text),
            _ => {
                rejected(key, value, "expected a CSS color");
                None
            }
        }
    }

    /// Reads a value that must lie in `[0, 1]`.
    pub(crate) fn opacity(&self, key: &str, policy: RangePolicy) -> Option<f64> {
        let value = self.get(key)?;
        let Some(number) = value.as_f64() else {
            rejected(key, value, "expected a number");
            return None;
        };
        if (0.0..=1.0).contains(&number) {
            return Some(number);
        }
        match policy {
            RangePolicy::Clamp => {
                let clamped = number.clamp(0.0, 1.0);
                debug!("clamping `{key}` from {number} to {clamped}");
                Some(clamped)
            }
            RangePolicy::Fallback => {
                rejected(key, value, "outside [0, 1]");
                None
            }
        }
    }

    /// Reads a finite, non-negative width.
    pub(crate) fn width(&self, key: &str) -> Option<f64> {
        let value = self.get(key)?;
        match value.as_f64() {
            Some(width) if width >= 0.0 => Some(width),
            _ => {
                rejected(key, value, "expected a non-negative number");
                None
            }
        }
    }

    /// Reads a dash pattern: a non-empty array of non-negative numbers that
    /// are not all zero.
    pub(crate) fn dash_array(&self, key: &str) -> Option<Vec<f64>> {
        let value = self.get(key)?;
        let dashes = value.as_array().and_then(|items| {
            items
                .iter()
                .map(|item| item.as_f64().filter(|n| *n >= 0.0))
                .collect::<Option<Vec<f64>>>()
        });
        match dashes {
            Some(dashes) if dashes.iter().any(|n| *n > 0.0) => Some(dashes),
            _ => {
                rejected(key, value, "expected an array of non-negative numbers");
                None
            }
        }
    }

    pub(crate) fn marker_size(&self, key: &str) -> Option<MarkerSize> {
        let value = self.get(key)?;
        let size = value.as_str().and_then(MarkerSize::parse);
        if size.is_none() {
            rejected(key, value, "expected one of small, medium, large");
        }
        size
    }

    /// Reads a non-empty symbol name.
    pub(crate) fn symbol(&self, key: &str) -> Option<&'a str> {
        let value = self.get(key)?;
        match value.as_str() {
            Some(symbol) if !symbol.is_empty() => Some(symbol),
            _ => {
                rejected(key, value, "expected a non-empty string");
                None
            }
        }
    }
}

fn rejected(key: &str, value: &Value, reason: &str) {
    debug!("ignoring `{key}` value {value}: {reason}; using default");
}
