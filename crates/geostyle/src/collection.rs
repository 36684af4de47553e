//! Batch resolution over feature collections.
//!
//! Each feature resolves independently, so a collection is simply the
//! resolver mapped over its features. With the `parallel` feature enabled the
//! mapping fans out over rayon's thread pool; results keep input order either
//! way.

use geojson::{Feature, FeatureCollection};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::BTreeMap;

use crate::geometry::GeometryType;
use crate::resolve::StyleResolver;
use crate::style::StyleDescriptor;

/// Geometry name recorded for features without a geometry.
pub const UNKNOWN_GEOMETRY: &str = "Unknown";

impl StyleResolver {
    /// Resolves every feature of a collection, in order.
    pub fn resolve_collection(&self, collection: &FeatureCollection) -> Vec<StyleDescriptor> {
        self.resolve_features(&collection.features)
    }

    /// Resolves a slice of features, in order.
    #[cfg(not(feature = "parallel"))]
    pub fn resolve_features(&self, features: &[Feature]) -> Vec<StyleDescriptor> {
        features
            .iter()
            .map(|feature| self.resolve_feature(feature))
            .collect()
    }

    /// Resolves a slice of features, in order.
    #[cfg(feature = "parallel")]
    pub fn resolve_features(&self, features: &[Feature]) -> Vec<StyleDescriptor> {
        features
            .par_iter()
            .map(|feature| self.resolve_feature(feature))
            .collect()
    }

    /// Pairs each feature with its style, skipping features marked invisible.
    pub fn visible_features<'a>(
        &'a self,
        collection: &'a FeatureCollection,
    ) -> impl Iterator<Item = (&'a Feature, StyleDescriptor)> + 'a {
        collection
            .features
            .iter()
            .map(move |feature| (feature, self.resolve_feature(feature)))
            .filter(|(_, style)| style.visible)
    }
}

/// Resolves every feature of a collection with the default resolver.
pub fn resolve_collection(collection: &FeatureCollection) -> Vec<StyleDescriptor> {
    StyleResolver::new().resolve_collection(collection)
}

/// Feature counts of a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    pub feature_count: usize,
    /// Features per GeoJSON geometry type name.
    pub geometry_types: BTreeMap<String, usize>,
}

impl CollectionSummary {
    pub fn of(collection: &FeatureCollection) -> Self {
        let mut summary = Self::default();
        for feature in &collection.features {
            summary.feature_count += 1;
            *summary
                .geometry_types
                .entry(geometry_name(feature).to_string())
                .or_insert(0) += 1;
        }
        summary
    }

    /// Number of features a resolver will style, i.e. with one of the six
    /// styleable geometry types.
    pub fn styleable_count(&self) -> usize {
        self.geometry_types
            .iter()
            .filter(|(name, _)| GeometryType::from_name(name).is_some())
            .map(|(_, count)| count)
            .sum()
    }
}

fn geometry_name(feature: &Feature) -> &'static str {
    match feature.geometry.as_ref().map(|geometry| &geometry.value) {
        None => UNKNOWN_GEOMETRY,
        Some(geojson::Value::GeometryCollection(_)) => "GeometryCollection",
        Some(value) => GeometryType::from_geojson(value)
            .map(GeometryType::name)
            .unwrap_or(UNKNOWN_GEOMETRY),
    }
}
