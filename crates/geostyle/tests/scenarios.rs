use geostyle::layer::OverlayConfig;
use geostyle::{
    resolve, GeometryStyle, GeometryType, MarkerSize, RangePolicy, StyleDescriptor, StyleResolver,
};
use serde_json::{json, Value};
use std::collections::BTreeMap;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn resolve_feature_json(feature: Value) -> StyleDescriptor {
    init_logging();
    StyleResolver::new().resolve_value(&feature)
}

#[test]
fn test_polygon_fill_with_partial_opacity() {
    let style = resolve_feature_json(json!({
        "type": "Feature",
        "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]},
        "properties": {"fill": "#ff0000", "fill-opacity": 0.3}
    }));

    let polygon = style.polygon().expect("polygon style");
    assert_eq!(polygon.fill, "#ff0000");
    assert_eq!(polygon.fill_opacity, 0.3);
    assert_eq!(polygon.stroke.color, "#000000");
    assert_eq!(polygon.stroke.width, 1.0);
    assert_eq!(polygon.stroke.opacity, 1.0);
    assert_eq!(polygon.stroke.dash_array, None);
}

#[test]
fn test_line_default_width_is_two() {
    let style = resolve_feature_json(json!({
        "type": "Feature",
        "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]},
        "properties": {}
    }));

    let stroke = style.stroke().expect("line stroke");
    assert_eq!(stroke.color, "#000000");
    assert_eq!(stroke.width, 2.0);
}

#[test]
fn test_unknown_marker_size_falls_back_to_medium() {
    let style = resolve_feature_json(json!({
        "type": "Feature",
        "geometry": {"type": "Point", "coordinates": [0, 0]},
        "properties": {"marker-size": "huge"}
    }));

    assert_eq!(style.point().unwrap().marker_size, MarkerSize::Medium);
}

#[test]
fn test_string_visibility_is_not_coerced() {
    let style = resolve_feature_json(json!({
        "type": "Feature",
        "geometry": {"type": "MultiPolygon", "coordinates": []},
        "properties": {"visible": "yes"}
    }));
    assert!(style.visible);

    let hidden = resolve_feature_json(json!({
        "type": "Feature",
        "geometry": {"type": "MultiPolygon", "coordinates": []},
        "properties": {"visible": false}
    }));
    assert!(!hidden.visible);
}

#[test]
fn test_null_properties_match_empty_properties() {
    for ty in GeometryType::ALL {
        let null = resolve_feature_json(json!({
            "type": "Feature",
            "geometry": {"type": ty.name(), "coordinates": []},
            "properties": null
        }));
        let empty = resolve(Some(&serde_json::Map::new()), ty.name());
        assert_eq!(null, empty, "{ty}");
        assert_eq!(null, StyleDescriptor::defaults_for(Some(ty)));
    }
}

#[test]
fn test_unknown_key_is_ignored() {
    let props = json!({"nonexistent-key": 42});
    assert_eq!(resolve(props.as_object(), "Point"), resolve(None, "Point"));
}

#[test]
fn test_defaults_serialize_without_extraneous_fields() {
    let polygon = serde_json::to_value(resolve(None, "Polygon")).unwrap();
    assert_eq!(
        polygon,
        json!({
            "title": "",
            "description": "",
            "visible": true,
            "fill": "#000000",
            "fill-opacity": 1.0,
            "stroke": "#000000",
            "stroke-width": 1.0,
            "stroke-opacity": 1.0
        })
    );

    let other = serde_json::to_value(resolve(None, "Circle")).unwrap();
    assert_eq!(
        other,
        json!({"title": "", "description": "", "visible": true})
    );
}

#[test]
fn test_resolved_descriptor_is_a_fixed_point() {
    let props = json!({
        "title": "Zones",
        "fill": "#D2691E",
        "fill-opacity": 7,
        "stroke-width": -1,
        "stroke-opacity": 0.8,
        "line-dasharray": [3, 1],
        "marker-size": "small",
        "unrelated": {"nested": true}
    });

    for ty in GeometryType::ALL {
        let first = resolve(props.as_object(), ty.name());
        let second = resolve(Some(&first.to_properties()), ty.name());
        assert_eq!(first, second, "{ty}");
    }
}

#[test]
fn test_both_opacity_policies_are_consistent() {
    let props = json!({"fill-opacity": 1.5, "stroke-opacity": 1.5});

    let clamped = resolve(props.as_object(), "Polygon");
    let polygon = clamped.polygon().unwrap();
    assert_eq!(polygon.fill_opacity, 1.0);
    assert_eq!(polygon.stroke.opacity, 1.0);

    let props = json!({"fill-opacity": -1, "stroke-opacity": -1});
    let clamped = resolve(props.as_object(), "Polygon");
    let polygon = clamped.polygon().unwrap();
    assert_eq!(polygon.fill_opacity, 0.0);
    assert_eq!(polygon.stroke.opacity, 0.0);

    let fallback = StyleResolver::new()
        .with_range_policy(RangePolicy::Fallback)
        .resolve(props.as_object(), "Polygon");
    let polygon = fallback.polygon().unwrap();
    assert_eq!(polygon.fill_opacity, 1.0);
    assert_eq!(polygon.stroke.opacity, 1.0);
}

#[test]
fn test_resolver_is_shareable_across_threads() {
    let resolver = StyleResolver::new();
    let props = json!({"stroke": "#8B4513", "stroke-width": 1.5});

    let results: Vec<StyleDescriptor> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| resolver.resolve(props.as_object(), "MultiLineString")))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(results[0].stroke().unwrap().width, 1.5);
}

#[test]
fn test_yaml_overlay_round_trips_through_resolver() {
    init_logging();
    let config = OverlayConfig::from_yaml_str(
        r##"
name: BurningMan
layers:
  streetOutlines:
    inputFile: resources/street_outlines.geojson
    name: Street Outlines
    description: Main street outlines and roads
    simplificationStrategy: douglas_peucker
    simplificationTolerance: 0.000005
    rendering:
      lineColor: "#90EE90"
      lineOpacity: 1.0
      lineThickness: 1.0
      fillOpacity: 0.0
"##,
    )
    .unwrap();

    let source: geojson::FeatureCollection = serde_json::from_value(json!({
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "geometry": {"type": "LineString", "coordinates": [[-119.21612, 40.8029], [-119.21608, 40.80293]]},
            "properties": {"NAME": "Esplanade"}
        }]
    }))
    .unwrap();

    let mut sources = BTreeMap::new();
    sources.insert("streetOutlines".to_string(), source);
    let merged = config.consolidate(sources);

    let styles = geostyle::resolve_collection(&merged);
    assert_eq!(styles.len(), 1);
    assert_eq!(styles[0].description, "Main street outlines and roads");
    match &styles[0].geometry {
        GeometryStyle::Line(line) => {
            assert_eq!(line.stroke.color, "#90EE90");
            assert_eq!(line.stroke.width, 1.0);
            assert_eq!(line.stroke.opacity, 1.0);
        }
        other => panic!("expected a line style, got {other:?}"),
    }
}

#[test]
fn test_yaml_overlay_rejects_invalid_color() {
    let err = OverlayConfig::from_yaml_str(
        r#"
name: Broken
layers:
  roads:
    name: Roads
    rendering:
      lineColor: green
"#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("lineColor"));
}

#[test]
fn test_malformed_colors_fall_back_to_default() {
    for color in [
        "rgb(1,2,3",
        "rgba(0,0,0,0.5",
        "#ff0000/* x */",
        "#\\66 f0000",
        "/**/#ff0000",
        "rgb(1,/**/2,3)",
        "rgb(100%, 0, 0)",
    ] {
        let props = json!({"fill": color, "stroke": color});
        let style = resolve(props.as_object(), "Polygon");
        let polygon = style.polygon().unwrap();
        assert_eq!(polygon.fill, "#000000", "{color}");
        assert_eq!(polygon.stroke.color, "#000000", "{color}");
    }
}
