//! Markers to GeoJSON.

use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

use crate::error::ProjectionError;
use crate::marker::Marker;

/// Fill color carried in every feature's `point-color` property.
pub const POINT_COLOR: &str = "253,237,57,1";

/// Projects markers into a point feature collection, one feature per marker in
/// input order. Coordinates are `[longitude, latitude]`.
///
/// # Errors
///
/// Returns [`ProjectionError::MalformedCoordinate`] for the first marker whose
/// latitude or longitude is not a finite number. Markers are never skipped.
pub fn project(markers: &[Marker]) -> Result<FeatureCollection, ProjectionError> {
    let features = markers
        .iter()
        .map(marker_to_feature)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FeatureCollection {
        bbox: None,
        features,
        foreign_members: None,
    })
}

fn marker_to_feature(marker: &Marker) -> Result<Feature, ProjectionError> {
    let longitude = parse_axis(marker, "longitude", &marker.location.longitude)?;
    let latitude = parse_axis(marker, "latitude", &marker.location.latitude)?;

    let mut properties = JsonObject::new();
    properties.insert("name".to_owned(), json!(marker.name));
    properties.insert("hours".to_owned(), json!(marker.hours));
    properties.insert("address".to_owned(), json!(marker.address));
    properties.insert("point-color".to_owned(), json!(POINT_COLOR));

    Ok(Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(vec![longitude, latitude]))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    })
}

fn parse_axis(
    marker: &Marker,
    axis: &'static str,
    value: &cibus_core::Coordinate,
) -> Result<f64, ProjectionError> {
    value
        .to_f64()
        .ok_or_else(|| ProjectionError::MalformedCoordinate {
            name: marker.name.clone(),
            axis,
            value: value.to_string(),
        })
}
