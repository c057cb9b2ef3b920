//! Replacing the vendor marker layers on a [`MapSurface`].
//!
//! Two source/layer pairs are managed, both using the same id for the source
//! and its layer: [`NORMAL_LAYER_ID`] for every unhighlighted marker and
//! [`HIGHLIGHT_LAYER_ID`] for the hovered vendor's markers, drawn on top.
//!
//! Replacement removes the old pairs before adding the new ones, so a reader
//! of the map between those calls briefly sees no markers. That flicker is
//! accepted; callers must not run two syncs against the same map at once.

use geojson::FeatureCollection;

use crate::error::MapError;
use crate::surface::{CircleLayer, CirclePaint, GeoJsonSource, MapSurface};

pub const NORMAL_LAYER_ID: &str = "trucks";
pub const HIGHLIGHT_LAYER_ID: &str = "trucks-highlight";

const MARKER_RADIUS: f64 = 8.0;
const NORMAL_COLOR: &str = "rgba(253,237,57,1)";
const HIGHLIGHT_COLOR: &str = "rgba(164,65,99,1)";

fn normal_paint() -> CirclePaint {
    CirclePaint {
        radius: MARKER_RADIUS,
        color: NORMAL_COLOR.to_owned(),
    }
}

fn highlight_paint() -> CirclePaint {
    CirclePaint {
        radius: MARKER_RADIUS,
        color: HIGHLIGHT_COLOR.to_owned(),
    }
}

/// Replaces the marker layers on `map`.
///
/// Both existing pairs are cleared first. The normal pair is always re-added,
/// even when `normal` is empty. The highlight pair is re-added only when
/// `highlighted` is supplied and has at least one feature; otherwise any
/// previous highlight stays cleared.
///
/// # Errors
///
/// Propagates the first [`MapError`] reported by the surface. The map may then
/// be left without one or both pairs.
pub fn sync<M: MapSurface + ?Sized>(
    map: &mut M,
    normal: FeatureCollection,
    highlighted: Option<FeatureCollection>,
) -> Result<(), MapError> {
    clear(map)?;

    add_pair(map, NORMAL_LAYER_ID, normal, normal_paint())?;

    if let Some(highlighted) = highlighted.filter(|fc| !fc.features.is_empty()) {
        add_pair(map, HIGHLIGHT_LAYER_ID, highlighted, highlight_paint())?;
    }

    Ok(())
}

/// Removes both marker pairs, leaving the map without vendor markers.
///
/// # Errors
///
/// Propagates the first [`MapError`] reported by the surface.
pub fn clear<M: MapSurface + ?Sized>(map: &mut M) -> Result<(), MapError> {
    clear_pair(map, NORMAL_LAYER_ID)?;
    clear_pair(map, HIGHLIGHT_LAYER_ID)
}

fn clear_pair<M: MapSurface + ?Sized>(map: &mut M, id: &str) -> Result<(), MapError> {
    if map.get_layer(id).is_some() {
        map.remove_layer(id)?;
    }
    if map.get_source(id).is_some() {
        map.remove_source(id)?;
    }
    Ok(())
}

fn add_pair<M: MapSurface + ?Sized>(
    map: &mut M,
    id: &str,
    data: FeatureCollection,
    paint: CirclePaint,
) -> Result<(), MapError> {
    let features = data.features.len();
    map.add_source(id, GeoJsonSource::new(data))?;
    map.add_layer(CircleLayer::new(id, id, paint))?;
    tracing::debug!(layer = id, features, "map layer replaced");
    Ok(())
}
