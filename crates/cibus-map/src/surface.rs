//! The map capability supplied by the hosting environment.
//!
//! The core never talks to a rendering engine directly. It only adds and
//! removes GeoJSON sources and circle layers through [`MapSurface`], the same
//! calls a Mapbox-style map exposes.

use geojson::FeatureCollection;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SourceType {
    #[serde(rename = "geojson")]
    GeoJson,
}

/// A GeoJSON source: `{"type": "geojson", "data": <FeatureCollection>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoJsonSource {
    #[serde(rename = "type")]
    pub source_type: SourceType,
    pub data: FeatureCollection,
}

impl GeoJsonSource {
    #[must_use]
    pub fn new(data: FeatureCollection) -> Self {
        Self {
            source_type: SourceType::GeoJson,
            data,
        }
    }

    #[must_use]
    pub fn feature_count(&self) -> usize {
        self.data.features.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LayerType {
    #[serde(rename = "circle")]
    Circle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CirclePaint {
    #[serde(rename = "circle-radius")]
    pub radius: f64,
    #[serde(rename = "circle-color")]
    pub color: String,
}

/// A circle layer drawing every point of the source it references.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleLayer {
    pub id: String,
    #[serde(rename = "type")]
    pub layer_type: LayerType,
    pub interactive: bool,
    pub source: String,
    pub paint: CirclePaint,
}

impl CircleLayer {
    #[must_use]
    pub fn new(id: &str, source: &str, paint: CirclePaint) -> Self {
        Self {
            id: id.to_owned(),
            layer_type: LayerType::Circle,
            interactive: true,
            source: source.to_owned(),
            paint,
        }
    }
}

/// Source and layer management on an external map.
///
/// Implementations are driven from a single task; `&mut self` on every
/// mutating call keeps two updates from interleaving.
pub trait MapSurface {
    /// # Errors
    ///
    /// Returns [`crate::MapError::DuplicateSource`] if `id` is already taken.
    fn add_source(&mut self, id: &str, source: GeoJsonSource) -> Result<(), crate::MapError>;

    /// # Errors
    ///
    /// Returns [`crate::MapError::DuplicateLayer`] if the layer id is taken, or
    /// [`crate::MapError::SourceNotFound`] if its source does not exist.
    fn add_layer(&mut self, layer: CircleLayer) -> Result<(), crate::MapError>;

    /// # Errors
    ///
    /// Returns [`crate::MapError::LayerNotFound`] if no such layer exists.
    fn remove_layer(&mut self, id: &str) -> Result<(), crate::MapError>;

    /// # Errors
    ///
    /// Returns [`crate::MapError::SourceNotFound`] if no such source exists, or
    /// [`crate::MapError::SourceInUse`] while a layer still references it.
    fn remove_source(&mut self, id: &str) -> Result<(), crate::MapError>;

    fn get_layer(&self, id: &str) -> Option<&CircleLayer>;

    fn get_source(&self, id: &str) -> Option<&GeoJsonSource>;
}
