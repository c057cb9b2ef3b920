//! Headless [`MapSurface`] that keeps sources and layers in memory.
//!
//! Used by the CLI to render without a browser and by tests to observe every
//! call the synchronizer makes. It applies the same id rules a real map engine
//! does.

use std::collections::BTreeMap;

use crate::error::MapError;
use crate::surface::{CircleLayer, GeoJsonSource, MapSurface};

/// One successful call against the map, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapOp {
    AddSource { id: String, features: usize },
    AddLayer { id: String, source: String },
    RemoveLayer { id: String },
    RemoveSource { id: String },
}

#[derive(Debug, Default)]
pub struct InMemoryMap {
    sources: BTreeMap<String, GeoJsonSource>,
    /// Layers in draw order; later layers render on top.
    layers: Vec<CircleLayer>,
    operations: Vec<MapOp>,
}

impl InMemoryMap {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Every successful call since construction or the last [`Self::take_operations`].
    #[must_use]
    pub fn operations(&self) -> &[MapOp] {
        &self.operations
    }

    pub fn take_operations(&mut self) -> Vec<MapOp> {
        std::mem::take(&mut self.operations)
    }

    /// Layer ids in draw order.
    #[must_use]
    pub fn layer_ids(&self) -> Vec<&str> {
        self.layers.iter().map(|l| l.id.as_str()).collect()
    }

    pub fn sources(&self) -> impl Iterator<Item = (&str, &GeoJsonSource)> {
        self.sources.iter().map(|(id, source)| (id.as_str(), source))
    }

    /// Number of features in source `id`, or `None` if it does not exist.
    #[must_use]
    pub fn feature_count(&self, id: &str) -> Option<usize> {
        self.sources.get(id).map(GeoJsonSource::feature_count)
    }
}

impl MapSurface for InMemoryMap {
    fn add_source(&mut self, id: &str, source: GeoJsonSource) -> Result<(), MapError> {
        if self.sources.contains_key(id) {
            return Err(MapError::DuplicateSource(id.to_owned()));
        }
        let features = source.feature_count();
        self.sources.insert(id.to_owned(), source);
        self.operations.push(MapOp::AddSource {
            id: id.to_owned(),
            features,
        });
        Ok(())
    }

    fn add_layer(&mut self, layer: CircleLayer) -> Result<(), MapError> {
        if self.get_layer(&layer.id).is_some() {
            return Err(MapError::DuplicateLayer(layer.id));
        }
        if !self.sources.contains_key(&layer.source) {
            return Err(MapError::SourceNotFound(layer.source));
        }
        self.operations.push(MapOp::AddLayer {
            id: layer.id.clone(),
            source: layer.source.clone(),
        });
        self.layers.push(layer);
        Ok(())
    }

    fn remove_layer(&mut self, id: &str) -> Result<(), MapError> {
        let idx = self
            .layers
            .iter()
            .position(|l| l.id == id)
            .ok_or_else(|| MapError::LayerNotFound(id.to_owned()))?;
        self.layers.remove(idx);
        self.operations.push(MapOp::RemoveLayer { id: id.to_owned() });
        Ok(())
    }

    fn remove_source(&mut self, id: &str) -> Result<(), MapError> {
        if !self.sources.contains_key(id) {
            return Err(MapError::SourceNotFound(id.to_owned()));
        }
        if let Some(layer) = self.layers.iter().find(|l| l.source == id) {
            return Err(MapError::SourceInUse {
                source_id: id.to_owned(),
                layer_id: layer.id.clone(),
            });
        }
        self.sources.remove(id);
        self.operations.push(MapOp::RemoveSource { id: id.to_owned() });
        Ok(())
    }

    fn get_layer(&self, id: &str) -> Option<&CircleLayer> {
        self.layers.iter().find(|l| l.id == id)
    }

    fn get_source(&self, id: &str) -> Option<&GeoJsonSource> {
        self.sources.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::CirclePaint;
    use geojson::FeatureCollection;

    fn empty_source() -> GeoJsonSource {
        GeoJsonSource::new(FeatureCollection {
            bbox: None,
            features: Vec::new(),
            foreign_members: None,
        })
    }

    fn paint() -> CirclePaint {
        CirclePaint {
            radius: 8.0,
            color: "rgba(0,0,0,1)".to_owned(),
        }
    }

    #[test]
    fn add_and_remove_round_trip_records_operations() {
        let mut map = InMemoryMap::new();
        map.add_source("a", empty_source()).unwrap();
        map.add_layer(CircleLayer::new("a", "a", paint())).unwrap();
        assert_eq!(map.layer_ids(), vec!["a"]);
        assert_eq!(map.feature_count("a"), Some(0));

        map.remove_layer("a").unwrap();
        map.remove_source("a").unwrap();
        assert!(map.get_layer("a").is_none());
        assert!(map.get_source("a").is_none());

        assert_eq!(
            map.take_operations(),
            vec![
                MapOp::AddSource {
                    id: "a".to_owned(),
                    features: 0
                },
                MapOp::AddLayer {
                    id: "a".to_owned(),
                    source: "a".to_owned()
                },
                MapOp::RemoveLayer { id: "a".to_owned() },
                MapOp::RemoveSource { id: "a".to_owned() },
            ]
        );
        assert!(map.operations().is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut map = InMemoryMap::new();
        map.add_source("a", empty_source()).unwrap();
        assert_eq!(
            map.add_source("a", empty_source()),
            Err(MapError::DuplicateSource("a".to_owned()))
        );
        map.add_layer(CircleLayer::new("a", "a", paint())).unwrap();
        assert_eq!(
            map.add_layer(CircleLayer::new("a", "a", paint())),
            Err(MapError::DuplicateLayer("a".to_owned()))
        );
    }

    #[test]
    fn layer_requires_existing_source() {
        let mut map = InMemoryMap::new();
        assert_eq!(
            map.add_layer(CircleLayer::new("a", "missing", paint())),
            Err(MapError::SourceNotFound("missing".to_owned()))
        );
    }

    #[test]
    fn source_in_use_cannot_be_removed() {
        let mut map = InMemoryMap::new();
        map.add_source("a", empty_source()).unwrap();
        map.add_layer(CircleLayer::new("layer", "a", paint())).unwrap();
        assert_eq!(
            map.remove_source("a"),
            Err(MapError::SourceInUse {
                source_id: "a".to_owned(),
                layer_id: "layer".to_owned()
            })
        );
    }

    #[test]
    fn removing_missing_entries_fails() {
        let mut map = InMemoryMap::new();
        assert_eq!(
            map.remove_layer("x"),
            Err(MapError::LayerNotFound("x".to_owned()))
        );
        assert_eq!(
            map.remove_source("x"),
            Err(MapError::SourceNotFound("x".to_owned()))
        );
    }
}
