use thiserror::Error;

/// A marker could not be turned into a GeoJSON point.
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("malformed {axis} '{value}' for vendor {name}")]
    MalformedCoordinate {
        name: String,
        axis: &'static str,
        value: String,
    },
}

/// Rejected operation on a [`crate::MapSurface`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("source '{0}' already exists")]
    DuplicateSource(String),

    #[error("layer '{0}' already exists")]
    DuplicateLayer(String),

    #[error("source '{0}' does not exist")]
    SourceNotFound(String),

    #[error("layer '{0}' does not exist")]
    LayerNotFound(String),

    #[error("source '{source_id}' is still used by layer '{layer_id}'")]
    SourceInUse { source_id: String, layer_id: String },
}

/// Failure while projecting results and replacing the map layers.
#[derive(Debug, Error, PartialEq)]
pub enum RenderError {
    #[error(transparent)]
    Projection(#[from] ProjectionError),

    #[error("map update failed: {0}")]
    Map(#[from] MapError),
}
