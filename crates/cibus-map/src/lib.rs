//! Projection of vendor search results onto an interactive map.
//!
//! Search results are flattened into [`Marker`]s, optionally split into a
//! highlighted and a normal set, projected into GeoJSON feature collections,
//! and pushed onto a [`MapSurface`] as two circle layers.

pub mod error;
pub mod marker;
pub mod memory;
pub mod pipeline;
pub mod projection;
pub mod surface;
pub mod sync;

pub use error::{MapError, ProjectionError, RenderError};
pub use marker::{flatten, partition, Marker, Partition};
pub use memory::{InMemoryMap, MapOp};
pub use pipeline::{render, RenderSummary};
pub use projection::project;
pub use surface::{CircleLayer, CirclePaint, GeoJsonSource, MapSurface};
pub use sync::{clear, sync, HIGHLIGHT_LAYER_ID, NORMAL_LAYER_ID};
