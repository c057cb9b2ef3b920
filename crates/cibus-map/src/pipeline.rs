use cibus_core::Vendor;

use crate::error::RenderError;
use crate::marker::{flatten, partition};
use crate::projection::project;
use crate::surface::MapSurface;
use crate::sync::sync;

/// Feature counts pushed to the map by one [`render`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderSummary {
    pub normal: usize,
    pub highlighted: usize,
}

/// Flattens `vendors`, splits them on `highlight`, projects both halves and
/// replaces the map layers.
///
/// Both collections are projected before the map is touched, so a malformed
/// coordinate leaves the previous layers in place.
///
/// # Errors
///
/// - [`RenderError::Projection`] if any branch has a malformed coordinate.
/// - [`RenderError::Map`] if the surface rejects an update.
pub fn render<M: MapSurface + ?Sized>(
    map: &mut M,
    vendors: &[Vendor],
    highlight: Option<&str>,
) -> Result<RenderSummary, RenderError> {
    let split = partition(flatten(vendors), highlight);
    let normal = project(&split.normal)?;
    let highlighted = match highlight {
        Some(_) => Some(project(&split.highlighted)?),
        None => None,
    };

    let summary = RenderSummary {
        normal: normal.features.len(),
        highlighted: highlighted.as_ref().map_or(0, |fc| fc.features.len()),
    };

    sync(map, normal, highlighted)?;
    Ok(summary)
}
