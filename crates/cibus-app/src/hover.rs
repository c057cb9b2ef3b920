//! Hovering a vendor in the list highlights its markers on the map.

use cibus_core::SearchResult;
use cibus_map::{render, MapSurface, RenderError, RenderSummary};

/// Re-renders `result` with every branch of `vendor_name` on the highlight
/// layer. Names match ignoring case.
///
/// Returns `Ok(None)` without touching the map when no result is loaded.
/// Every call re-renders; hover events are not debounced.
///
/// # Errors
///
/// Returns [`RenderError`] if projection fails or the map rejects the update.
pub fn highlight<M: MapSurface + ?Sized>(
    map: &mut M,
    result: Option<&SearchResult>,
    vendor_name: &str,
) -> Result<Option<RenderSummary>, RenderError> {
    let Some(result) = result else {
        tracing::debug!(vendor = vendor_name, "hover ignored, no result loaded");
        return Ok(None);
    };

    let summary = render(map, &result.vendors, Some(vendor_name))?;
    tracing::debug!(
        vendor = vendor_name,
        highlighted = summary.highlighted,
        normal = summary.normal,
        "hover highlight applied"
    );
    Ok(Some(summary))
}
