//! Flattening vendors into per-branch markers and splitting them by highlight.

use cibus_core::{Location, Vendor};

/// One (vendor, branch) pair ready to be placed on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub location: Location,
    pub name: String,
    pub hours: String,
    pub address: String,
    pub schedule: String,
}

/// Markers split by a highlight key.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    pub highlighted: Vec<Marker>,
    pub normal: Vec<Marker>,
}

/// Emits one marker per branch, in vendor order then branch order.
#[must_use]
pub fn flatten(vendors: &[Vendor]) -> Vec<Marker> {
    vendors
        .iter()
        .flat_map(|vendor| {
            vendor.branches.iter().map(move |branch| Marker {
                location: branch.location.clone(),
                name: vendor.name.clone(),
                hours: branch.hours.clone(),
                address: branch.address.clone(),
                schedule: branch.schedule.clone(),
            })
        })
        .collect()
}

/// Splits `markers` into those whose name equals `highlight` ignoring case and
/// the rest. Without a key every marker is normal.
///
/// Relative order is kept within each half.
#[must_use]
pub fn partition(markers: Vec<Marker>, highlight: Option<&str>) -> Partition {
    let Some(key) = highlight else {
        return Partition {
            highlighted: Vec::new(),
            normal: markers,
        };
    };

    let key = key.to_lowercase();
    let (highlighted, normal) = markers
        .into_iter()
        .partition(|marker| marker.name.to_lowercase() == key);

    Partition {
        highlighted,
        normal,
    }
}
