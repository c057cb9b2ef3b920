//! The in-memory permit dataset and the grouping of matched permits into
//! vendors.
//!
//! The dataset is the JSON export of the mobile food facility permit table:
//! an array of objects with `applicant`, `fooditems`, `location`, `dayshours`,
//! `schedule`, `address` and many fields this service ignores.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use cibus_core::{serves_cold_drinks, split_permit_food_items, Branch, Location, SearchResult, Vendor};
use serde::Deserialize;
use thiserror::Error;

/// Fallback for a missing branch field.
const NOT_AVAILABLE: &str = "NA";

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read permit dataset {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("permit dataset {path} is not a JSON array: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct PermitRecord {
    pub applicant: String,
    pub fooditems: Option<String>,
    pub location: Option<Location>,
    pub dayshours: Option<String>,
    pub schedule: Option<String>,
    pub address: Option<String>,
}

/// All permits, searchable by food item.
#[derive(Debug, Default)]
pub struct PermitIndex {
    records: Vec<PermitRecord>,
    max_hits: usize,
}

impl PermitIndex {
    #[must_use]
    pub fn new(records: Vec<PermitRecord>, max_hits: usize) -> Self {
        Self { records, max_hits }
    }

    /// Reads the dataset at `path`. Entries that are not permit objects are
    /// skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the file cannot be read or is not a JSON
    /// array.
    pub fn load(path: &Path, max_hits: usize) -> Result<Self, DatasetError> {
        let text = std::fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let index = Self::from_json(&text, max_hits).map_err(|source| DatasetError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::info!(path = %path.display(), permits = index.len(), "permit dataset loaded");
        Ok(index)
    }

    /// Parses a JSON array of permits.
    ///
    /// # Errors
    ///
    /// Returns an error if `text` is not a JSON array.
    pub fn from_json(text: &str, max_hits: usize) -> Result<Self, serde_json::Error> {
        let raw: Vec<serde_json::Value> = serde_json::from_str(text)?;
        let total = raw.len();
        let records: Vec<PermitRecord> = raw
            .into_iter()
            .filter_map(|value| serde_json::from_value(value).ok())
            .collect();

        let skipped = total - records.len();
        if skipped > 0 {
            tracing::warn!(skipped, "skipped malformed permit records");
        }
        Ok(Self::new(records, max_hits))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Permits whose food item text contains any word of `query`, ignoring
    /// case, in dataset order and capped at the configured maximum.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&PermitRecord> {
        let terms = words(query);
        if terms.is_empty() {
            return Vec::new();
        }

        self.records
            .iter()
            .filter(|record| {
                record.fooditems.as_deref().is_some_and(|text| {
                    let items = words(text);
                    terms.iter().any(|term| items.contains(term))
                })
            })
            .take(self.max_hits)
            .collect()
    }
}

fn words(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

struct PendingVendor<'a> {
    name: &'a str,
    fooditems: &'a str,
    branches: Vec<Branch>,
}

/// Groups matched permits by applicant into the search response payload.
///
/// Vendors appear in the order their first permit was matched. Permits without
/// a location contribute no branch, and a vendor's food items come from the
/// last of its located permits.
#[must_use]
pub fn group_vendors(records: &[&PermitRecord]) -> SearchResult {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut pending: Vec<PendingVendor<'_>> = Vec::new();

    for &record in records {
        let idx = *positions.entry(record.applicant.as_str()).or_insert_with(|| {
            pending.push(PendingVendor {
                name: &record.applicant,
                fooditems: "",
                branches: Vec::new(),
            });
            pending.len() - 1
        });

        let Some(location) = &record.location else {
            continue;
        };
        let vendor = &mut pending[idx];
        vendor.fooditems = record.fooditems.as_deref().unwrap_or_default();
        vendor.branches.push(Branch {
            location: location.clone(),
            hours: or_not_available(record.dayshours.as_deref()),
            address: or_not_available(record.address.as_deref()),
            schedule: or_not_available(record.schedule.as_deref()),
        });
    }

    let vendors: Vec<Vendor> = pending
        .into_iter()
        .map(|p| Vendor {
            name: p.name.to_owned(),
            fooditems: split_permit_food_items(p.fooditems),
            drinks: serves_cold_drinks(p.fooditems),
            branches: p.branches,
        })
        .collect();

    let locations: usize = vendors.iter().map(|v| v.branches.len()).sum();
    SearchResult {
        hits: u64::try_from(vendors.len()).unwrap_or(u64::MAX),
        locations: u64::try_from(locations).unwrap_or(u64::MAX),
        vendors,
    }
}

fn or_not_available(value: Option<&str>) -> String {
    value.unwrap_or(NOT_AVAILABLE).to_owned()
}

#[cfg(test)]
#[path = "index_test.rs"]
mod tests;
