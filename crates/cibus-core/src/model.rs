//! Wire and domain types for vendor search results.
//!
//! These mirror the JSON body returned by `GET /search?q=`. Field names follow
//! the wire format except where noted.

use serde::{Deserialize, Serialize};

/// One coordinate component as received from the search service.
///
/// The upstream permit dataset stores latitude and longitude as strings, while
/// hand-built responses usually carry plain numbers. Both are accepted here and
/// parsed only when a marker is projected onto the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinate {
    Number(f64),
    Text(String),
}

impl Coordinate {
    /// Returns the coordinate as a finite `f64`, or `None` if the textual form
    /// does not parse or is not finite.
    #[must_use]
    pub fn to_f64(&self) -> Option<f64> {
        let value = match self {
            Coordinate::Number(n) => *n,
            Coordinate::Text(s) => s.trim().parse::<f64>().ok()?,
        };
        value.is_finite().then_some(value)
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Coordinate::Number(n) => write!(f, "{n}"),
            Coordinate::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Coordinate {
    fn from(value: f64) -> Self {
        Coordinate::Number(value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: Coordinate,
    pub longitude: Coordinate,
}

impl Location {
    pub fn new(latitude: impl Into<Coordinate>, longitude: impl Into<Coordinate>) -> Self {
        Self {
            latitude: latitude.into(),
            longitude: longitude.into(),
        }
    }
}

/// A single physical site at which a vendor operates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub location: Location,
    pub hours: String,
    pub address: String,
    pub schedule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    pub branches: Vec<Branch>,
    pub fooditems: Vec<String>,
    pub drinks: bool,
}

/// The body of a successful search response.
///
/// Each successful fetch produces a fresh value that replaces the previous one
/// wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Number of vendors in `vendors`.
    pub hits: u64,
    /// Number of branches across all vendors.
    pub locations: u64,
    #[serde(rename = "trucks")]
    pub vendors: Vec<Vendor>,
}

impl SearchResult {
    /// Total branches across all vendors, computed from the payload rather than
    /// trusted from the `locations` field.
    #[must_use]
    pub fn branch_count(&self) -> usize {
        self.vendors.iter().map(|v| v.branches.len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vendors.is_empty()
    }
}
