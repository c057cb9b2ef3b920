//! The result list shown next to the map.

use cibus_core::{format_food_items, SearchResult};

/// One vendor row: name, branch count, drinks badge and a collapsible food
/// item line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VendorListItem {
    pub name: String,
    pub branches: usize,
    pub drinks: bool,
    pub fooditems: Vec<String>,
    expanded: bool,
}

impl VendorListItem {
    #[must_use]
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Flips between the collapsed preview and the full list.
    pub fn toggle_expand(&mut self) {
        self.expanded = !self.expanded;
    }

    #[must_use]
    pub fn food_items_text(&self) -> String {
        format_food_items(&self.fooditems, self.expanded)
    }
}

/// Rows for the current result, rebuilt on every successful search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultList {
    hits: u64,
    locations: u64,
    items: Vec<VendorListItem>,
}

impl ResultList {
    #[must_use]
    pub fn from_result(result: &SearchResult) -> Self {
        let items = result
            .vendors
            .iter()
            .map(|vendor| VendorListItem {
                name: vendor.name.clone(),
                branches: vendor.branches.len(),
                drinks: vendor.drinks,
                fooditems: vendor.fooditems.clone(),
                expanded: false,
            })
            .collect();

        Self {
            hits: result.hits,
            locations: result.locations,
            items,
        }
    }

    #[must_use]
    pub fn items(&self) -> &[VendorListItem] {
        &self.items
    }

    /// Toggles row `index`. Returns `false` if there is no such row.
    pub fn toggle_expand(&mut self, index: usize) -> bool {
        match self.items.get_mut(index) {
            Some(item) => {
                item.toggle_expand();
                true
            }
            None => false,
        }
    }

    /// Header line above the list, omitted when nothing matched.
    #[must_use]
    pub fn summary(&self) -> Option<String> {
        (self.hits > 0).then(|| {
            format!(
                "Found {} vendors in {} different locations",
                self.hits, self.locations
            )
        })
    }
}
