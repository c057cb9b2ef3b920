//! Food item text handling on both sides of the search contract.
//!
//! [`format_food_items`] renders the collapsed/expanded line shown under each
//! vendor in the result list. [`split_permit_food_items`] and
//! [`serves_cold_drinks`] turn the colon-separated `fooditems` text of a permit
//! record into the list carried by a [`crate::Vendor`].

/// Number of characters kept in the collapsed preview.
const PREVIEW_CHARS: usize = 80;

/// Previews longer than this are cut back to the last comma.
const TRUNCATE_ABOVE: usize = 70;

pub const MORE_SUFFIX: &str = " & more...";

/// Permit text prefix marking a cold-drinks truck.
const COLD_TRUCK_MARKER: &str = "COLD TRUCK";

/// Formats a vendor's food items for the result list.
///
/// Expanded items are joined with `", "` and returned whole. Collapsed items
/// keep the first 80 characters of the joined text; when that preview is longer
/// than 70 characters it is cut at `80 - d`, where `d` is the 1-indexed
/// distance from the end of the preview back to its last comma, and
/// `" & more..."` is appended. A preview with no comma uses `d = 1` and
/// keeps 79 characters, one short of the full 80-character preview.
///
/// Lengths are counted in characters, not bytes.
#[must_use]
pub fn format_food_items<S: AsRef<str>>(items: &[S], expanded: bool) -> String {
    let joined = items
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(", ");
    if expanded {
        return joined;
    }

    let preview: Vec<char> = joined.chars().take(PREVIEW_CHARS).collect();
    if preview.len() <= TRUNCATE_ABOVE {
        return preview.into_iter().collect();
    }

    let distance = preview
        .iter()
        .rev()
        .position(|&c| c == ',')
        .map_or(1, |idx| idx + 1);
    let cut = PREVIEW_CHARS - distance;

    let mut out: String = preview.into_iter().take(cut).collect();
    out.push_str(MORE_SUFFIX);
    out
}

/// Splits permit `fooditems` text such as
/// `"Cold Truck: Soda: Chips: Candy"` into lowercase items.
///
/// A leading `cold truck` entry is dropped since it describes the truck rather
/// than the menu. Empty segments are skipped.
#[must_use]
pub fn split_permit_food_items(text: &str) -> Vec<String> {
    let mut items: Vec<String> = text
        .split(':')
        .map(|item| item.trim().to_lowercase())
        .collect();

    if items.first().is_some_and(|first| first.contains("cold truck")) {
        items.remove(0);
    }

    items.retain(|item| !item.is_empty());
    items
}

/// Whether the raw permit `fooditems` text marks the vendor as serving cold
/// drinks. Matching is case-sensitive, as the dataset writes the marker in caps.
#[must_use]
pub fn serves_cold_drinks(text: &str) -> bool {
    text.contains(COLD_TRUCK_MARKER)
}
