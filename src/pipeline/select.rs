use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::item::Item;
use crate::config::DateWindow;

/// Keeps items whose originating event falls inside `window`, then the first
/// item seen for each URL. Input order decides which duplicate wins.
pub(super) fn select_items(
    entries: impl IntoIterator<Item = (Item, DateTime<Utc>)>,
    window: &DateWindow,
) -> Vec<Item> {
    let mut seen = HashSet::new();
    entries
        .into_iter()
        .filter(|(_, created_at)| window.contains(*created_at))
        .map(|(item, _)| item)
        .filter(|item| seen.insert(item.url.clone()))
        .collect()
}
