use anyhow::Context;

use crate::config::DateWindow;
use crate::github::{EventSource, RawEvent};

pub(super) const PER_PAGE: u8 = 100;
pub(super) const MAX_PAGES: u32 = 1000;

/// Fetches pages newest-first until the last event of a page predates the
/// window or the source runs out of pages. Events are not window-filtered.
pub(super) async fn fetch_events<S: EventSource>(
    source: &S,
    user: &str,
    window: &DateWindow,
) -> anyhow::Result<Vec<RawEvent>> {
    let mut out = Vec::new();

    for page in 1..=MAX_PAGES {
        let resp = source
            .list_events(user, page, PER_PAGE)
            .await
            .with_context(|| format!("failed to fetch events (page {page})"))?;
        tracing::debug!(page, count = resp.events.len(), "fetched events");

        let reached_since = resp
            .events
            .last()
            .is_some_and(|event| event.created_at < window.since());
        out.extend(resp.events);

        if reached_since || !resp.has_next_page {
            break;
        }
    }

    Ok(out)
}
