mod classify;
#[cfg(test)]
pub(crate) mod fake;
mod fetch;
mod item;
mod select;

pub use item::Item;
#[cfg(test)]
pub use item::Status;

use crate::config::ReportConfig;
use crate::github::EventSource;

/// Builds the Markdown report for `config.user` over `config.window`.
///
/// Fails only if listing events fails; items whose current state cannot be
/// fetched are reported from the event payload instead.
pub(crate) async fn generate_report<S: EventSource>(
    source: &S,
    config: &ReportConfig,
) -> anyhow::Result<String> {
    let events = fetch::fetch_events(source, &config.user, &config.window).await?;
    tracing::debug!(count = events.len(), "fetched events in total");

    let mut classified = Vec::new();
    for event in &events {
        // Each classified event costs one API call; skip the ones the window drops anyway.
        if !config.window.contains(event.created_at) {
            continue;
        }
        if let Some(item) = classify::classify_event(source, event).await {
            classified.push((item, event.created_at));
        }
    }

    let items = select::select_items(classified, &config.window);
    tracing::debug!(count = items.len(), "selected items");

    Ok(crate::formatter::format_markdown(&config.host, &items))
}
