use anyhow::Context;

use super::types::RawEvent;
use crate::github::source::EventPage;

#[derive(serde::Serialize)]
struct ListParams {
    page: u32,
    per_page: u8,
}

pub(crate) async fn list_user_events(
    client: &octocrab::Octocrab,
    user: &str,
    page: u32,
    per_page: u8,
) -> anyhow::Result<EventPage> {
    let route = format!("/users/{user}/events");
    let params = ListParams { page, per_page };

    let resp: octocrab::Page<RawEvent> = client
        .get(route, Some(&params))
        .await
        .with_context(|| format!("failed to list events for {user} (page {page})"))?;

    Ok(EventPage {
        has_next_page: resp.next.is_some(),
        events: resp.items,
    })
}
