use super::rest::{RawEvent, Subject, SubjectKind};

/// One page of a user's activity feed, newest first.
#[derive(Debug, Clone, Default)]
pub struct EventPage {
    pub events: Vec<RawEvent>,
    pub has_next_page: bool,
}

/// Read access to a user's activity feed and to current issue/PR state.
pub(crate) trait EventSource {
    async fn list_events(
        &self,
        user: &str,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<EventPage>;

    async fn get_subject(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        kind: SubjectKind,
    ) -> anyhow::Result<Subject>;
}
