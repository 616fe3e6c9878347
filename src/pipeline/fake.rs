//! In-memory `EventSource` for pipeline tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::config::{DateWindow, parse_date};
use crate::github::{EventPage, EventSource, RawEvent, Subject, SubjectKind};

#[derive(Default)]
pub(crate) struct FakeSource {
    pages: Vec<EventPage>,
    subjects: HashMap<(String, String, u64), Subject>,
    fail_listing_from: Mutex<Option<u32>>,
    requested_pages: Mutex<Vec<u32>>,
    subject_requests: Mutex<Vec<(String, String, u64, SubjectKind)>>,
}

impl FakeSource {
    pub(crate) fn with_pages(pages: Vec<EventPage>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub(crate) fn with_events(events: Vec<RawEvent>) -> Self {
        Self::with_pages(vec![EventPage {
            events,
            has_next_page: false,
        }])
    }

    pub(crate) fn subject(mut self, owner: &str, repo: &str, subject: serde_json::Value) -> Self {
        let subject: Subject = serde_json::from_value(subject).unwrap();
        self.subjects
            .insert((owner.to_string(), repo.to_string(), subject.number), subject);
        self
    }

    pub(crate) fn fail_listing_from(&self, page: u32) {
        *self.fail_listing_from.lock().unwrap() = Some(page);
    }

    pub(crate) fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages.lock().unwrap().clone()
    }

    pub(crate) fn subject_requests(&self) -> Vec<(String, String, u64, SubjectKind)> {
        self.subject_requests.lock().unwrap().clone()
    }
}

impl EventSource for FakeSource {
    async fn list_events(
        &self,
        _user: &str,
        page: u32,
        _per_page: u8,
    ) -> anyhow::Result<EventPage> {
        self.requested_pages.lock().unwrap().push(page);
        if let Some(from) = *self.fail_listing_from.lock().unwrap()
            && page >= from
        {
            anyhow::bail!("502 Bad Gateway");
        }
        Ok(self
            .pages
            .get(page as usize - 1)
            .cloned()
            .unwrap_or_default())
    }

    async fn get_subject(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        kind: SubjectKind,
    ) -> anyhow::Result<Subject> {
        self.subject_requests.lock().unwrap().push((
            owner.to_string(),
            repo.to_string(),
            number,
            kind,
        ));
        self.subjects
            .get(&(owner.to_string(), repo.to_string(), number))
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("404 Not Found"))
    }
}

pub(crate) fn raw_event(value: serde_json::Value) -> RawEvent {
    serde_json::from_value(value).unwrap()
}

pub(crate) fn event_at(created_at: &str) -> RawEvent {
    raw_event(serde_json::json!({
        "type": "WatchEvent",
        "created_at": created_at,
        "repo": { "name": "o/r" },
        "payload": {},
    }))
}

pub(crate) fn window(since: &str, until: &str) -> DateWindow {
    DateWindow::from_dates(
        parse_date(since).unwrap(),
        parse_date(until).unwrap(),
        &chrono::Utc,
    )
    .unwrap()
}
