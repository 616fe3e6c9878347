use serde::Deserialize;

use super::item::Item;
use crate::github::{EventSource, RawEvent, Subject, SubjectKind};

/// Maps an event to the issue or pull request it touched, refreshed to its
/// current state. Returns `None` for unrelated event types or events whose
/// payload lacks the expected subject.
pub(super) async fn classify_event<S: EventSource>(source: &S, event: &RawEvent) -> Option<Item> {
    let kind = event.event_type.subject_kind()?;
    let embedded = embedded_subject(event, kind)?;
    let repo_name = event.repo_name();

    let subject = refresh_subject(source, repo_name, kind, embedded).await;
    let item = Item::from_subject(repo_name, kind, &subject);

    tracing::debug!(
        event_type = event.event_type.as_str(),
        repo = %item.repo_name,
        title = %item.title,
        status = ?item.status,
        "classified event"
    );
    Some(item)
}

fn embedded_subject(event: &RawEvent, kind: SubjectKind) -> Option<Subject> {
    let value = event
        .payload
        .get(kind.payload_field())
        .filter(|value| !value.is_null())?;

    match Subject::deserialize(value) {
        Ok(subject) => Some(subject),
        Err(err) => {
            tracing::debug!(
                event_type = event.event_type.as_str(),
                field = kind.payload_field(),
                error = %err,
                "skipping event with unreadable payload"
            );
            None
        }
    }
}

/// Current state from the source; the event's own snapshot if that fails.
async fn refresh_subject<S: EventSource>(
    source: &S,
    repo_name: &str,
    kind: SubjectKind,
    embedded: Subject,
) -> Subject {
    let (owner, repo) = split_repo_name(repo_name);
    match source.get_subject(owner, repo, embedded.number, kind).await {
        Ok(current) => current,
        Err(err) => {
            tracing::debug!(
                repo = repo_name,
                number = embedded.number,
                error = ?err,
                "falling back to event payload"
            );
            embedded
        }
    }
}

fn split_repo_name(repo_name: &str) -> (&str, &str) {
    match repo_name.split_once('/') {
        Some((owner, repo)) if !repo.contains('/') => (owner, repo),
        _ => ("", ""),
    }
}
