use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum EventType {
    #[serde(rename = "IssuesEvent")]
    Issues,
    #[serde(rename = "IssueCommentEvent")]
    IssueComment,
    #[serde(rename = "PullRequestEvent")]
    PullRequest,
    #[serde(rename = "PullRequestReviewEvent")]
    PullRequestReview,
    #[serde(rename = "PullRequestReviewCommentEvent")]
    PullRequestReviewComment,
    #[serde(other)]
    Other,
}

impl EventType {
    /// Which kind of subject the event payload embeds, if any.
    pub fn subject_kind(self) -> Option<SubjectKind> {
        match self {
            EventType::Issues | EventType::IssueComment => Some(SubjectKind::Issue),
            EventType::PullRequest
            | EventType::PullRequestReview
            | EventType::PullRequestReviewComment => Some(SubjectKind::PullRequest),
            EventType::Other => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Issues => "IssuesEvent",
            EventType::IssueComment => "IssueCommentEvent",
            EventType::PullRequest => "PullRequestEvent",
            EventType::PullRequestReview => "PullRequestReviewEvent",
            EventType::PullRequestReviewComment => "PullRequestReviewCommentEvent",
            EventType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubjectKind {
    Issue,
    PullRequest,
}

impl SubjectKind {
    /// Payload field holding the embedded snapshot.
    pub fn payload_field(self) -> &'static str {
        match self {
            SubjectKind::Issue => "issue",
            SubjectKind::PullRequest => "pull_request",
        }
    }

    /// REST collection under `/repos/{owner}/{repo}/`.
    pub fn route_segment(self) -> &'static str {
        match self {
            SubjectKind::Issue => "issues",
            SubjectKind::PullRequest => "pulls",
        }
    }
}

/// An activity event as returned by `GET /users/{user}/events`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawEvent {
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(default)]
    pub repo: Option<EventRepo>,
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl RawEvent {
    /// `owner/repo`, or an empty string when the event carries no repository.
    pub fn repo_name(&self) -> &str {
        self.repo.as_ref().map(|repo| repo.name.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventRepo {
    pub name: String,
}

/// Issue or pull request, either embedded in an event or fetched directly.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Subject {
    #[serde(default)]
    pub number: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub user: Option<Account>,
    #[serde(default)]
    pub state: Option<SubjectState>,
    #[serde(default)]
    pub merged: Option<bool>,
}

impl Subject {
    pub fn is_closed(&self) -> bool {
        self.state == Some(SubjectState::Closed)
    }

    pub fn is_merged(&self) -> bool {
        self.merged.unwrap_or(false)
    }

    pub fn author_login(&self) -> &str {
        self.user.as_ref().map(|user| user.login.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub login: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectState {
    Open,
    Closed,
    #[serde(other)]
    Unknown,
}
