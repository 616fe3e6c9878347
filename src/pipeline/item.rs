use crate::github::{Subject, SubjectKind};

/// Final state of an issue or pull request as shown in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Open,
    Closed,
    Merged,
}

impl Status {
    /// Merged takes priority over closed for pull requests; issues are never merged.
    pub fn of(kind: SubjectKind, subject: &Subject) -> Self {
        match kind {
            SubjectKind::PullRequest if subject.is_merged() => Status::Merged,
            _ if subject.is_closed() => Status::Closed,
            _ => Status::Open,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Status::Open => "",
            Status::Closed => " **closed!**",
            Status::Merged => " **merged!**",
        }
    }
}

/// One issue or pull request touched by the user. `url` identifies it uniquely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub repo_name: String,
    pub title: String,
    pub url: String,
    pub author: String,
    pub status: Status,
}

impl Item {
    pub fn from_subject(repo_name: &str, kind: SubjectKind, subject: &Subject) -> Self {
        Self {
            repo_name: repo_name.to_string(),
            title: subject.title.clone().unwrap_or_default(),
            url: subject.html_url.clone().unwrap_or_default(),
            author: subject.author_login().to_string(),
            status: Status::of(kind, subject),
        }
    }
}
