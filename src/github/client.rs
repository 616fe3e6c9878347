use anyhow::Context;

use super::auth::fetch_token;
use super::rest::{self, Subject, SubjectKind};
use super::source::{EventPage, EventSource};

/// REST and GraphQL live under different roots on GitHub Enterprise Server,
/// so each gets its own octocrab instance.
pub struct Client {
    rest: octocrab::Octocrab,
    graphql: octocrab::Octocrab,
}

impl Client {
    pub fn new(host: &str, token: Option<String>) -> anyhow::Result<Self> {
        let token = fetch_token(host, token)?;
        let endpoints = ApiEndpoints::for_host(host);
        let rest = build_github_client(&endpoints.rest, token.clone())?;
        let graphql = if endpoints.graphql == endpoints.rest {
            rest.clone()
        } else {
            build_github_client(&endpoints.graphql, token)?
        };
        Ok(Self { rest, graphql })
    }

    pub(crate) async fn viewer_login(&self) -> anyhow::Result<String> {
        super::graphql::query_viewer_login(&self.graphql).await
    }
}

impl EventSource for Client {
    async fn list_events(
        &self,
        user: &str,
        page: u32,
        per_page: u8,
    ) -> anyhow::Result<EventPage> {
        rest::list_user_events(&self.rest, user, page, per_page).await
    }

    async fn get_subject(
        &self,
        owner: &str,
        repo: &str,
        number: u64,
        kind: SubjectKind,
    ) -> anyhow::Result<Subject> {
        rest::get_subject(&self.rest, owner, repo, number, kind).await
    }
}

fn build_github_client(base_uri: &str, token: String) -> anyhow::Result<octocrab::Octocrab> {
    let client = octocrab::Octocrab::builder()
        .base_uri(base_uri)
        .with_context(|| format!("failed to set base URI {base_uri}"))?
        .personal_token(token)
        .build()?;
    Ok(client)
}

#[derive(Debug, PartialEq, Eq)]
struct ApiEndpoints {
    rest: String,
    graphql: String,
}

impl ApiEndpoints {
    fn for_host(host: &str) -> Self {
        if host.eq_ignore_ascii_case("github.com") {
            let api = "https://api.github.com".to_string();
            Self {
                rest: api.clone(),
                graphql: api,
            }
        } else {
            Self {
                rest: format!("https://{host}/api/v3"),
                graphql: format!("https://{host}/api"),
            }
        }
    }
}
