use anyhow::Context;

use super::types::{Subject, SubjectKind};

pub(crate) async fn get_subject(
    client: &octocrab::Octocrab,
    owner: &str,
    repo: &str,
    number: u64,
    kind: SubjectKind,
) -> anyhow::Result<Subject> {
    let route = format!("/repos/{owner}/{repo}/{}/{number}", kind.route_segment());

    client
        .get::<Subject, _, _>(&route, None::<&()>)
        .await
        .with_context(|| format!("failed to fetch {route}"))
}
