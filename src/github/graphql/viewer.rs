use super::types::GraphqlResponse;
use anyhow::Context;
use valq::query_value;

const VIEWER_LOGIN_QUERY: &str = "query { viewer { login } }";

/// Login of the user the token belongs to; the report target when `--user` is omitted.
pub(crate) async fn query_viewer_login(client: &octocrab::Octocrab) -> anyhow::Result<String> {
    let payload = serde_json::json!({ "query": VIEWER_LOGIN_QUERY });

    let resp: GraphqlResponse<serde_json::Value> = client
        .graphql(&payload)
        .await
        .context("failed to look up the authenticated user")?;

    let login = viewer_login(resp)?;
    tracing::debug!(%login, "report user defaults to token owner");
    Ok(login)
}

fn viewer_login(resp: GraphqlResponse<serde_json::Value>) -> anyhow::Result<String> {
    let data = resp.into_data()?;
    let login = query_value!(data.viewer.login -> str)
        .filter(|login| !login.is_empty())
        .context("viewer response missing login; pass `--user` explicitly")?;
    Ok(login.to_string())
}
