use anyhow::Context;

fn token_from_env(host: &str) -> Option<String> {
    let keys = if host.eq_ignore_ascii_case("github.com") {
        ["GH_TOKEN", "GITHUB_TOKEN"]
    } else {
        ["GH_ENTERPRISE_TOKEN", "GITHUB_ENTERPRISE_TOKEN"]
    };

    keys.into_iter().find_map(|key| non_empty(std::env::var(key).ok()?))
}

fn token_from_gh(host: &str) -> anyhow::Result<Option<String>> {
    let output = match std::process::Command::new("gh")
        .args(["auth", "token", "--hostname", host])
        .output()
    {
        Ok(output) => output,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("`gh` not found on PATH");
            return Ok(None);
        }
        Err(e) => return Err(e).context("failed to execute `gh auth token`"),
    };

    if !output.status.success() {
        tracing::debug!(status = %output.status, "`gh auth token` failed");
        return Ok(None);
    }
    Ok(non_empty(String::from_utf8_lossy(&output.stdout).into_owned()))
}

fn non_empty(token: String) -> Option<String> {
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Resolves the API token: explicit flag, then environment, then `gh`.
pub(super) fn fetch_token(host: &str, explicit: Option<String>) -> anyhow::Result<String> {
    if let Some(token) = explicit.and_then(non_empty) {
        return Ok(token);
    }
    if let Some(token) = token_from_env(host) {
        return Ok(token);
    }
    if let Some(token) = token_from_gh(host)? {
        return Ok(token);
    }

    anyhow::bail!(
        "token for {host} not found. Pass `--token`, set `GH_TOKEN` or log in with `gh auth login`."
    );
}

#[cfg(test)]
mod tests {
    use super::fetch_token;
    use temp_env::with_vars;

    #[test]
    fn explicit_token_wins_over_env() {
        with_vars([("GH_TOKEN", Some("gh-token"))], || {
            let token = fetch_token("github.com", Some("flag-token".to_string())).unwrap();
            assert_eq!(token, "flag-token");
        });
    }

    #[test]
    fn blank_explicit_token_falls_through_to_env() {
        with_vars([("GH_TOKEN", Some("gh-token"))], || {
            let token = fetch_token("github.com", Some("  ".to_string())).unwrap();
            assert_eq!(token, "gh-token");
        });
    }

    #[test]
    fn token_prefers_gh_token() {
        with_vars(
            [
                ("GH_TOKEN", Some("gh-token")),
                ("GITHUB_TOKEN", Some("github-token")),
            ],
            || {
                let token = fetch_token("github.com", None).unwrap();
                assert_eq!(token, "gh-token");
            },
        );
    }

    #[test]
    fn fetch_token_env_differs_by_host() {
        with_vars(
            [
                ("GH_TOKEN", Some("gh-token")),
                ("GH_ENTERPRISE_TOKEN", Some("ghe-token")),
            ],
            || {
                let github_token = fetch_token("github.com", None).unwrap();
                assert_eq!(github_token, "gh-token");

                let ghe_token = fetch_token("ghe.example.com", None).unwrap();
                assert_eq!(ghe_token, "ghe-token");
            },
        );
    }

    #[test]
    fn fetch_token_skips_empty_github_token_vars() {
        with_vars(
            [("GH_TOKEN", Some("")), ("GITHUB_TOKEN", Some("github-token"))],
            || {
                let token = fetch_token("github.com", None).unwrap();
                assert_eq!(token, "github-token");
            },
        );
    }

    #[test]
    fn fetch_token_trims_whitespace() {
        with_vars(
            [
                ("GH_ENTERPRISE_TOKEN", Some(" ghe-token\n")),
                ("GITHUB_ENTERPRISE_TOKEN", None),
            ],
            || {
                let token = fetch_token("ghe.example.com", None).unwrap();
                assert_eq!(token, "ghe-token");
            },
        );
    }
}
