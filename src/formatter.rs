use crate::pipeline::Item;

/// Renders items grouped under a `### owner/repo` heading per repository,
/// sorted by repository then URL. No items renders as an empty string.
pub fn format_markdown(host: &str, items: &[Item]) -> String {
    let mut out = String::new();
    if items.is_empty() {
        return out;
    }

    let mut sorted: Vec<&Item> = items.iter().collect();
    sorted.sort_by(|a, b| a.repo_name.cmp(&b.repo_name).then(a.url.cmp(&b.url)));

    let mut current_repo: Option<&str> = None;

    for item in sorted {
        if current_repo != Some(item.repo_name.as_str()) {
            if current_repo.is_some() {
                out.push('\n');
            }
            current_repo = Some(item.repo_name.as_str());
            out.push_str(&format!("### {}\n\n", item.repo_name));
        }

        out.push_str(&format!(
            "* [{}]({}) by @[{}]({}){}\n",
            item.title,
            item.url,
            item.author,
            profile_url(host, &item.author),
            item.status.suffix()
        ));
    }

    out
}

fn profile_url(host: &str, login: &str) -> String {
    if host.eq_ignore_ascii_case("github.com") {
        format!("https://github.com/{login}")
    } else {
        format!("https://{host}/{login}")
    }
}
