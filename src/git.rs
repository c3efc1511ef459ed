//! Repository identifier resolution from the local git remote.
//!
//! Best-effort only: every failure path (no git binary, no remote, malformed
//! URL) collapses to `None` so callers can treat the identifier as optional
//! enrichment.

use std::path::Path;
use std::process::Command;

/// Run a git command in `repo_path` and return trimmed stdout on success.
fn run_git(repo_path: &Path, args: &[&str]) -> Option<String> {
    let output = Command::new("git")
        .current_dir(repo_path)
        .args(args)
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Read the `origin` remote URL, trying `git config` first and falling back
/// to `git remote get-url`.
fn remote_origin_url(repo_path: &Path) -> Option<String> {
    run_git(repo_path, &["config", "--get", "remote.origin.url"])
        .or_else(|| run_git(repo_path, &["remote", "get-url", "origin"]))
}

/// Parse a git remote URL into an `owner/repo` identifier.
///
/// Handles https/ssh URLs (`https://github.com/acme/widgets.git`), scp-style
/// shorthand (`git@github.com:acme/widgets.git`), and bare paths. Returns
/// `None` when no path segments remain after stripping.
pub fn parse_remote_url(url: &str) -> Option<String> {
    let url = url.trim();

    let path = if let Some(idx) = url.find("://") {
        // Network scheme: the path starts after the host
        let rest = &url[idx + 3..];
        match rest.find('/') {
            Some(slash) => &rest[slash..],
            None => "",
        }
    } else if url.contains('@') {
        // scp shorthand: everything after the first colon is the path
        match url.split_once(':') {
            Some((_, after)) => after,
            None => url,
        }
    } else {
        url
    };

    let path = path.trim_matches('/');
    let path = path.strip_suffix(".git").unwrap_or(path);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    match segments.len() {
        0 => None,
        1 => Some(segments[0].to_string()),
        n => Some(format!("{}/{}", segments[n - 2], segments[n - 1])),
    }
}

/// Resolve the `owner/repo` identifier for the repository containing the
/// current working directory, if any.
pub fn resolve_repo_full_name() -> Option<String> {
    let cwd = std::env::current_dir().ok()?;
    let url = remote_origin_url(&cwd)?;
    parse_remote_url(&url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_https_url() {
        assert_eq!(
            parse_remote_url("https://github.com/acme/widgets.git"),
            Some("acme/widgets".to_string())
        );
    }

    #[test]
    fn parses_https_url_without_git_suffix() {
        assert_eq!(
            parse_remote_url("https://github.com/acme/widgets"),
            Some("acme/widgets".to_string())
        );
    }

    #[test]
    fn parses_scp_shorthand() {
        assert_eq!(
            parse_remote_url("git@github.com:acme/widgets.git"),
            Some("acme/widgets".to_string())
        );
    }

    #[test]
    fn parses_ssh_scheme_url() {
        assert_eq!(
            parse_remote_url("ssh://git@github.com/acme/widgets.git"),
            Some("acme/widgets".to_string())
        );
    }

    #[test]
    fn keeps_last_two_segments_of_deep_paths() {
        assert_eq!(
            parse_remote_url("https://gitlab.example.com/group/subgroup/widgets.git"),
            Some("subgroup/widgets".to_string())
        );
    }

    #[test]
    fn parses_bare_path() {
        assert_eq!(
            parse_remote_url("acme/widgets"),
            Some("acme/widgets".to_string())
        );
    }

    #[test]
    fn single_segment_returns_segment_alone() {
        assert_eq!(parse_remote_url("widgets.git"), Some("widgets".to_string()));
    }

    #[test]
    fn empty_path_returns_none() {
        assert_eq!(parse_remote_url(""), None);
        assert_eq!(parse_remote_url("https://github.com"), None);
        assert_eq!(parse_remote_url("///"), None);
    }

    #[test]
    fn strips_surrounding_slashes() {
        assert_eq!(
            parse_remote_url("/acme/widgets/"),
            Some("acme/widgets".to_string())
        );
    }
}
