use crate::error::{AppError, AppResult};

/// Owner and repository name of the GitHub remote, derived once from the
/// `remote.origin.url` setting and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoCoordinates {
    pub owner: String,
    pub repo: String,
}

enum RemoteShape<'a> {
    Https(&'a str),
    Ssh(&'a str),
}

/// Parses a git remote URL into owner/repo. Exactly two shapes are accepted:
/// `https://host/.../OWNER/REPO[.git]` and `git@host:OWNER/REPO[.git]`.
/// Anything else is rejected with the offending URL in the error.
pub fn parse_remote_url(url: &str) -> AppResult<RepoCoordinates> {
    let trimmed = url.trim();

    let shape = if let Some(rest) = trimmed.strip_prefix("https://") {
        RemoteShape::Https(rest)
    } else if let Some(rest) = trimmed.strip_prefix("git@") {
        RemoteShape::Ssh(rest)
    } else {
        return Err(reject(url));
    };

    let (owner, repo) = match shape {
        RemoteShape::Https(rest) => {
            let rest = rest.strip_suffix(".git").unwrap_or(rest);
            let segments: Vec<&str> = rest.split('/').collect();
            // First segment is the host; at least two path segments must follow.
            if segments.len() < 3 {
                return Err(reject(url));
            }
            (segments[segments.len() - 2], segments[segments.len() - 1])
        }
        RemoteShape::Ssh(rest) => {
            let rest = rest.strip_suffix(".git").unwrap_or(rest);
            let Some((_host, path)) = rest.split_once(':') else {
                return Err(reject(url));
            };
            let segments: Vec<&str> = path.split('/').collect();
            if segments.len() != 2 {
                return Err(reject(url));
            }
            (segments[0], segments[1])
        }
    };

    if owner.is_empty() || repo.is_empty() {
        return Err(reject(url));
    }

    Ok(RepoCoordinates {
        owner: owner.to_string(),
        repo: repo.to_string(),
    })
}

fn reject(url: &str) -> AppError {
    AppError::RemoteParse(url.to_string())
}
