use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("git error: {0}")]
    Git(String),
    #[error("could not parse owner and repo from remote URL: {0}")]
    RemoteParse(String),
    #[error("failed to fetch Jira issue: status {status}")]
    IssueFetch { status: u16 },
    #[error("failed to decode {0}")]
    Decode(String),
    #[error("failed to create pull request: status {status}: {body}")]
    PrCreation { status: u16, body: String },
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
