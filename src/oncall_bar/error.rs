use reqwest::StatusCode;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OncallError {
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("config error: {0}")]
    Config(String),

    #[error("credentials file not found: {}", .0.display())]
    CredentialsNotFound(PathBuf),

    #[error("credentials error: {0}")]
    Credentials(String),

    #[error("could not locate plugin files: {0}")]
    Paths(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} for team {team}")]
    ApiStatus { team: String, status: StatusCode },

    #[error("unexpected response for team {team}: {source}")]
    Decode {
        team: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("render error: {0}")]
    Render(#[from] minijinja::Error),
}

pub type Result<T> = std::result::Result<T, OncallError>;
