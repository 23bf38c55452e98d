use thiserror::Error;
use url::Url;
use zosmf_domain::Method;

#[derive(Debug, Error)]
pub enum Error {
    /// Rejected locally, nothing was sent.
    #[error(transparent)]
    Validation(#[from] zosmf_domain::Error),

    #[error("{method} {url} returned {status}, expected one of {expected:?}: {body}")]
    UnexpectedStatus {
        method: Method,
        url: Url,
        status: u16,
        expected: Vec<u16>,
        body: String,
    },

    /// Failure reported by the HTTP client, passed through as is.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("Invalid resource path: {0}")]
    InvalidPath(String),
}

impl Error {
    /// Status code the server answered with, when there was an answer.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::UnexpectedStatus { status, .. } => Some(*status),
            Error::Transport(error) => error.status().map(|status| status.as_u16()),
            _ => None,
        }
    }
}

pub type Result<A> = std::result::Result<A, Error>;
