#![deny(clippy::all, clippy::pedantic)]

use clap::error::ErrorKind;
use reqwest::{Client, StatusCode, Url};
use thiserror::Error;

use crate::config::Settings;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid arguments: {0}")]
    Usage(clap::Error),
    #[error("unrecognized flag: {0}")]
    UnknownFlag(clap::Error),
    #[error("failed to read input file {path}: {source}")]
    InputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to write output file {path}: {source}")]
    OutputFile {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("upload rejected: status {status} body {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("failed to parse render response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
    #[error("telemetry initialization failed: {0}")]
    Telemetry(String),
}

impl CliError {
    /// Process exit status for this error.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Rejected { .. } => -1,
            Self::Usage(_) => -2,
            Self::UnknownFlag(_) => -3,
            _ => 1,
        }
    }
}

impl From<clap::Error> for CliError {
    fn from(err: clap::Error) -> Self {
        if err.kind() == ErrorKind::UnknownArgument {
            Self::UnknownFlag(err)
        } else {
            Self::Usage(err)
        }
    }
}

/// Shared HTTP client plus the service root every request is resolved
/// against.
#[derive(Clone, Debug)]
pub struct Ctx {
    pub client: Client,
    pub base: Url,
}

impl Ctx {
    pub fn new(settings: &Settings) -> Result<Self, CliError> {
        let base = settings.api_base.join("/")?;
        let client = Client::builder().user_agent(Self::user_agent()).build()?;
        Ok(Self { client, base })
    }

    pub fn user_agent() -> &'static str {
        concat!("ietf-render/", env!("CARGO_PKG_VERSION"))
    }

    pub fn url(&self, path: &str) -> Result<Url, CliError> {
        self.base.join(path).map_err(CliError::Url)
    }

    pub fn render_url(&self, format: &str) -> Result<Url, CliError> {
        self.url(&render_api_types::render_path(format))
    }
}
