//! Runtime settings: compiled-in defaults resolved once per invocation.
//! There is no file or environment layering; the command line carries only
//! the render request itself.

#![deny(clippy::all, clippy::pedantic)]

use reqwest::Url;
use tracing::level_filters::LevelFilter;

use crate::client::CliError;

pub const DEFAULT_API_BASE: &str = "https://author-tools.ietf.org/";
const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::WARN;

#[derive(Debug, Clone)]
pub struct Settings {
    /// Service root the render endpoint is joined to.
    pub api_base: Url,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone)]
pub struct LoggingSettings {
    pub level: LevelFilter,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self, CliError> {
        Ok(Self::with_api_base(Url::parse(DEFAULT_API_BASE)?))
    }

    pub fn with_api_base(api_base: Url) -> Self {
        Self {
            api_base,
            logging: LoggingSettings::default(),
        }
    }
}

#[cfg(test)]
mod tests;
