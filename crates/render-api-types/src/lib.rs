//! Wire shapes of the author-tools render endpoint.
//!
//! `POST /api/render/{format}` takes a multipart form with a single `file`
//! field and answers with a [`RenderResponse`]. Every key of the response is
//! optional; a JSON `null` decodes the same as an absent key.

#![deny(clippy::all, clippy::pedantic)]

use serde::{Deserialize, Serialize};

/// Path prefix of the render endpoint, relative to the service root.
pub const RENDER_PATH_PREFIX: &str = "api/render/";

/// Name of the multipart field carrying the uploaded document.
pub const UPLOAD_FIELD: &str = "file";

/// Relative endpoint path for a given output format. The format is not
/// validated or escaped.
#[must_use]
pub fn render_path(format: &str) -> String {
    format!("{RENDER_PATH_PREFIX}{format}")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logs: Option<RenderLogs>,
    /// Location of the rendered artifact.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Diagnostics produced by the renderer, in the order it emitted them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderLogs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<String>>,
}
