#![deny(clippy::all, clippy::pedantic)]

use std::io::Write;
use std::path::{Path, PathBuf};

use render_api_types::{RenderResponse, UPLOAD_FIELD};
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, warn};

use crate::args::Cli;
use crate::client::{CliError, Ctx};
use crate::print;

/// One document to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    pub input: PathBuf,
    pub format: String,
}

impl From<&Cli> for RenderRequest {
    fn from(cli: &Cli) -> Self {
        Self {
            input: cli.input.clone(),
            format: cli.format.clone(),
        }
    }
}

/// Upload, report the renderer's logs, then fetch the artifact into
/// `output` when the service returned one. Returns whether a file was
/// written.
pub async fn handle<W: Write>(
    ctx: &Ctx,
    request: &RenderRequest,
    output: &Path,
    out: &mut W,
) -> Result<bool, CliError> {
    let response = upload(ctx, request).await?;
    print::logs(out, &response)?;
    download(ctx, &response, output, out).await
}

pub async fn upload(ctx: &Ctx, request: &RenderRequest) -> Result<RenderResponse, CliError> {
    let url = ctx.render_url(&request.format)?;
    let data = tokio::fs::read(&request.input)
        .await
        .map_err(|source| CliError::InputFile {
            path: request.input.display().to_string(),
            source,
        })?;
    let part = Part::bytes(data).file_name(
        request
            .input
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("upload.xml")
            .to_string(),
    );
    let form = Form::new().part(UPLOAD_FIELD, part);

    info!(target: "render::upload", %url, input = %request.input.display(), "uploading document");
    let resp = ctx.client.post(url).multipart(form).send().await?;
    let status = resp.status();
    let bytes = resp.bytes().await?;
    if !status.is_success() {
        let body = String::from_utf8_lossy(&bytes).into_owned();
        return Err(CliError::Rejected { status, body });
    }
    Ok(serde_json::from_slice(&bytes)?)
}

pub async fn download<W: Write>(
    ctx: &Ctx,
    response: &RenderResponse,
    output: &Path,
    out: &mut W,
) -> Result<bool, CliError> {
    let Some(location) = response.url.as_deref() else {
        debug!(target: "render::download", "response carries no url; nothing to download");
        return Ok(false);
    };
    print::downloading(out, location, output)?;
    let url = ctx.url(location)?;

    let resp = ctx.client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        warn!(target: "render::download", %status, "download returned a non-success status");
    }
    let text = resp.text().await?;
    tokio::fs::write(output, text)
        .await
        .map_err(|source| CliError::OutputFile {
            path: output.display().to_string(),
            source,
        })?;
    Ok(true)
}
