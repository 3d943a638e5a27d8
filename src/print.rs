#![deny(clippy::all, clippy::pedantic)]

use std::io::{self, Write};
use std::path::Path;

use render_api_types::{RenderLogs, RenderResponse};
use reqwest::StatusCode;

/// Report the renderer's diagnostics. A missing key is noted and the rest
/// of the report still goes out.
pub fn logs<W: Write>(out: &mut W, response: &RenderResponse) -> io::Result<()> {
    let Some(RenderLogs { errors, warnings }) = &response.logs else {
        return missing_key(out, "logs");
    };

    match errors {
        Some(entries) => section(out, "Errors", entries)?,
        None => missing_key(out, "errors")?,
    }
    match warnings {
        Some(entries) => section(out, "Warnings", entries)?,
        None => missing_key(out, "warnings")?,
    }
    Ok(())
}

fn section<W: Write>(out: &mut W, title: &str, entries: &[String]) -> io::Result<()> {
    if entries.is_empty() {
        return Ok(());
    }
    writeln!(out, "{title}:\n")?;
    for entry in entries {
        writeln!(out, "\t{entry}")?;
    }
    Ok(())
}

fn missing_key<W: Write>(out: &mut W, key: &str) -> io::Result<()> {
    writeln!(out, "Output has no key: '{key}'")
}

pub fn rejection<W: Write>(out: &mut W, status: StatusCode, body: &str) -> io::Result<()> {
    writeln!(
        out,
        "status = {}, reason = {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )?;
    writeln!(out, "{body}")
}

/// `location` is printed as the service sent it, before any resolution.
pub fn downloading<W: Write>(out: &mut W, location: &str, output: &Path) -> io::Result<()> {
    writeln!(out, "Downloading {location} as {}", output.display())
}
