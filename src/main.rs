//! render: upload a document to the IETF author-tools render API and save
//! the rendered result.
#![deny(clippy::all, clippy::pedantic)]

mod args;
mod client;
mod config;
mod print;
mod render;
mod telemetry;

use std::ffi::OsString;
use std::io::{self, Write};
use std::process;

use tracing::debug;

use args::{Cli, USAGE};
use client::{CliError, Ctx};
use config::Settings;
use render::RenderRequest;

#[tokio::main]
async fn main() {
    if let Err(err) = run(std::env::args_os()).await {
        if report(&err, &mut io::stdout()).is_err() {
            telemetry::report_fatal(&err);
        }
        process::exit(err.exit_code());
    }
}

async fn run<I>(argv: I) -> Result<(), CliError>
where
    I: IntoIterator<Item = OsString>,
{
    let cli = args::parse(argv)?;
    let settings = Settings::load()?;
    telemetry::init(&settings.logging)?;
    execute(&cli, &settings, &mut io::stdout()).await
}

async fn execute<W: Write>(cli: &Cli, settings: &Settings, out: &mut W) -> Result<(), CliError> {
    if !cli.operands.is_empty() {
        debug!(operands = ?cli.operands, "ignoring trailing operands");
    }

    let ctx = Ctx::new(settings)?;
    let request = RenderRequest::from(cli);
    render::handle(&ctx, &request, &cli.output, out).await?;
    Ok(())
}

/// Print the user-facing side of a failure. Usage and rejection reports go
/// to `out`; everything else becomes a fatal trace event.
fn report<W: Write>(err: &CliError, out: &mut W) -> io::Result<()> {
    match err {
        CliError::Usage(inner) | CliError::UnknownFlag(inner) => {
            eprintln!("{inner}");
            writeln!(out, "{USAGE}\n")
        }
        CliError::Rejected { status, body } => print::rejection(out, *status, body),
        _ => {
            telemetry::report_fatal(err);
            Ok(())
        }
    }
}
