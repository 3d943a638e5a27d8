//! Command-line surface for `render`.
//! Short flags only; every flag is required. There is no help or version
//! flag. A repeated flag keeps its last value, and option parsing stops at
//! the first operand; that operand and everything after it are ignored.

#![deny(clippy::all, clippy::pedantic)]

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;

use crate::client::CliError;

pub const USAGE: &str = "usage: render -i input_file -o output_file -f (text | html)";

#[derive(Parser, Debug, Clone)]
#[command(
    name = "render",
    about = "Render a document with the IETF author-tools API",
    long_about = None,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true,
    override_usage = "render -i <input_file> -o <output_file> -f <text|html>"
)]
pub struct Cli {
    /// Document to upload
    #[arg(short = 'i', value_name = "input_file")]
    pub input: PathBuf,

    /// Where to write the rendered result
    #[arg(short = 'o', value_name = "output_file")]
    pub output: PathBuf,

    /// Output format requested from the service, e.g. text or html
    #[arg(short = 'f', value_name = "format")]
    pub format: String,

    #[arg(hide = true, trailing_var_arg = true)]
    pub operands: Vec<OsString>,
}

/// Parse `args` (program name first), classifying clap failures into
/// the usage exit codes.
pub fn parse<I, T>(args: I) -> Result<Cli, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args).map_err(CliError::from)
}
