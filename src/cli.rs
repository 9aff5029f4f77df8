//! Command-line driver: argument validation, the probe, and the stdout report.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use crate::error::CliError;
use crate::probe::read_dimensions;
use crate::types::Dimensions;

/// Exactly one positional path. No flags: anything starting with `-` is a path too.
#[derive(Parser, Debug)]
#[command(name = "imgdim")]
#[command(about = "Print the pixel dimensions of an image as width,height", long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Args {
    // OsString rather than PathBuf: the PathBuf parser rejects empty values,
    // and an empty path must reach the probe and fail there.
    #[arg(allow_hyphen_values = true)]
    path: OsString,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub path: PathBuf,
}

/// Validates the raw argument list (program name first).
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, CliError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.len() != 2 {
        debug!(count = args.len().saturating_sub(1), "wrong argument count");
        return Err(CliError::Usage);
    }

    // The count is already settled; the escape makes clap take a literal `--` as the path.
    args.insert(1, OsString::from("--"));
    let args = Args::try_parse_from(args).map_err(|err| {
        debug!(kind = ?err.kind(), "rejected arguments");
        CliError::Usage
    })?;

    Ok(Invocation {
        path: PathBuf::from(args.path),
    })
}

pub fn execute(invocation: &Invocation) -> Result<Dimensions, CliError> {
    Ok(read_dimensions(&invocation.path)?)
}

/// Runs one invocation, writing the single result line to `out`.
///
/// Returns the process exit code. Only a failure to write `out` is an `Err`.
pub fn run<I, T, W>(args: I, out: &mut W) -> io::Result<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
{
    match parse_invocation(args).and_then(|invocation| execute(&invocation)) {
        Ok(dimensions) => {
            writeln!(out, "{dimensions}")?;
            Ok(0)
        }
        Err(err) => {
            writeln!(out, "{err}")?;
            Ok(err.exit_code())
        }
    }
}
