//! imgdim - print the pixel dimensions of an image as `width,height`.

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};

fn main() -> Result<ExitCode> {
    imgdim::logging::init();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let code = imgdim::cli::run(std::env::args_os(), &mut out)
        .context("Failed to write to standard output")?;
    out.flush().context("Failed to flush standard output")?;

    Ok(ExitCode::from(code))
}
