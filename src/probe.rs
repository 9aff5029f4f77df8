//! Header-only dimension probe.
//!
//! The container format is guessed from the leading bytes, never from the file
//! extension. Formats the `image` decoders cannot handle are retried with the
//! `imagesize` header scanner over the same handle.

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

use image::{ImageError, ImageReader};
use tracing::{debug, trace};

use crate::error::DecodeError;
use crate::types::{Dimensions, ProbeSource};

/// Opens `path` read-only and reads the image's declared width and height.
///
/// The file handle is owned by this call and dropped on every return path.
pub fn read_dimensions(path: &Path) -> Result<Dimensions, DecodeError> {
    let file = File::open(path).map_err(|source| DecodeError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "opened image");

    match probe_with_source(BufReader::new(file)) {
        Ok((dimensions, source)) => {
            debug!(path = %path.display(), %dimensions, backend = %source, "read dimensions");
            Ok(dimensions)
        }
        Err(err) => {
            debug!(path = %path.display(), error = %err, "probe failed");
            Err(err)
        }
    }
}

pub fn probe<R: BufRead + Seek>(reader: R) -> Result<Dimensions, DecodeError> {
    probe_with_source(reader).map(|(dimensions, _)| dimensions)
}

/// Like [`probe`], also reporting which backend produced the answer.
pub fn probe_with_source<R: BufRead + Seek>(
    mut reader: R,
) -> Result<(Dimensions, ProbeSource), DecodeError> {
    {
        let guessed = ImageReader::new(&mut reader).with_guessed_format()?;
        if let Some(format) = guessed.format() {
            trace!(?format, "guessed container format");
            match guessed.into_dimensions() {
                Ok(size) => return Ok((Dimensions::from(size), ProbeSource::Decoder)),
                Err(ImageError::Unsupported(err)) => {
                    debug!(?format, %err, "no decoder for format, scanning header");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    reader.rewind()?;
    let size = imagesize::reader_size(&mut reader)?;
    let dimensions = match (u32::try_from(size.width), u32::try_from(size.height)) {
        (Ok(width), Ok(height)) => Dimensions::new(width, height),
        _ => {
            return Err(DecodeError::TooLarge {
                width: size.width,
                height: size.height,
            });
        }
    };

    Ok((dimensions, ProbeSource::HeaderScan))
}
