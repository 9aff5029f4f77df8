use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fixed message printed when the argument count is wrong.
pub const USAGE_MESSAGE: &str = "Error: The path given is not valid.";

/// Prefix printed before the text of any open or decode failure.
pub const DECODE_PREFIX: &str = "Erreur: ";

/// Errors raised while opening an image or reading its header.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{source}: '{}'", .path.display())]
    Open { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Io(#[from] io::Error),

    #[error("{0}")]
    Image(#[from] image::ImageError),

    #[error("cannot identify image file")]
    Unrecognized,

    #[error("image header is truncated or corrupt: {0}")]
    Corrupt(String),

    #[error("image size {width}x{height} does not fit in 32 bits")]
    TooLarge { width: usize, height: usize },
}

impl From<imagesize::ImageError> for DecodeError {
    fn from(err: imagesize::ImageError) -> Self {
        match err {
            imagesize::ImageError::NotSupported => Self::Unrecognized,
            imagesize::ImageError::IoError(source) => Self::Io(source),
            other => Self::Corrupt(other.to_string()),
        }
    }
}

/// Terminal outcomes of a CLI run. `Display` is the exact stdout line.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{}", USAGE_MESSAGE)]
    Usage,

    #[error("{}{}", DECODE_PREFIX, .0)]
    Decode(#[from] DecodeError),
}

impl CliError {
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Usage | Self::Decode(_) => 1,
        }
    }
}
