use std::fmt;

/// Pixel size of an image as declared by its container header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub const fn as_tuple(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl From<(u32, u32)> for Dimensions {
    fn from((width, height): (u32, u32)) -> Self {
        Self::new(width, height)
    }
}

/// Renders as `width,height`, the exact stdout format of the CLI.
impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.width, self.height)
    }
}

/// Which backend answered a probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProbeSource {
    /// One of the `image` crate's format decoders read the header.
    Decoder,
    /// The `imagesize` header scanner, used for containers without a decoder.
    HeaderScan,
}

impl ProbeSource {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Decoder => "decoder",
            Self::HeaderScan => "header-scan",
        }
    }
}

impl fmt::Display for ProbeSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
