pub mod cli;
mod error;
pub mod logging;
pub mod probe;
mod types;

pub use error::{CliError, DECODE_PREFIX, DecodeError, USAGE_MESSAGE};
pub use probe::{probe, probe_with_source, read_dimensions};
pub use types::{Dimensions, ProbeSource};
