//! Output rendering for selected specifications
//!
//! This module provides:
//! - YAML output, the human-readable default
//! - TOML output, a self-describing form that decodes back into a record
//! - Binary output, an exact encoding of the value
//!
//! Encoders are pure dispatchers: equal values under the same format
//! always produce byte-identical output.

mod binary;
mod toml_format;
mod yaml;

pub use binary::BinaryEncoder;
pub use toml_format::TomlEncoder;
pub use yaml::YamlEncoder;

use crate::error::RenderError;
use crate::project::Projection;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Human-readable YAML output
    #[default]
    Yaml,
    /// Self-describing TOML output, whole records only
    Toml,
    /// Exact binary encoding
    Binary,
}

/// One rendered output unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Textual unit (YAML, TOML)
    Text(String),
    /// Binary unit
    Bytes(Vec<u8>),
}

impl Rendered {
    /// The raw bytes of this unit
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Rendered::Text(text) => text.as_bytes(),
            Rendered::Bytes(bytes) => bytes,
        }
    }
}

/// Trait for output encoders
pub trait Encoder {
    /// Encode one projection into an output unit
    fn encode(&self, value: &Projection) -> Result<Rendered, RenderError>;
}

/// Create the encoder for the given format
pub fn encoder_for(format: Format) -> Box<dyn Encoder> {
    match format {
        Format::Yaml => Box::new(YamlEncoder),
        Format::Toml => Box::new(TomlEncoder),
        Format::Binary => Box::new(BinaryEncoder),
    }
}
