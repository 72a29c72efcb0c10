//! YAML encoder, the default output format

use crate::error::RenderError;
use crate::project::Projection;
use crate::render::{Encoder, Rendered};

/// Encodes projections as YAML documents
pub struct YamlEncoder;

impl Encoder for YamlEncoder {
    fn encode(&self, value: &Projection) -> Result<Rendered, RenderError> {
        let text = serde_yaml::to_string(value)?;
        Ok(Rendered::Text(text))
    }
}
