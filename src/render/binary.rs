//! Binary encoder
//!
//! An exact binary encoding of the value, defined for whole records and
//! projected fields alike. `bincode::deserialize` with the matching type
//! reconstructs the original value.

use crate::error::RenderError;
use crate::project::Projection;
use crate::render::{Encoder, Rendered};

/// Encodes projections as bincode bytes
pub struct BinaryEncoder;

impl Encoder for BinaryEncoder {
    fn encode(&self, value: &Projection) -> Result<Rendered, RenderError> {
        let bytes = bincode::serialize(value)?;
        Ok(Rendered::Bytes(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DependencyDecl, GemSpec};
    use crate::project::FieldValue;

    fn sample() -> GemSpec {
        GemSpec::new("widget", "2.0.0".parse().unwrap())
            .with_summary("A widget for every occasion")
            .with_authors(vec!["Jo Doe".to_string()])
            .with_dependency(DependencyDecl::development("rake", "~> 13.0"))
    }

    #[test]
    fn test_whole_record_round_trip() {
        let spec = sample();
        let rendered = BinaryEncoder
            .encode(&Projection::Full(spec.clone()))
            .unwrap();
        let Rendered::Bytes(bytes) = rendered else {
            panic!("binary output must be bytes");
        };
        let decoded: GemSpec = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, spec);
    }

    #[test]
    fn test_projected_scalar_round_trip() {
        let value = Projection::Field(FieldValue::Str("2.0.0".to_string()));
        let rendered = BinaryEncoder.encode(&value).unwrap();
        let Rendered::Bytes(bytes) = rendered else {
            panic!("binary output must be bytes");
        };
        let decoded: String = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, "2.0.0");
    }

    #[test]
    fn test_projected_list_round_trip() {
        let value = Projection::Field(FieldValue::List(vec![
            "Jo Doe".to_string(),
            "Sam Roe".to_string(),
        ]));
        let rendered = BinaryEncoder.encode(&value).unwrap();
        let Rendered::Bytes(bytes) = rendered else {
            panic!("binary output must be bytes");
        };
        let decoded: Vec<String> = bincode::deserialize(&bytes).unwrap();
        assert_eq!(decoded, vec!["Jo Doe".to_string(), "Sam Roe".to_string()]);
    }
}
