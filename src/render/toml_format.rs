//! TOML encoder
//!
//! The self-describing output form: decoding the text reproduces an
//! equivalent record. Absent optional fields are omitted from the document
//! (TOML has no null) and come back as their defaults on decode.
//!
//! Only whole records are expressible; a bare projected scalar is not a
//! TOML document. The pipeline rejects that combination up front, so the
//! serializer error for it stays theoretical.

use crate::error::RenderError;
use crate::project::Projection;
use crate::render::{Encoder, Rendered};
use serde_json::Value;

/// Encodes projections as TOML documents
pub struct TomlEncoder;

impl Encoder for TomlEncoder {
    fn encode(&self, value: &Projection) -> Result<Rendered, RenderError> {
        let tree = strip_nulls(serde_json::to_value(value)?);
        let text = toml::to_string_pretty(&tree)?;
        Ok(Rendered::Text(text))
    }
}

/// Drops null entries from maps, recursively
fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(strip_nulls).collect()),
        other => other,
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
            .with_dependency(DependencyDecl::runtime("rack", ">= 2.0"))
    }

    #[test]
    fn test_whole_record() {
        let rendered = TomlEncoder.encode(&Projection::Full(sample())).unwrap();
        let Rendered::Text(text) = rendered else {
            panic!("TOML output must be text");
        };
        assert!(text.contains("name = \"widget\""));
        assert!(text.contains("version = \"2.0.0\""));
    }

    #[test]
    fn test_decoding_reproduces_the_record() {
        let spec = sample();
        let rendered = TomlEncoder.encode(&Projection::Full(spec.clone())).unwrap();
        let Rendered::Text(text) = rendered else {
            panic!("TOML output must be text");
        };
        let decoded: GemSpec = toml::from_str(&text).unwrap();
        assert_eq!(decoded, spec);
    }

    #[test]
    fn test_absent_fields_are_omitted() {
        let rendered = TomlEncoder.encode(&Projection::Full(sample())).unwrap();
        let Rendered::Text(text) = rendered else {
            panic!("TOML output must be text");
        };
        // No homepage was set; the document must not mention it
        assert!(!text.contains("homepage"));
    }

    #[test]
    fn test_projected_scalar_is_not_a_document() {
        let value = Projection::Field(FieldValue::Str("2.0.0".to_string()));
        assert!(TomlEncoder.encode(&value).is_err());
    }

    #[test]
    fn test_strip_nulls_is_recursive() {
        let value = serde_json::json!({
            "a": null,
            "b": {"c": null, "d": 1},
            "e": [{"f": null}]
        });
        let stripped = strip_nulls(value);
        assert_eq!(
            stripped,
            serde_json::json!({"b": {"d": 1}, "e": [{}]})
        );
    }
}
