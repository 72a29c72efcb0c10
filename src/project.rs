//! Field projection
//!
//! Narrows a specification record to one of its declared fields. Without a
//! field name the record passes through untouched. Projection is pure: it
//! never mutates the record and equal inputs give equal outputs.

use crate::domain::{DependencyDecl, GemSpec};
use crate::error::FieldError;
use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

/// The value of one projected field.
///
/// Serializes transparently as the inner value, so a projected summary
/// renders as a plain string and a projected author list as a plain list.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(String),
    OptStr(Option<String>),
    List(Vec<String>),
    Date(Option<DateTime<Utc>>),
    Dependencies(Vec<DependencyDecl>),
    Map(BTreeMap<String, String>),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Str(value) => value.serialize(serializer),
            FieldValue::OptStr(value) => value.serialize(serializer),
            FieldValue::List(value) => value.serialize(serializer),
            FieldValue::Date(value) => value.serialize(serializer),
            FieldValue::Dependencies(value) => value.serialize(serializer),
            FieldValue::Map(value) => value.serialize(serializer),
        }
    }
}

/// What the renderer receives: a whole record or one projected field
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    Full(GemSpec),
    Field(FieldValue),
}

impl Serialize for Projection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Projection::Full(spec) => spec.serialize(serializer),
            Projection::Field(value) => value.serialize(serializer),
        }
    }
}

/// Projects `spec` onto `field`, or passes the whole record through when no
/// field was requested. Unknown field names fail; nothing is computed on
/// the fly, only declared attributes can be projected.
pub fn project(spec: &GemSpec, field: Option<&str>) -> Result<Projection, FieldError> {
    match field {
        None => Ok(Projection::Full(spec.clone())),
        Some(name) => lookup(spec, name)
            .map(Projection::Field)
            .ok_or_else(|| FieldError::unknown(name)),
    }
}

fn lookup(spec: &GemSpec, field: &str) -> Option<FieldValue> {
    let value = match field {
        "name" => FieldValue::Str(spec.name.clone()),
        "version" => FieldValue::Str(spec.version.to_string()),
        "platform" => FieldValue::Str(spec.platform.clone()),
        "summary" => FieldValue::OptStr(spec.summary.clone()),
        "description" => FieldValue::OptStr(spec.description.clone()),
        "authors" => FieldValue::List(spec.authors.clone()),
        "email" => FieldValue::OptStr(spec.email.clone()),
        "homepage" => FieldValue::OptStr(spec.homepage.clone()),
        "licenses" => FieldValue::List(spec.licenses.clone()),
        "date" => FieldValue::Date(spec.date),
        "dependencies" => FieldValue::Dependencies(spec.dependencies.clone()),
        "metadata" => FieldValue::Map(spec.metadata.clone()),
        _ => return None,
    };
    Some(value)
}
