//! Application error types using thiserror
//!
//! Error hierarchy:
//! - UsageError: Command line usage violations
//! - ParseError: Malformed version or requirement strings
//! - SourceError: Issues with the local store or the remote index
//! - FieldError: Projection of a field the specification does not declare
//! - RenderError: Serialization failures in an output encoder

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::GemDependency;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Command line usage errors
    #[error(transparent)]
    Usage(#[from] UsageError),

    /// Gem source errors (local store or remote index)
    #[error(transparent)]
    Source(#[from] SourceError),

    /// Field projection errors
    #[error(transparent)]
    Field(#[from] FieldError),

    /// Output encoding errors
    #[error(transparent)]
    Render(#[from] RenderError),

    /// Selection produced no candidates across all enabled sources
    #[error("No gem matching '{dependency}' found")]
    NoMatch { dependency: GemDependency },

    /// IO errors while writing output
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Command line usage violations, reported with a distinct exit status
#[derive(Error, Debug)]
pub enum UsageError {
    /// No gem name or file path was supplied
    #[error("Please specify a gem name or file on the command line")]
    MissingGemName,

    /// A field projection cannot be combined with TOML output
    #[error("--toml and FIELD are mutually exclusive")]
    FieldWithToml,
}

/// Malformed version or requirement input
#[derive(Error, Debug)]
pub enum ParseError {
    /// Version string does not match the gem version grammar
    #[error("malformed version number string '{value}'")]
    Version { value: String },

    /// Requirement string does not match the requirement grammar
    #[error("illformed requirement '{value}'")]
    Requirement { value: String },
}

/// Errors raised by gem metadata sources
#[derive(Error, Debug)]
pub enum SourceError {
    /// Gem not known to the queried source
    #[error("gem '{gem}' not found at {source_name}")]
    NotFound { gem: String, source_name: String },

    /// Network request failed
    #[error("failed to fetch '{gem}' from {source_name}: {message}")]
    Network {
        gem: String,
        source_name: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{gem}' from {source_name}")]
    Timeout { gem: String, source_name: String },

    /// Response could not be decoded
    #[error("invalid response from {source_name} for '{gem}': {message}")]
    InvalidResponse {
        gem: String,
        source_name: String,
        message: String,
    },

    /// Local specifications directory could not be read
    #[error("failed to read gem store at {path}: {source}")]
    Store {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Projection of a field the specification does not declare
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("no field '{field}' on a gem specification")]
    Unknown { field: String },
}

/// Serialization failures inside an output encoder
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to encode YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to encode TOML: {0}")]
    Toml(#[from] toml::ser::Error),

    #[error("failed to encode binary: {0}")]
    Binary(#[from] bincode::Error),

    #[error("failed to build value tree: {0}")]
    Json(#[from] serde_json::Error),
}

impl ParseError {
    /// Creates a new Version parse error
    pub fn version(value: impl Into<String>) -> Self {
        ParseError::Version {
            value: value.into(),
        }
    }

    /// Creates a new Requirement parse error
    pub fn requirement(value: impl Into<String>) -> Self {
        ParseError::Requirement {
            value: value.into(),
        }
    }
}

impl SourceError {
    /// Creates a new NotFound error
    pub fn not_found(gem: impl Into<String>, source: impl Into<String>) -> Self {
        SourceError::NotFound {
            gem: gem.into(),
            source_name: source.into(),
        }
    }

    /// Creates a new Network error
    pub fn network(
        gem: impl Into<String>,
        source: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        SourceError::Network {
            gem: gem.into(),
            source_name: source.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(gem: impl Into<String>, source: impl Into<String>) -> Self {
        SourceError::Timeout {
            gem: gem.into(),
            source_name: source.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        gem: impl Into<String>,
        source: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        SourceError::InvalidResponse {
            gem: gem.into(),
            source_name: source.into(),
            message: message.into(),
        }
    }

    /// Creates a new Store error
    pub fn store(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SourceError::Store {
            path: path.into(),
            source,
        }
    }
}

impl FieldError {
    /// Creates a new Unknown field error
    pub fn unknown(field: impl Into<String>) -> Self {
        FieldError::Unknown {
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GemDependency, Requirement};

    #[test]
    fn test_usage_error_missing_gem_name() {
        let err = UsageError::MissingGemName;
        let msg = format!("{}", err);
        assert_eq!(msg, "Please specify a gem name or file on the command line");
    }

    #[test]
    fn test_usage_error_field_with_toml() {
        let err = UsageError::FieldWithToml;
        let msg = format!("{}", err);
        assert!(msg.contains("mutually exclusive"));
    }

    #[test]
    fn test_parse_error_version() {
        let err = ParseError::version("1..2");
        let msg = format!("{}", err);
        assert!(msg.contains("malformed version number string"));
        assert!(msg.contains("1..2"));
    }

    #[test]
    fn test_parse_error_requirement() {
        let err = ParseError::requirement(">>> 1");
        let msg = format!("{}", err);
        assert!(msg.contains("illformed requirement"));
        assert!(msg.contains(">>> 1"));
    }

    #[test]
    fn test_source_error_not_found() {
        let err = SourceError::not_found("rails", "rubygems.org");
        let msg = format!("{}", err);
        assert!(msg.contains("gem 'rails' not found"));
        assert!(msg.contains("rubygems.org"));
    }

    #[test]
    fn test_source_error_network() {
        let err = SourceError::network("rails", "rubygems.org", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_source_error_timeout() {
        let err = SourceError::timeout("rails", "rubygems.org");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("rails"));
    }

    #[test]
    fn test_field_error_unknown() {
        let err = FieldError::unknown("nonexistent");
        let msg = format!("{}", err);
        assert!(msg.contains("no field 'nonexistent'"));
    }

    #[test]
    fn test_no_match_message_unconstrained() {
        let dep = GemDependency::new("missing-gem", Requirement::default());
        let err = AppError::NoMatch { dependency: dep };
        assert_eq!(format!("{}", err), "No gem matching 'missing-gem' found");
    }

    #[test]
    fn test_no_match_message_constrained() {
        let requirement: Requirement = ">= 2.0".parse().unwrap();
        let dep = GemDependency::new("rails", requirement);
        let err = AppError::NoMatch { dependency: dep };
        assert_eq!(format!("{}", err), "No gem matching 'rails (>= 2.0)' found");
    }

    #[test]
    fn test_app_error_from_usage_error() {
        let err: AppError = UsageError::MissingGemName.into();
        let msg = format!("{}", err);
        assert!(msg.contains("Please specify a gem name"));
    }

    #[test]
    fn test_app_error_from_source_error() {
        let err: AppError = SourceError::not_found("pkg", "rubygems.org").into();
        let msg = format!("{}", err);
        assert!(msg.contains("gem 'pkg' not found"));
    }

    #[test]
    fn test_error_debug_trait() {
        let err = FieldError::unknown("files");
        let debug = format!("{:?}", err);
        assert!(debug.contains("Unknown"));
    }
}
