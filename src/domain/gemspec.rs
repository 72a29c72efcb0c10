//! The gem specification record
//!
//! A `GemSpec` is the metadata document a query resolves to: identity
//! (name, version, platform) plus the declared descriptive fields. Records
//! are independently owned values; sources build them, the selector orders
//! them, and the renderer serializes them without further mutation.

use super::{DependencyDecl, GemVersion};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Platform tag of a pure-ruby gem, the default
pub const DEFAULT_PLATFORM: &str = "ruby";

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_string()
}

/// One gem specification document.
///
/// Field order matters for serialization: scalar fields come first so the
/// TOML rendering keeps them ahead of the dependency tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GemSpec {
    /// Gem name
    pub name: String,
    /// Gem version
    pub version: GemVersion,
    /// Platform tag ("ruby" unless the gem ships native code)
    #[serde(default = "default_platform")]
    pub platform: String,
    /// One-line summary
    #[serde(default)]
    pub summary: Option<String>,
    /// Longer description
    #[serde(default)]
    pub description: Option<String>,
    /// Author names
    #[serde(default)]
    pub authors: Vec<String>,
    /// Contact address
    #[serde(default)]
    pub email: Option<String>,
    /// Project homepage
    #[serde(default)]
    pub homepage: Option<String>,
    /// License identifiers
    #[serde(default)]
    pub licenses: Vec<String>,
    /// Release date
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Declared dependencies
    #[serde(default)]
    pub dependencies: Vec<DependencyDecl>,
    /// Free-form metadata pairs
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
}

impl GemSpec {
    /// Creates a minimal specification for `name` at `version`
    pub fn new(name: impl Into<String>, version: GemVersion) -> Self {
        Self {
            name: name.into(),
            version,
            platform: default_platform(),
            summary: None,
            description: None,
            authors: Vec::new(),
            email: None,
            homepage: None,
            licenses: Vec::new(),
            date: None,
            dependencies: Vec::new(),
            metadata: BTreeMap::new(),
        }
    }

    /// Sets the platform tag (builder pattern)
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// Sets the summary (builder pattern)
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Sets the author list (builder pattern)
    pub fn with_authors(mut self, authors: Vec<String>) -> Self {
        self.authors = authors;
        self
    }

    /// Adds a dependency declaration (builder pattern)
    pub fn with_dependency(mut self, dependency: DependencyDecl) -> Self {
        self.dependencies.push(dependency);
        self
    }
}
