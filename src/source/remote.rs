//! Remote gem source
//!
//! Fetches specification records from the rubygems.org index.
//! API endpoint: https://rubygems.org/api/v1/versions/{gem}.json
//!
//! Note: an unknown gem answers 404 here; that maps to an empty result so
//! the gem can still resolve from the local store. Every other transport
//! failure is fatal.

use crate::domain::{GemDependency, GemSpec, DEFAULT_PLATFORM};
use crate::error::SourceError;
use crate::source::{HttpClient, SpecSource};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// rubygems.org versions API base URL
const RUBYGEMS_API_URL: &str = "https://rubygems.org/api/v1/versions";

/// Remote source over the rubygems.org index
pub struct RemoteSource {
    client: HttpClient,
}

/// One entry of the versions API response
#[derive(Debug, Deserialize)]
struct RemoteVersion {
    /// Version number
    number: String,
    /// Platform tag
    #[serde(default = "default_platform")]
    platform: String,
    /// Whether the index flags this version as a prerelease
    #[serde(default)]
    prerelease: bool,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    description: Option<String>,
    /// Author names, comma-joined
    #[serde(default)]
    authors: Option<String>,
    #[serde(default)]
    licenses: Option<Vec<String>>,
    #[serde(default)]
    built_at: Option<DateTime<Utc>>,
}

fn default_platform() -> String {
    DEFAULT_PLATFORM.to_string()
}

impl RemoteSource {
    /// Create a new remote source
    pub fn new(client: HttpClient) -> Self {
        Self { client }
    }

    /// Build the versions URL for a gem
    fn build_url(&self, gem: &str) -> String {
        format!("{}/{}.json", RUBYGEMS_API_URL, gem)
    }

    /// Prerelease inclusion policy. An unconstrained requirement only sees
    /// prereleases when they were asked for; a constrained requirement
    /// always sees them, since a pinned request is assumed to know exactly
    /// what it wants. Preserve this asymmetry.
    fn wants_prereleases(dep: &GemDependency) -> bool {
        if dep.requirement.is_none() {
            dep.prerelease
        } else {
            true
        }
    }

    /// Map one API entry to a specification record. Entries with version
    /// numbers the versioning scheme rejects are dropped.
    fn to_spec(name: &str, raw: RemoteVersion) -> Option<GemSpec> {
        let version = raw.number.parse().ok()?;
        let mut spec = GemSpec::new(name, version).with_platform(raw.platform);
        spec.summary = raw.summary;
        spec.description = raw.description;
        spec.authors = raw
            .authors
            .map(|joined| {
                joined
                    .split(',')
                    .map(|author| author.trim().to_string())
                    .filter(|author| !author.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        spec.licenses = raw.licenses.unwrap_or_default();
        spec.date = raw.built_at;
        Some(spec)
    }

    /// Filter and order the API entries for `dep`
    fn collect(dep: &GemDependency, raw: Vec<RemoteVersion>) -> Vec<GemSpec> {
        let include_prereleases = Self::wants_prereleases(dep);

        let mut specs = Vec::new();
        for entry in raw {
            let flagged_prerelease = entry.prerelease;
            let Some(spec) = Self::to_spec(&dep.name, entry) else {
                continue;
            };
            if !include_prereleases && (flagged_prerelease || spec.version.is_prerelease()) {
                continue;
            }
            if !dep.matches(&spec) {
                continue;
            }
            specs.push(spec);
        }

        specs.sort_by(|a, b| a.version.cmp(&b.version));
        specs
    }
}

#[async_trait]
impl SpecSource for RemoteSource {
    fn name(&self) -> &'static str {
        "rubygems.org"
    }

    async fn fetch(&self, dep: &GemDependency) -> Result<Vec<GemSpec>, SourceError> {
        let url = self.build_url(&dep.name);
        let raw: Vec<RemoteVersion> = match self.client.get_json(&url, &dep.name, self.name()).await
        {
            Ok(raw) => raw,
            // Unknown remotely; the local store may still have it
            Err(SourceError::NotFound { .. }) => return Ok(Vec::new()),
            Err(e) => return Err(e),
        };

        Ok(Self::collect(dep, raw))
    }
}
