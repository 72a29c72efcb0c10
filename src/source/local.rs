//! Local gem source
//!
//! Reads specification records from two places, in order:
//! 1. A spec document named directly on the command line. A file that does
//!    not parse is not an error here; the attempt just yields nothing and
//!    the lookup falls through to the store.
//! 2. The installed specifications store: one YAML document per installed
//!    gem under a specifications directory.

use crate::domain::{GemDependency, GemSpec};
use crate::error::SourceError;
use crate::source::SpecSource;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};

/// File extensions the store recognizes as spec documents
const SPEC_EXTENSIONS: [&str; 2] = ["yaml", "yml"];

/// Reads one spec document from `path`. Returns `None` when the file is
/// unreadable or malformed, which callers treat as "no result from this
/// attempt" rather than a failure.
pub fn read_spec_file(path: &Path) -> Option<GemSpec> {
    let text = fs::read_to_string(path).ok()?;
    serde_yaml::from_str(&text).ok()
}

/// The installed specifications store
#[derive(Debug, Clone)]
pub struct InstalledStore {
    dir: PathBuf,
}

impl InstalledStore {
    /// Create a store rooted at the given specifications directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store at the conventional location: `$GEM_HOME/specifications`,
    /// falling back to `~/.gem/specifications`
    pub fn from_env() -> Self {
        let root = std::env::var_os("GEM_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".gem")))
            .unwrap_or_else(|| PathBuf::from(".gem"));
        Self::new(root.join("specifications"))
    }

    /// The specifications directory this store reads
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns every installed record matching `dep`, version-ascending.
    /// A missing directory means nothing is installed, not an error.
    /// Entries that fail to parse are skipped.
    pub fn matching(&self, dep: &GemDependency) -> Result<Vec<GemSpec>, SourceError> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let entries = fs::read_dir(&self.dir).map_err(|e| SourceError::store(&self.dir, e))?;

        let mut specs = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| SourceError::store(&self.dir, e))?;
            let path = entry.path();
            if !has_spec_extension(&path) {
                continue;
            }
            let Some(spec) = read_spec_file(&path) else {
                continue;
            };
            if dep.matches(&spec) {
                specs.push(spec);
            }
        }

        specs.sort_by(|a, b| a.version.cmp(&b.version));
        Ok(specs)
    }
}

fn has_spec_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| SPEC_EXTENSIONS.contains(&ext))
}

/// Local gem source: direct file read with store fallback
pub struct LocalSource {
    store: InstalledStore,
    /// The raw gem argument, tried as a spec document path first
    candidate_path: PathBuf,
}

impl LocalSource {
    /// Create a local source over `store` for the raw gem argument
    pub fn new(store: InstalledStore, gem_or_path: &str) -> Self {
        Self {
            store,
            candidate_path: PathBuf::from(gem_or_path),
        }
    }
}

#[async_trait]
impl SpecSource for LocalSource {
    fn name(&self) -> &'static str {
        "local store"
    }

    async fn fetch(&self, dep: &GemDependency) -> Result<Vec<GemSpec>, SourceError> {
        if self.candidate_path.is_file() {
            // The argument names a file: a parsed document wins outright,
            // an unparseable one silently falls back to the store.
            if let Some(spec) = read_spec_file(&self.candidate_path) {
                return Ok(vec![spec]);
            }
        }

        self.store.matching(dep)
    }
}
