//! Gem metadata sources
//!
//! This module provides:
//! - The `SpecSource` trait every source implements
//! - A local source backed by the installed specifications store
//! - A remote source backed by the rubygems.org index
//! - A thin HTTP client shared foundation

mod client;
mod local;
mod remote;

pub use client::HttpClient;
pub use local::{read_spec_file, InstalledStore, LocalSource};
pub use remote::RemoteSource;

use crate::domain::{GemDependency, GemSpec};
use crate::error::SourceError;
use async_trait::async_trait;

/// Which sources a query consults
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceMode {
    /// Only the installed store
    Local,
    /// Only the remote index
    Remote,
    /// Installed store first, then the remote index
    #[default]
    Both,
}

impl SourceMode {
    /// Derives the mode from the command line flags. Setting exactly one of
    /// `--local`/`--remote` disables the other; anything else means both.
    pub fn from_flags(local: bool, remote: bool, both: bool) -> Self {
        if both || (local && remote) {
            SourceMode::Both
        } else if local {
            SourceMode::Local
        } else if remote {
            SourceMode::Remote
        } else {
            SourceMode::Both
        }
    }

    /// Returns true when the installed store is consulted
    pub fn includes_local(&self) -> bool {
        matches!(self, SourceMode::Local | SourceMode::Both)
    }

    /// Returns true when the remote index is consulted
    pub fn includes_remote(&self) -> bool {
        matches!(self, SourceMode::Remote | SourceMode::Both)
    }
}

/// Trait for gem metadata sources
#[async_trait]
pub trait SpecSource: Send + Sync {
    /// Human-readable source name, used in diagnostics
    fn name(&self) -> &'static str;

    /// Fetch every specification record matching `dep` from this source
    async fn fetch(&self, dep: &GemDependency) -> Result<Vec<GemSpec>, SourceError>;
}
