//! Query pipeline: validate, select, project, render
//!
//! This module coordinates one full query:
//! - Usage validation, before any source is built or touched
//! - Specifier construction from the parsed arguments
//! - Candidate selection across the enabled sources
//! - Optional field projection and format encoding per candidate
//! - Output of one rendered unit per candidate, blank-line separated

use crate::cli::CliArgs;
use crate::error::{AppError, UsageError};
use crate::progress::Progress;
use crate::project::project;
use crate::render::{encoder_for, Format, Rendered};
use crate::select::select;
use crate::source::{HttpClient, InstalledStore, LocalSource, RemoteSource, SourceMode, SpecSource};
use crate::domain::GemDependency;
use std::io::Write;

/// Coordinates one query from parsed arguments to rendered output
pub struct Pipeline {
    args: CliArgs,
}

impl Pipeline {
    /// Create a new pipeline over the given arguments
    pub fn new(args: CliArgs) -> Self {
        Self { args }
    }

    /// Run the query, writing rendered units to `out`
    pub async fn run(&self, out: &mut dyn Write) -> Result<(), AppError> {
        let gem = self
            .args
            .gem
            .as_deref()
            .ok_or(UsageError::MissingGemName)?;

        let format = self.args.format();
        if self.args.field.is_some() && format == Format::Toml {
            return Err(UsageError::FieldWithToml.into());
        }

        let requirement = self.args.requirement.clone().unwrap_or_default();
        let dep = GemDependency::new(gem, requirement)
            .with_platform(self.args.platform.clone())
            .with_prerelease(self.args.prerelease);

        let mode = self.args.source_mode();
        let sources = self.build_sources(gem, mode)?;

        let mut progress = Progress::new(!self.args.quiet && mode.includes_remote());
        progress.spinner(&format!("Fetching metadata for {}...", dep.name));
        let result = select(&dep, &sources, self.args.all).await;
        progress.finish_and_clear();
        let specs = result?;

        let encoder = encoder_for(format);
        let field = self.args.field.as_deref();

        for spec in &specs {
            let projection = project(spec, field)?;
            match encoder.encode(&projection)? {
                Rendered::Text(text) => {
                    out.write_all(text.as_bytes())?;
                    if !text.ends_with('\n') {
                        out.write_all(b"\n")?;
                    }
                }
                Rendered::Bytes(bytes) => {
                    out.write_all(&bytes)?;
                    out.write_all(b"\n")?;
                }
            }
            // Blank separator line after every unit
            out.write_all(b"\n")?;
        }

        Ok(())
    }

    fn build_sources(
        &self,
        gem: &str,
        mode: SourceMode,
    ) -> Result<Vec<Box<dyn SpecSource>>, AppError> {
        let mut sources: Vec<Box<dyn SpecSource>> = Vec::new();

        if mode.includes_local() {
            let store = match &self.args.install_dir {
                Some(dir) => InstalledStore::new(dir),
                None => InstalledStore::from_env(),
            };
            sources.push(Box::new(LocalSource::new(store, gem)));
        }

        if mode.includes_remote() {
            let client = HttpClient::new()?;
            sources.push(Box::new(RemoteSource::new(client)));
        }

        Ok(sources)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn pipeline(args: &[&str]) -> Pipeline {
        Pipeline::new(CliArgs::parse_from(args))
    }

    #[tokio::test]
    async fn test_missing_gem_name_is_a_usage_error() {
        let mut out = Vec::new();
        let err = pipeline(&["gemspec"]).run(&mut out).await.unwrap_err();
        assert!(matches!(err, AppError::Usage(UsageError::MissingGemName)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_field_with_toml_is_rejected_before_selection() {
        // The install dir does not exist and the store is never read; the
        // usage check fires first.
        let mut out = Vec::new();
        let err = pipeline(&[
            "gemspec",
            "widget",
            "version",
            "--toml",
            "--local",
            "--install-dir",
            "/nonexistent/specifications",
        ])
        .run(&mut out)
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Usage(UsageError::FieldWithToml)));
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_field_with_yaml_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("widget-1.0.0.yaml"),
            "name: widget\nversion: 1.0.0\n",
        )
        .unwrap();

        let mut out = Vec::new();
        pipeline(&[
            "gemspec",
            "widget",
            "version",
            "--local",
            "--install-dir",
            dir.path().to_str().unwrap(),
        ])
        .run(&mut out)
        .await
        .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1.0.0\n\n");
    }

    #[tokio::test]
    async fn test_no_match_reports_the_specifier() {
        let mut out = Vec::new();
        let err = pipeline(&[
            "gemspec",
            "missing-gem",
            "--local",
            "--install-dir",
            "/nonexistent/specifications",
        ])
        .run(&mut out)
        .await
        .unwrap_err();
        assert_eq!(format!("{}", err), "No gem matching 'missing-gem' found");
    }
}
