//! gemspec - gem specification display library
//!
//! This library resolves a gem name, version requirement, platform and
//! prerelease constraint to specification records from the local
//! installation store and/or rubygems.org, and renders the selection in
//! YAML, TOML or binary form.

pub mod cli;
pub mod domain;
pub mod error;
pub mod pipeline;
pub mod progress;
pub mod project;
pub mod render;
pub mod select;
pub mod source;
