//! Core domain models for gemspec
//!
//! This module contains the fundamental types used throughout the application:
//! - Gem version numbers and their total order
//! - Version requirement expressions
//! - The dependency specifier a query is built from
//! - The gem specification record a query resolves to

mod dependency;
mod gemspec;
mod requirement;
mod version;

pub use dependency::{DependencyDecl, DependencyKind, GemDependency};
pub use gemspec::{GemSpec, DEFAULT_PLATFORM};
pub use requirement::{Op, Requirement};
pub use version::GemVersion;
