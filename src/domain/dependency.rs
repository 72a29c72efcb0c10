//! Dependency information structures

use super::{GemSpec, Requirement};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the gem records a query should match: a name plus optional
/// version requirement, platform tag and prerelease allowance. Built once
/// from the command line and passed verbatim to every source.
#[derive(Debug, Clone)]
pub struct GemDependency {
    /// Gem name
    pub name: String,
    /// Version requirement the matching records must satisfy
    pub requirement: Requirement,
    /// Optional platform tag, matched exactly against each record
    pub platform: Option<String>,
    /// Whether prerelease versions may be fetched from the remote index
    pub prerelease: bool,
}

impl GemDependency {
    /// Creates a new dependency on `name` under `requirement`
    pub fn new(name: impl Into<String>, requirement: Requirement) -> Self {
        Self {
            name: name.into(),
            requirement,
            platform: None,
            prerelease: false,
        }
    }

    /// Sets the platform filter (builder pattern)
    pub fn with_platform(mut self, platform: Option<String>) -> Self {
        self.platform = platform;
        self
    }

    /// Sets the prerelease allowance (builder pattern)
    pub fn with_prerelease(mut self, prerelease: bool) -> Self {
        self.prerelease = prerelease;
        self
    }

    /// Returns true when `spec` satisfies this dependency: same name, a
    /// satisfying version, and the exact platform when one was requested
    pub fn matches(&self, spec: &GemSpec) -> bool {
        self.name == spec.name
            && self.requirement.satisfied_by(&spec.version)
            && self
                .platform
                .as_ref()
                .map_or(true, |platform| platform == &spec.platform)
    }
}

impl fmt::Display for GemDependency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.requirement.is_none() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.requirement)
        }
    }
}

/// Dependency kind declared by a gem specification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyKind {
    #[default]
    Runtime,
    Development,
}

/// One dependency entry declared by a gem specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDecl {
    /// Name of the depended-on gem
    pub name: String,
    /// Declared requirement, kept in its textual form
    pub requirement: String,
    /// Runtime or development dependency
    #[serde(default)]
    pub kind: DependencyKind,
}

impl DependencyDecl {
    /// Creates a new runtime dependency declaration
    pub fn runtime(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
            kind: DependencyKind::Runtime,
        }
    }

    /// Creates a new development dependency declaration
    pub fn development(name: impl Into<String>, requirement: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            requirement: requirement.into(),
            kind: DependencyKind::Development,
        }
    }
}

impl fmt::Display for DependencyDecl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.requirement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GemSpec;

    fn widget(version: &str) -> GemSpec {
        GemSpec::new("widget", version.parse().unwrap())
    }

    #[test]
    fn test_dependency_new() {
        let dep = GemDependency::new("widget", Requirement::default());
        assert_eq!(dep.name, "widget");
        assert!(dep.platform.is_none());
        assert!(!dep.prerelease);
    }

    #[test]
    fn test_matches_by_name() {
        let dep = GemDependency::new("widget", Requirement::default());
        assert!(dep.matches(&widget("1.0.0")));
        assert!(!dep.matches(&GemSpec::new("gadget", "1.0.0".parse().unwrap())));
    }

    #[test]
    fn test_matches_by_requirement() {
        let requirement = ">= 2.0".parse().unwrap();
        let dep = GemDependency::new("widget", requirement);
        assert!(dep.matches(&widget("2.1.0")));
        assert!(!dep.matches(&widget("1.9.0")));
    }

    #[test]
    fn test_matches_by_platform() {
        let dep =
            GemDependency::new("widget", Requirement::default()).with_platform(Some("java".into()));
        let ruby_spec = widget("1.0.0");
        let java_spec = widget("1.0.0").with_platform("java");
        assert!(dep.matches(&java_spec));
        assert!(!dep.matches(&ruby_spec));
    }

    #[test]
    fn test_matches_without_platform_accepts_any() {
        let dep = GemDependency::new("widget", Requirement::default());
        assert!(dep.matches(&widget("1.0.0")));
        assert!(dep.matches(&widget("1.0.0").with_platform("java")));
    }

    #[test]
    fn test_display_unconstrained_is_bare_name() {
        let dep = GemDependency::new("missing-gem", Requirement::default());
        assert_eq!(format!("{}", dep), "missing-gem");
    }

    #[test]
    fn test_display_constrained_shows_requirement() {
        let dep = GemDependency::new("rails", "~> 7.0".parse().unwrap());
        assert_eq!(format!("{}", dep), "rails (~> 7.0)");
    }

    #[test]
    fn test_decl_constructors() {
        let runtime = DependencyDecl::runtime("rack", ">= 2.0");
        assert_eq!(runtime.kind, DependencyKind::Runtime);

        let dev = DependencyDecl::development("rake", ">= 0");
        assert_eq!(dev.kind, DependencyKind::Development);
    }

    #[test]
    fn test_decl_display() {
        let decl = DependencyDecl::runtime("rack", ">= 2.0");
        assert_eq!(format!("{}", decl), "rack (>= 2.0)");
    }

    #[test]
    fn test_decl_serde_round_trip() {
        let decl = DependencyDecl::development("rake", "~> 13.0");
        let json = serde_json::to_string(&decl).unwrap();
        let parsed: DependencyDecl = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, decl);
    }

    #[test]
    fn test_decl_kind_defaults_to_runtime() {
        let decl: DependencyDecl =
            serde_json::from_str(r#"{"name": "rack", "requirement": ">= 0"}"#).unwrap();
        assert_eq!(decl.kind, DependencyKind::Runtime);
    }
}
