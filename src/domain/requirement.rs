//! Version requirement expressions
//!
//! A requirement is a comma-separated list of constraints such as
//! `>= 1.0, < 2.0` or `~> 3.1`. A bare version means exact equality.
//! The unconstrained default is `>= 0`.

use crate::domain::GemVersion;
use crate::error::ParseError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// One constraint: optional operator followed by a version
static CONSTRAINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(=|!=|>=|<=|~>|>|<)?\s*(.+)$").expect("constraint pattern must compile")
});

/// A requirement operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Exact version (`=`, also the implied operator of a bare version)
    Eq,
    /// Any version but this one (`!=`)
    Ne,
    /// Strictly newer (`>`)
    Gt,
    /// Strictly older (`<`)
    Lt,
    /// This version or newer (`>=`)
    Ge,
    /// This version or older (`<=`)
    Le,
    /// Pessimistic constraint (`~>`): at least this version, below its bump
    Pessimistic,
}

impl Op {
    fn parse(token: &str) -> Option<Op> {
        match token {
            "=" => Some(Op::Eq),
            "!=" => Some(Op::Ne),
            ">" => Some(Op::Gt),
            "<" => Some(Op::Lt),
            ">=" => Some(Op::Ge),
            "<=" => Some(Op::Le),
            "~>" => Some(Op::Pessimistic),
            _ => None,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Op::Eq => "=",
            Op::Ne => "!=",
            Op::Gt => ">",
            Op::Lt => "<",
            Op::Ge => ">=",
            Op::Le => "<=",
            Op::Pessimistic => "~>",
        }
    }
}

/// A version requirement: every constraint must hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    constraints: Vec<(Op, GemVersion)>,
}

impl Requirement {
    /// Parses a comma-separated requirement expression
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let mut constraints = Vec::new();

        for part in input.split(',') {
            let part = part.trim();
            if part.is_empty() {
                return Err(ParseError::requirement(input));
            }

            let caps = CONSTRAINT
                .captures(part)
                .ok_or_else(|| ParseError::requirement(input))?;

            let op = match caps.get(1) {
                Some(m) => Op::parse(m.as_str()).ok_or_else(|| ParseError::requirement(input))?,
                None => Op::Eq,
            };
            let version = caps[2]
                .trim()
                .parse()
                .map_err(|_| ParseError::requirement(input))?;

            constraints.push((op, version));
        }

        if constraints.is_empty() {
            return Err(ParseError::requirement(input));
        }

        Ok(Requirement { constraints })
    }

    /// Returns true when this is the unconstrained default, `>= 0`
    pub fn is_none(&self) -> bool {
        self.constraints == Requirement::default().constraints
    }

    /// Returns true when `version` meets every constraint
    pub fn satisfied_by(&self, version: &GemVersion) -> bool {
        self.constraints.iter().all(|(op, bound)| match op {
            Op::Eq => version == bound,
            Op::Ne => version != bound,
            Op::Gt => version > bound,
            Op::Lt => version < bound,
            Op::Ge => version >= bound,
            Op::Le => version <= bound,
            // ~> 1.2 means >= 1.2 and, ignoring any prerelease tail, < 2.0
            Op::Pessimistic => version >= bound && version.release() < bound.bump(),
        })
    }
}

impl Default for Requirement {
    fn default() -> Self {
        Requirement {
            constraints: vec![(Op::Ge, GemVersion::default())],
        }
    }
}

impl FromStr for Requirement {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Requirement::parse(s)
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered: Vec<String> = self
            .constraints
            .iter()
            .map(|(op, version)| format!("{} {}", op.as_str(), version))
            .collect();
        write!(f, "{}", rendered.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(s: &str) -> GemVersion {
        s.parse().expect("test version must parse")
    }

    fn r(s: &str) -> Requirement {
        s.parse().expect("test requirement must parse")
    }

    #[test]
    fn test_parse_operators() {
        assert!(r("= 1.0").satisfied_by(&v("1.0")));
        assert!(r("!= 1.0").satisfied_by(&v("1.1")));
        assert!(r("> 1.0").satisfied_by(&v("1.1")));
        assert!(r("< 1.0").satisfied_by(&v("0.9")));
        assert!(r(">= 1.0").satisfied_by(&v("1.0")));
        assert!(r("<= 1.0").satisfied_by(&v("1.0")));
    }

    #[test]
    fn test_parse_bare_version_means_exact() {
        let requirement = r("1.2.3");
        assert!(requirement.satisfied_by(&v("1.2.3")));
        assert!(!requirement.satisfied_by(&v("1.2.4")));
    }

    #[test]
    fn test_parse_without_space() {
        assert!(r(">=1.0").satisfied_by(&v("1.5")));
        assert!(r("~>2.1").satisfied_by(&v("2.3")));
    }

    #[test]
    fn test_parse_invalid() {
        assert!(">>> 1".parse::<Requirement>().is_err());
        assert!("".parse::<Requirement>().is_err());
        assert!(">= junk".parse::<Requirement>().is_err());
        assert!(">= 1.0,,< 2.0".parse::<Requirement>().is_err());
    }

    #[test]
    fn test_compound_requirement() {
        let requirement = r(">= 1.0, < 2.0");
        assert!(requirement.satisfied_by(&v("1.5")));
        assert!(!requirement.satisfied_by(&v("2.0")));
        assert!(!requirement.satisfied_by(&v("0.9")));
    }

    #[test]
    fn test_pessimistic() {
        let requirement = r("~> 1.2");
        assert!(requirement.satisfied_by(&v("1.2")));
        assert!(requirement.satisfied_by(&v("1.9")));
        assert!(!requirement.satisfied_by(&v("2.0")));
        assert!(!requirement.satisfied_by(&v("1.1")));

        let patch_level = r("~> 1.2.3");
        assert!(patch_level.satisfied_by(&v("1.2.4")));
        assert!(!patch_level.satisfied_by(&v("1.3.0")));
    }

    #[test]
    fn test_default_is_unconstrained() {
        let requirement = Requirement::default();
        assert!(requirement.is_none());
        assert!(requirement.satisfied_by(&v("0.0.1")));
        assert!(requirement.satisfied_by(&v("99.0")));
        assert!(requirement.satisfied_by(&v("1.0.0.a")));
    }

    #[test]
    fn test_is_none_only_for_default() {
        assert!(r(">= 0").is_none());
        assert!(!r(">= 0.1").is_none());
        assert!(!r("> 0").is_none());
        assert!(!r(">= 0, < 9").is_none());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", r(">= 1.0, < 2.0")), ">= 1.0, < 2.0");
        assert_eq!(format!("{}", r("1.2.3")), "= 1.2.3");
        assert_eq!(format!("{}", Requirement::default()), ">= 0");
    }

    #[test]
    fn test_display_round_trip() {
        let requirement = r("~> 3.1, != 3.1.4");
        let reparsed: Requirement = format!("{}", requirement).parse().unwrap();
        assert_eq!(reparsed, requirement);
    }
}
