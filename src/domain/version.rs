//! Gem version numbers and their total order
//!
//! Gem versions are dotted sequences of numeric and alphabetic segments
//! (`1.2.3`, `2.0.0.rc1`, `1.0.a2`). Any alphabetic segment marks a
//! prerelease, and a prerelease sorts below the release it leads up to:
//! `1.0.0.a < 1.0.0`. Trailing zero segments are insignificant, so
//! `1.0 == 1.0.0`.

use crate::error::ParseError;
use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

/// Grammar for an acceptable version string
static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]+(\.[0-9a-zA-Z]+)*(-[0-9A-Za-z-]+(\.[0-9A-Za-z-]+)*)?$")
        .expect("version pattern must compile")
});

/// One canonical segment: a run of digits or a run of letters
static SEGMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+|[a-zA-Z]+").expect("segment pattern must compile"));

/// A canonical version segment.
///
/// Variant order matters: the derived `Ord` places alphabetic segments
/// below numeric ones, which is what makes `1.0.a < 1.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Segment {
    Alpha(String),
    Number(u64),
}

/// A parsed gem version
#[derive(Debug, Clone)]
pub struct GemVersion {
    /// Original string representation, kept for display and serialization
    original: String,
    /// Canonical segments used for comparison
    segments: Vec<Segment>,
}

impl GemVersion {
    /// Returns the original version string
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Returns true if any segment is alphabetic
    pub fn is_prerelease(&self) -> bool {
        self.segments
            .iter()
            .any(|segment| matches!(segment, Segment::Alpha(_)))
    }

    /// Returns the release for this version: the numeric prefix with the
    /// prerelease tail stripped (`1.2.0.a1` becomes `1.2.0`)
    pub fn release(&self) -> GemVersion {
        if !self.is_prerelease() {
            return self.clone();
        }
        Self::from_numeric(&self.numeric_prefix())
    }

    /// Returns the next version boundary used by pessimistic requirements:
    /// drop the last numeric segment (when more than one remains) and
    /// increment the new last one, so `1.2.3` bumps to `1.3` and `1.2` to `2.0`
    pub fn bump(&self) -> GemVersion {
        let mut numbers = self.numeric_prefix();
        if numbers.is_empty() {
            numbers.push(0);
        }
        if numbers.len() > 1 {
            numbers.pop();
        }
        if let Some(last) = numbers.last_mut() {
            *last += 1;
        }
        Self::from_numeric(&numbers)
    }

    /// Numeric segments up to the first alphabetic one
    fn numeric_prefix(&self) -> Vec<u64> {
        self.segments
            .iter()
            .map_while(|segment| match segment {
                Segment::Number(n) => Some(*n),
                Segment::Alpha(_) => None,
            })
            .collect()
    }

    fn from_numeric(numbers: &[u64]) -> GemVersion {
        let numbers = if numbers.is_empty() { &[0][..] } else { numbers };
        let original = numbers
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(".");
        GemVersion {
            original,
            segments: numbers.iter().map(|n| Segment::Number(*n)).collect(),
        }
    }
}

impl FromStr for GemVersion {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        // An empty version reads as "0", matching the versioning scheme
        let text = if trimmed.is_empty() { "0" } else { trimmed };

        if !VERSION_PATTERN.is_match(text) {
            return Err(ParseError::version(s));
        }

        // A hyphen introduces a prerelease tail: "1.0-rc1" reads as "1.0.pre.rc1"
        let canonical = text.replace('-', ".pre.");

        let mut segments = Vec::new();
        for token in SEGMENT.find_iter(&canonical) {
            let token = token.as_str();
            if token.chars().all(|c| c.is_ascii_digit()) {
                let number = token.parse().map_err(|_| ParseError::version(s))?;
                segments.push(Segment::Number(number));
            } else {
                segments.push(Segment::Alpha(token.to_string()));
            }
        }

        Ok(GemVersion {
            original: text.to_string(),
            segments,
        })
    }
}

impl Default for GemVersion {
    fn default() -> Self {
        Self::from_numeric(&[0])
    }
}

impl Ord for GemVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        let zero = Segment::Number(0);

        for i in 0..len {
            // Missing segments compare as zero, so 1.0 == 1.0.0 and 1.0.a < 1.0
            let lhs = self.segments.get(i).unwrap_or(&zero);
            let rhs = other.segments.get(i).unwrap_or(&zero);
            match lhs.cmp(rhs) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }

        Ordering::Equal
    }
}

impl PartialOrd for GemVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for GemVersion {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for GemVersion {}

impl fmt::Display for GemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl Serialize for GemVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.original)
    }
}

struct GemVersionVisitor;

impl Visitor<'_> for GemVersionVisitor {
    type Value = GemVersion;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a gem version string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(de::Error::custom)
    }

    // Unquoted YAML scalars like `version: 2` arrive as numbers
    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        value.to_string().parse().map_err(de::Error::custom)
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<Self::Value, E> {
        value.to_string().parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for GemVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Self-describing formats may hand over a bare number; binary
        // formats cannot answer deserialize_any and always store a string
        if deserializer.is_human_readable() {
            deserializer.deserialize_any(GemVersionVisitor)
        } else {
            deserializer.deserialize_str(GemVersionVisitor)
        }
    }
}
