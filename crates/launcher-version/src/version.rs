//! Build framework version descriptor
//!
//! Provides [`GrailsVersion`], the comparable release identifier a launch
//! context is bound to for its whole lifetime.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Release identifier of the build framework loaded at runtime
///
/// Ordered by `(major, minor, patch)`; for equal numbers a tagged
/// pre-release (`2.0.0.RC1`) sorts before the plain release (`2.0.0`).
///
/// # Examples
/// - `2.1.0` → major 2, minor 1, patch 0
/// - `1.3.7-SNAPSHOT` → major 1, minor 3, patch 7, tag `SNAPSHOT`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct GrailsVersion {
    major: u32,
    minor: u32,
    patch: u32,
    tag: Option<String>,
}

impl GrailsVersion {
    /// Create a release version
    #[inline]
    #[must_use]
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
            tag: None,
        }
    }

    /// Attach a pre-release tag (`RC1`, `BUILD-SNAPSHOT`, ...)
    ///
    /// An empty tag leaves the version untagged.
    #[inline]
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        let tag = tag.into();
        self.tag = (!tag.is_empty()).then_some(tag);
        self
    }

    /// Major component
    #[inline]
    #[must_use]
    pub fn major(&self) -> u32 {
        self.major
    }

    /// Minor component
    #[inline]
    #[must_use]
    pub fn minor(&self) -> u32 {
        self.minor
    }

    /// Patch component
    #[inline]
    #[must_use]
    pub fn patch(&self) -> u32 {
        self.patch
    }

    /// Pre-release tag, if any
    #[inline]
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// Check whether this version is `major.minor` or later
    ///
    /// Pre-release tags are ignored: `2.0.0.RC1` counts as 2.0.
    #[inline]
    #[must_use]
    pub fn is_at_least(&self, major: u32, minor: u32) -> bool {
        (self.major, self.minor) >= (major, minor)
    }
}

impl Ord for GrailsVersion {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| match (&self.tag, &other.tag) {
                (None, None) => Ordering::Equal,
                (None, Some(_)) => Ordering::Greater,
                (Some(_), None) => Ordering::Less,
                (Some(a), Some(b)) => a.cmp(b),
            })
    }
}

impl PartialOrd for GrailsVersion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for GrailsVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(tag) = &self.tag {
            write!(f, ".{tag}")?;
        }
        Ok(())
    }
}

impl FromStr for GrailsVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(VersionError::Empty);
        }

        let mut numbers: Vec<u32> = Vec::with_capacity(3);
        let mut tag: Option<String> = None;
        let mut rest = Some(s);

        while let Some(current) = rest {
            if numbers.len() == 3 {
                tag = Some(current.to_string());
                break;
            }

            let (component, remainder) = match current.split_once('.') {
                Some((component, remainder)) => (component, Some(remainder)),
                None => (current, None),
            };
            let (digits, dashed) = match component.split_once('-') {
                Some((digits, _)) => (digits, true),
                None => (component, false),
            };

            if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                if numbers.len() < 2 {
                    return Err(VersionError::InvalidComponent(component.to_string()));
                }
                tag = Some(current.to_string());
                break;
            }

            let number = digits
                .parse()
                .map_err(|_| VersionError::InvalidComponent(component.to_string()))?;
            numbers.push(number);

            if dashed {
                // `1.3.7-SNAPSHOT`: everything after the dash is the tag
                tag = Some(current[digits.len() + 1..].to_string());
                break;
            }
            rest = remainder;
        }

        if numbers.len() < 2 {
            return Err(VersionError::MissingMinor(s.to_string()));
        }
        if tag.as_deref() == Some("") {
            return Err(VersionError::EmptyTag(s.to_string()));
        }

        Ok(Self {
            major: numbers[0],
            minor: numbers[1],
            patch: numbers.get(2).copied().unwrap_or(0),
            tag,
        })
    }
}

impl TryFrom<String> for GrailsVersion {
    type Error = VersionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GrailsVersion> for String {
    fn from(version: GrailsVersion) -> Self {
        version.to_string()
    }
}

/// Errors raised while reading a version string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VersionError {
    /// Blank input
    #[error("version string is empty")]
    Empty,

    /// A numeric component is not a number
    #[error("invalid version component: '{0}'")]
    InvalidComponent(String),

    /// Fewer than two numeric components
    #[error("version '{0}' needs at least MAJOR.MINOR")]
    MissingMinor(String),

    /// Trailing separator without a tag
    #[error("version '{0}' ends with an empty tag")]
    EmptyTag(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_release() {
        let v: GrailsVersion = "2.1.3".parse().unwrap();
        assert_eq!((v.major(), v.minor(), v.patch()), (2, 1, 3));
        assert_eq!(v.tag(), None);
    }

    #[test]
    fn parse_two_components_defaults_patch() {
        let v: GrailsVersion = "1.3".parse().unwrap();
        assert_eq!(v, GrailsVersion::new(1, 3, 0));
    }

    #[test]
    fn parse_dotted_tag() {
        let v: GrailsVersion = "2.0.0.BUILD-SNAPSHOT".parse().unwrap();
        assert_eq!(v.tag(), Some("BUILD-SNAPSHOT"));
        assert_eq!(v.patch(), 0);
    }

    #[test]
    fn parse_dashed_tag() {
        let v: GrailsVersion = "1.3.7-SNAPSHOT".parse().unwrap();
        assert_eq!(v, GrailsVersion::new(1, 3, 7).with_tag("SNAPSHOT"));
    }

    #[test]
    fn parse_tag_after_minor() {
        let v: GrailsVersion = "2.0.RC1".parse().unwrap();
        assert_eq!(v, GrailsVersion::new(2, 0, 0).with_tag("RC1"));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!("".parse::<GrailsVersion>(), Err(VersionError::Empty));
        assert!(matches!(
            "x.1".parse::<GrailsVersion>(),
            Err(VersionError::InvalidComponent(_))
        ));
        assert!(matches!(
            "2".parse::<GrailsVersion>(),
            Err(VersionError::MissingMinor(_))
        ));
        assert!(matches!(
            "2.0.".parse::<GrailsVersion>(),
            Err(VersionError::EmptyTag(_))
        ));
    }

    #[test]
    fn prerelease_sorts_before_release() {
        let rc = GrailsVersion::new(2, 0, 0).with_tag("RC1");
        let release = GrailsVersion::new(2, 0, 0);
        assert!(rc < release);
        assert!(GrailsVersion::new(1, 3, 7) < rc);
    }

    #[test]
    fn is_at_least_ignores_patch_and_tag() {
        let v = GrailsVersion::new(2, 0, 0).with_tag("M1");
        assert!(v.is_at_least(2, 0));
        assert!(v.is_at_least(1, 9));
        assert!(!v.is_at_least(2, 1));
    }

    #[test]
    fn empty_tag_is_ignored() {
        let v = GrailsVersion::new(2, 0, 0).with_tag("");
        assert_eq!(v, GrailsVersion::new(2, 0, 0));
        assert_eq!(v.to_string(), "2.0.0");
        assert_eq!(v.to_string().parse::<GrailsVersion>().unwrap(), v);
    }

    #[test]
    fn display_round_trips() {
        let v = GrailsVersion::new(2, 2, 1).with_tag("RC2");
        assert_eq!(v.to_string(), "2.2.1.RC2");
        assert_eq!(v.to_string().parse::<GrailsVersion>().unwrap(), v);
    }
}
