//! Per-version capability quirks
//!
//! Provides [`GrailsVersionQuirks`], the closed set of [`Capability`] flags a
//! version of the build framework supports. Every version-conditional branch
//! in the launcher is keyed by one of these capabilities.

use crate::GrailsVersion;
use std::collections::BTreeSet;
use std::fmt::{self, Display, Formatter};

/// A behavior that differs between versions of the build settings schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Capability {
    /// Settings expose a distinct "provided" dependency list
    ProvidedDependencies,

    /// Settings expose a "build" dependency list
    BuildDependencies,
}

impl Capability {
    /// Every known capability
    pub const ALL: [Capability; 2] = [Self::ProvidedDependencies, Self::BuildDependencies];

    /// First `(major, minor)` release that has this capability
    #[inline]
    #[must_use]
    pub fn since(self) -> (u32, u32) {
        match self {
            Self::ProvidedDependencies => (1, 2),
            Self::BuildDependencies => (2, 0),
        }
    }

    /// Stable flag name
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::ProvidedDependencies => "supports-provided-dependencies",
            Self::BuildDependencies => "supports-build-dependencies",
        }
    }
}

impl Display for Capability {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Capabilities supported by one version
///
/// A pure function of the version, computed once. Versions newer than every
/// known boundary support every capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrailsVersionQuirks {
    supported: BTreeSet<Capability>,
}

impl GrailsVersionQuirks {
    /// Derive quirks for a version
    #[must_use]
    pub fn new(version: &GrailsVersion) -> Self {
        let supported = Capability::ALL
            .into_iter()
            .filter(|capability| {
                let (major, minor) = capability.since();
                version.is_at_least(major, minor)
            })
            .collect();
        Self { supported }
    }

    /// Check a single capability
    #[inline]
    #[must_use]
    pub fn supports(&self, capability: Capability) -> bool {
        self.supported.contains(&capability)
    }

    /// Settings know a separate "provided" scope
    #[inline]
    #[must_use]
    pub fn supports_provided_dependencies(&self) -> bool {
        self.supports(Capability::ProvidedDependencies)
    }

    /// Settings can store build dependencies
    #[inline]
    #[must_use]
    pub fn supports_build_dependencies(&self) -> bool {
        self.supports(Capability::BuildDependencies)
    }

    /// Supported capabilities in declaration order
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        self.supported.iter().copied()
    }
}

impl From<&GrailsVersion> for GrailsVersionQuirks {
    fn from(version: &GrailsVersion) -> Self {
        Self::new(version)
    }
}
