//! Launcher Version
//!
//! Version descriptor of the build framework a launch targets, and the
//! capability quirks derived from it.
//!
//! # Core Concepts
//!
//! - [`GrailsVersion`]: Ordered release identifier, treated as opaque by the launcher
//! - [`Capability`]: Closed set of version-dependent behaviors
//! - [`GrailsVersionQuirks`]: Capabilities supported by one version
//!
//! # Example
//!
//! ```rust
//! use launcher_version::{Capability, GrailsVersion, GrailsVersionQuirks};
//!
//! let version: GrailsVersion = "1.3.7".parse().unwrap();
//! let quirks = GrailsVersionQuirks::new(&version);
//!
//! assert!(quirks.supports(Capability::ProvidedDependencies));
//! assert!(!quirks.supports(Capability::BuildDependencies));
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod quirks;
mod version;

pub use quirks::{Capability, GrailsVersionQuirks};
pub use version::{GrailsVersion, VersionError};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
