//! Launcher Context
//!
//! One stable configuration interface over a build settings object whose
//! shape depends on the framework version loaded at runtime.
//!
//! The central type is [`DelegatingLaunchContext`], which:
//! - Creates the settings object through the class-loading facility
//! - Delegates every settings property through the invocation layer
//! - Keeps properties the settings object lacks in local storage
//! - Copies another context across loaders, downgrading dependency scopes
//! - Launches a script through the framework's script runner
//!
//! # Example
//!
//! ```rust,ignore
//! use launcher_context::{DelegatingLaunchContext, LaunchContext, SerializableLaunchContext};
//!
//! let request = SerializableLaunchContext::read_from("launch.json")?;
//! let context = DelegatingLaunchContext::copy_of(loader, &request)?;
//!
//! let status = context.launch()?;
//! std::process::exit(status);
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

// Core modules
pub mod console;
pub mod context;
pub mod delegating;
pub mod error;
pub mod launch;
pub mod property;
pub mod serializable;
mod settings;

// Re-exports for convenience
pub use console::{console_ansi_enabled, set_console_ansi_enabled, CONSOLE_CLASS};
pub use context::LaunchContext;
pub use delegating::{BuildDependencyStore, DelegatingLaunchContext};
pub use error::LaunchError;
pub use launch::{is_interactive, SCRIPT_RUNNER_CLASS};
pub use property::{DependencyScope, DirProperty};
pub use serializable::SerializableLaunchContext;
pub use settings::SETTINGS_CLASS;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with launch contexts
    pub use crate::{
        DelegatingLaunchContext, DependencyScope, DirProperty, LaunchContext, LaunchError,
        SerializableLaunchContext,
    };
    pub use launcher_invoke::{ClassLoader, InvocationError, LoaderRef};
    pub use launcher_version::GrailsVersion;
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
