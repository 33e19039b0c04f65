//! The launch context contract
//!
//! [`LaunchContext`] is the stable, strongly-typed configuration surface
//! callers program against, whatever framework version sits behind it.

use crate::property::{DependencyScope, DirProperty};
use launcher_invoke::InvocationError;
use launcher_version::GrailsVersion;
use std::path::PathBuf;

/// Configuration of one launch attempt
///
/// Reading a property that was never written yields the backing store's own
/// default, which may be `None`. Implementations never invent defaults.
pub trait LaunchContext {
    /// Framework version this context targets
    fn grails_version(&self) -> &GrailsVersion;

    /// Read a directory property
    ///
    /// # Errors
    /// `InvocationError` if the backing settings object rejects the read
    fn dir(&self, property: DirProperty) -> Result<Option<PathBuf>, InvocationError>;

    /// Write a directory property
    ///
    /// # Errors
    /// `InvocationError` if the backing settings object rejects the write
    fn set_dir(&mut self, property: DirProperty, dir: Option<PathBuf>)
        -> Result<(), InvocationError>;

    /// Read a dependency list
    ///
    /// # Errors
    /// `InvocationError` if the backing settings object rejects the read
    fn dependencies(&self, scope: DependencyScope)
        -> Result<Option<Vec<PathBuf>>, InvocationError>;

    /// Whether this context has a dependency list for `scope` at all
    ///
    /// Contexts whose backing object lacks a scope answer `false`; reading
    /// such a scope fails instead of yielding `None`.
    fn has_dependency_scope(&self, _scope: DependencyScope) -> bool {
        true
    }

    /// Write a dependency list
    ///
    /// # Errors
    /// `InvocationError` if the backing settings object rejects the write
    fn set_dependencies(
        &mut self,
        scope: DependencyScope,
        dependencies: Option<Vec<PathBuf>>,
    ) -> Result<(), InvocationError>;

    /// Whether dependency resolution happens outside the framework
    ///
    /// # Errors
    /// `InvocationError` if the backing settings object rejects the read
    fn dependencies_externally_configured(&self) -> Result<bool, InvocationError>;

    /// Set whether dependency resolution happens outside the framework
    ///
    /// # Errors
    /// `InvocationError` if the backing settings object rejects the write
    fn set_dependencies_externally_configured(
        &mut self,
        configured: bool,
    ) -> Result<(), InvocationError>;

    /// Script to run
    fn script_name(&self) -> Option<&str>;

    /// Set the script to run
    fn set_script_name(&mut self, script_name: Option<String>);

    /// Environment to run in
    fn env(&self) -> Option<&str>;

    /// Set the environment to run in
    fn set_env(&mut self, env: Option<String>);

    /// Raw argument string passed to the script
    fn args(&self) -> Option<&str>;

    /// Set the raw argument string
    fn set_args(&mut self, args: Option<String>);

    /// Whether console output is plain (no ANSI colors)
    fn plain_output(&self) -> bool;

    /// Switch console output between plain and colored
    fn set_plain_output(&mut self, plain: bool);

    /// Shorthand for [`DirProperty::GrailsHome`]
    ///
    /// # Errors
    /// See [`LaunchContext::dir`]
    fn grails_home(&self) -> Result<Option<PathBuf>, InvocationError> {
        self.dir(DirProperty::GrailsHome)
    }

    /// Shorthand for [`DirProperty::BaseDir`]
    ///
    /// # Errors
    /// See [`LaunchContext::dir`]
    fn base_dir(&self) -> Result<Option<PathBuf>, InvocationError> {
        self.dir(DirProperty::BaseDir)
    }
}

/// Read a dependency list, treating a scope the context lacks as unset
pub(crate) fn existing_dependencies(
    context: &dyn LaunchContext,
    scope: DependencyScope,
) -> Result<Option<Vec<PathBuf>>, InvocationError> {
    if context.has_dependency_scope(scope) {
        context.dependencies(scope)
    } else {
        Ok(None)
    }
}
