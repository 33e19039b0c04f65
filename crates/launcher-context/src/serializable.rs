//! Plain, serializable launch context
//!
//! Provides [`SerializableLaunchContext`]: an in-memory [`LaunchContext`]
//! that a parent process fills in and writes out as JSON, and that the
//! launcher process reads back and hands to
//! [`DelegatingLaunchContext::copy_of`](crate::DelegatingLaunchContext::copy_of).

use crate::context::{existing_dependencies, LaunchContext};
use crate::error::LaunchError;
use crate::property::{DependencyScope, DirProperty};
use launcher_invoke::InvocationError;
use launcher_version::GrailsVersion;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Launch context holding every property in memory
///
/// Never fails: every accessor returns `Ok`. Unset properties read as
/// `None`; flags default to `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SerializableLaunchContext {
    grails_version: GrailsVersion,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    dirs: BTreeMap<DirProperty, PathBuf>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    dependencies: BTreeMap<DependencyScope, Vec<PathBuf>>,
    #[serde(default)]
    dependencies_externally_configured: bool,
    #[serde(default)]
    plain_output: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    script_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    env: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    args: Option<String>,
}

impl SerializableLaunchContext {
    /// Create an empty context for a version
    #[must_use]
    pub fn new(grails_version: GrailsVersion) -> Self {
        Self {
            grails_version,
            dirs: BTreeMap::new(),
            dependencies: BTreeMap::new(),
            dependencies_externally_configured: false,
            plain_output: false,
            script_name: None,
            env: None,
            args: None,
        }
    }

    /// Capture every property of another context
    ///
    /// Dependency scopes `source` does not have are left unset.
    ///
    /// # Errors
    /// `InvocationError` if reading `source` fails
    pub fn snapshot(source: &dyn LaunchContext) -> Result<Self, InvocationError> {
        let mut context = Self::new(source.grails_version().clone());

        for property in DirProperty::ALL {
            context.set_dir(property, source.dir(property)?)?;
        }
        for scope in DependencyScope::ALL {
            context.set_dependencies(scope, existing_dependencies(source, scope)?)?;
        }
        context.dependencies_externally_configured = source.dependencies_externally_configured()?;
        context.plain_output = source.plain_output();
        context.script_name = source.script_name().map(str::to_string);
        context.env = source.env().map(str::to_string);
        context.args = source.args().map(str::to_string);

        Ok(context)
    }

    /// With a directory set
    #[inline]
    #[must_use]
    pub fn with_dir(mut self, property: DirProperty, dir: impl Into<PathBuf>) -> Self {
        self.dirs.insert(property, dir.into());
        self
    }

    /// With a dependency list set
    #[inline]
    #[must_use]
    pub fn with_dependencies<P: Into<PathBuf>>(
        mut self,
        scope: DependencyScope,
        dependencies: impl IntoIterator<Item = P>,
    ) -> Self {
        self.dependencies
            .insert(scope, dependencies.into_iter().map(Into::into).collect());
        self
    }

    /// With a script name
    #[inline]
    #[must_use]
    pub fn with_script_name(mut self, script_name: impl Into<String>) -> Self {
        self.script_name = Some(script_name.into());
        self
    }

    /// With an argument string
    #[inline]
    #[must_use]
    pub fn with_args(mut self, args: impl Into<String>) -> Self {
        self.args = Some(args.into());
        self
    }

    /// With an environment
    #[inline]
    #[must_use]
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = Some(env.into());
        self
    }

    /// With plain console output
    #[inline]
    #[must_use]
    pub fn with_plain_output(mut self, plain: bool) -> Self {
        self.plain_output = plain;
        self
    }

    /// Encode as JSON
    ///
    /// # Errors
    /// `LaunchError::Serialization` if encoding fails
    pub fn to_json(&self) -> Result<String, LaunchError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode from JSON
    ///
    /// # Errors
    /// `LaunchError::Serialization` if the document is malformed
    pub fn from_json(json: &str) -> Result<Self, LaunchError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Write as JSON to a file
    ///
    /// # Errors
    /// - `LaunchError::Serialization` if encoding fails
    /// - `LaunchError::Io` if the file cannot be written
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<(), LaunchError> {
        let path = path.as_ref();
        let json = self.to_json()?;
        std::fs::write(path, json).map_err(|e| LaunchError::io_error(path, e))
    }

    /// Read from a JSON file
    ///
    /// # Errors
    /// - `LaunchError::Io` if the file cannot be read
    /// - `LaunchError::Serialization` if the document is malformed
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self, LaunchError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| LaunchError::io_error(path, e))?;
        Self::from_json(&json)
    }
}

impl LaunchContext for SerializableLaunchContext {
    fn grails_version(&self) -> &GrailsVersion {
        &self.grails_version
    }

    fn dir(&self, property: DirProperty) -> Result<Option<PathBuf>, InvocationError> {
        Ok(self.dirs.get(&property).cloned())
    }

    fn set_dir(
        &mut self,
        property: DirProperty,
        dir: Option<PathBuf>,
    ) -> Result<(), InvocationError> {
        match dir {
            Some(dir) => self.dirs.insert(property, dir),
            None => self.dirs.remove(&property),
        };
        Ok(())
    }

    fn dependencies(
        &self,
        scope: DependencyScope,
    ) -> Result<Option<Vec<PathBuf>>, InvocationError> {
        Ok(self.dependencies.get(&scope).cloned())
    }

    fn set_dependencies(
        &mut self,
        scope: DependencyScope,
        dependencies: Option<Vec<PathBuf>>,
    ) -> Result<(), InvocationError> {
        match dependencies {
            Some(dependencies) => self.dependencies.insert(scope, dependencies),
            None => self.dependencies.remove(&scope),
        };
        Ok(())
    }

    fn dependencies_externally_configured(&self) -> Result<bool, InvocationError> {
        Ok(self.dependencies_externally_configured)
    }

    fn set_dependencies_externally_configured(
        &mut self,
        configured: bool,
    ) -> Result<(), InvocationError> {
        self.dependencies_externally_configured = configured;
        Ok(())
    }

    fn script_name(&self) -> Option<&str> {
        self.script_name.as_deref()
    }

    fn set_script_name(&mut self, script_name: Option<String>) {
        self.script_name = script_name;
    }

    fn env(&self) -> Option<&str> {
        self.env.as_deref()
    }

    fn set_env(&mut self, env: Option<String>) {
        self.env = env;
    }

    fn args(&self) -> Option<&str> {
        self.args.as_deref()
    }

    fn set_args(&mut self, args: Option<String>) {
        self.args = args;
    }

    fn plain_output(&self) -> bool {
        self.plain_output
    }

    fn set_plain_output(&mut self, plain: bool) {
        self.plain_output = plain;
    }
}
