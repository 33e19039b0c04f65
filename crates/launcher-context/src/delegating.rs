//! Launch context backed by the framework's own settings object
//!
//! Provides [`DelegatingLaunchContext`]. Every delegated property is a single
//! call on the settings object; quirks decide where the version-dependent
//! properties live.

use crate::console::{console_ansi_enabled, set_console_ansi_enabled};
use crate::context::{existing_dependencies, LaunchContext};
use crate::error::LaunchError;
use crate::property::{DependencyScope, DirProperty};
use crate::settings::BuildSettings;
use launcher_invoke::{InvocationError, LoaderRef};
use launcher_version::{GrailsVersion, GrailsVersionQuirks};
use std::path::PathBuf;

/// Where build dependencies are stored for this context
///
/// Chosen once from the quirks; the two stores are never both authoritative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildDependencyStore {
    /// The settings object holds them
    Delegated,
    /// The settings object has no such property; the context keeps them
    Local(Option<Vec<PathBuf>>),
}

impl BuildDependencyStore {
    /// Pick the store for a version's quirks
    #[must_use]
    pub fn for_quirks(quirks: &GrailsVersionQuirks) -> Self {
        if quirks.supports_build_dependencies() {
            Self::Delegated
        } else {
            Self::Local(None)
        }
    }

    /// Check for [`BuildDependencyStore::Delegated`]
    #[inline]
    #[must_use]
    pub fn is_delegated(&self) -> bool {
        matches!(self, Self::Delegated)
    }
}

/// Launch context delegating to a runtime-loaded settings object
///
/// # Lifecycle
/// Construction is all-or-nothing: either the settings object exists and is
/// bound to the loader, or no context is returned. After that the context
/// accepts any sequence of reads, writes and launches.
///
/// # Concurrency
/// Not meant for concurrent use; one owner drives it sequentially.
#[derive(Debug)]
pub struct DelegatingLaunchContext {
    pub(crate) loader: LoaderRef,
    pub(crate) settings: BuildSettings,
    version: GrailsVersion,
    quirks: GrailsVersionQuirks,
    script_name: Option<String>,
    env: Option<String>,
    args: Option<String>,
    build_dependencies: BuildDependencyStore,
}

impl DelegatingLaunchContext {
    /// Create a context and its settings object
    ///
    /// # Errors
    /// `LaunchError::Construction` if the settings class cannot be loaded,
    /// instantiated with `(grails_home, base_dir)` or bound to `loader`
    pub fn new(
        version: GrailsVersion,
        loader: LoaderRef,
        grails_home: Option<PathBuf>,
        base_dir: Option<PathBuf>,
    ) -> Result<Self, LaunchError> {
        let quirks = GrailsVersionQuirks::new(&version);
        let settings = BuildSettings::create(&loader, grails_home, base_dir)?;
        let build_dependencies = BuildDependencyStore::for_quirks(&quirks);

        tracing::debug!(
            %version,
            capabilities = ?quirks.iter().collect::<Vec<_>>(),
            "created launch context"
        );

        Ok(Self {
            loader,
            settings,
            version,
            quirks,
            script_name: None,
            env: None,
            args: None,
            build_dependencies,
        })
    }

    /// Build a context on `loader` holding everything set on `source`
    ///
    /// Properties unset on `source` keep the new settings object's own
    /// defaults. If the target version has no "provided" scope, provided
    /// dependencies are prepended to the compile list instead. Scopes
    /// `source` does not have, such as "provided" on a context of a version
    /// before 1.2, count as unset.
    ///
    /// # Errors
    /// - `LaunchError::Construction` as for [`DelegatingLaunchContext::new`]
    /// - `LaunchError::Invocation` if reading `source` or writing the copy fails
    pub fn copy_of(loader: LoaderRef, source: &dyn LaunchContext) -> Result<Self, LaunchError> {
        let mut context = Self::new(
            source.grails_version().clone(),
            loader,
            source.grails_home()?,
            source.base_dir()?,
        )?;

        context.set_dependencies_externally_configured(source.dependencies_externally_configured()?)?;
        context.set_plain_output(source.plain_output());

        if let Some(script_name) = source.script_name() {
            context.set_script_name(Some(script_name.to_string()));
        }
        if let Some(args) = source.args() {
            context.set_args(Some(args.to_string()));
        }
        if let Some(env) = source.env() {
            context.set_env(Some(env.to_string()));
        }

        if let Some(build) = existing_dependencies(source, DependencyScope::Build)? {
            context.set_dependencies(DependencyScope::Build, Some(build))?;
        }

        if context.quirks.supports_provided_dependencies() {
            for scope in [DependencyScope::Provided, DependencyScope::Compile] {
                if let Some(dependencies) = existing_dependencies(source, scope)? {
                    context.set_dependencies(scope, Some(dependencies))?;
                }
            }
        } else {
            let merged = merge_provided_into_compile(
                existing_dependencies(source, DependencyScope::Provided)?,
                existing_dependencies(source, DependencyScope::Compile)?,
            );
            if let Some(merged) = merged {
                context.set_dependencies(DependencyScope::Compile, Some(merged))?;
            }
        }

        for scope in [DependencyScope::Runtime, DependencyScope::Test] {
            if let Some(dependencies) = existing_dependencies(source, scope)? {
                context.set_dependencies(scope, Some(dependencies))?;
            }
        }

        for property in DirProperty::ALL {
            if property.is_constructor_argument() {
                continue;
            }
            if let Some(dir) = source.dir(property)? {
                context.set_dir(property, Some(dir))?;
            }
        }

        Ok(context)
    }

    /// Capability quirks of this context's version
    #[inline]
    #[must_use]
    pub fn quirks(&self) -> &GrailsVersionQuirks {
        &self.quirks
    }

    /// Where build dependencies are stored
    #[inline]
    #[must_use]
    pub fn build_dependency_store(&self) -> &BuildDependencyStore {
        &self.build_dependencies
    }

    /// Class-loading facility the settings object is bound to
    #[inline]
    #[must_use]
    pub fn loader(&self) -> &LoaderRef {
        &self.loader
    }
}

/// Provided first, then compile; `None` only if both are unset
fn merge_provided_into_compile(
    provided: Option<Vec<PathBuf>>,
    compile: Option<Vec<PathBuf>>,
) -> Option<Vec<PathBuf>> {
    if provided.is_none() && compile.is_none() {
        return None;
    }
    Some(provided.into_iter().chain(compile).flatten().collect())
}

impl LaunchContext for DelegatingLaunchContext {
    fn grails_version(&self) -> &GrailsVersion {
        &self.version
    }

    fn dir(&self, property: DirProperty) -> Result<Option<PathBuf>, InvocationError> {
        self.settings.dir(property)
    }

    fn set_dir(
        &mut self,
        property: DirProperty,
        dir: Option<PathBuf>,
    ) -> Result<(), InvocationError> {
        self.settings.set_dir(property, dir)
    }

    fn dependencies(
        &self,
        scope: DependencyScope,
    ) -> Result<Option<Vec<PathBuf>>, InvocationError> {
        match (scope, &self.build_dependencies) {
            (DependencyScope::Build, BuildDependencyStore::Local(dependencies)) => {
                Ok(dependencies.clone())
            }
            _ => self.settings.dependencies(scope),
        }
    }

    fn has_dependency_scope(&self, scope: DependencyScope) -> bool {
        scope != DependencyScope::Provided || self.quirks.supports_provided_dependencies()
    }

    fn set_dependencies(
        &mut self,
        scope: DependencyScope,
        dependencies: Option<Vec<PathBuf>>,
    ) -> Result<(), InvocationError> {
        match (scope, &mut self.build_dependencies) {
            (DependencyScope::Build, BuildDependencyStore::Local(stored)) => {
                tracing::debug!(version = %self.version, "keeping build dependencies locally");
                *stored = dependencies;
                Ok(())
            }
            _ => self.settings.set_dependencies(scope, dependencies),
        }
    }

    fn dependencies_externally_configured(&self) -> Result<bool, InvocationError> {
        self.settings.dependencies_externally_configured()
    }

    fn set_dependencies_externally_configured(
        &mut self,
        configured: bool,
    ) -> Result<(), InvocationError> {
        self.settings.set_dependencies_externally_configured(configured)
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
        console_ansi_enabled(&self.loader).map_or(true, |ansi| !ansi)
    }

    fn set_plain_output(&mut self, plain: bool) {
        // Frameworks without a console have nothing to switch
        let _applied = set_console_ansi_enabled(&self.loader, !plain);
    }
}
