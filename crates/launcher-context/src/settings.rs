//! Typed facade over the opaque build settings object
//!
//! One method per operation the launcher needs; each is a single delegated
//! call through [`invoke_or_wrap`].

use crate::error::LaunchError;
use crate::property::{DependencyScope, DirProperty};
use launcher_invoke::{
    instantiate, invoke, invoke_or_wrap, CallError, InvocationError, LoaderRef, ObjectRef,
    ParamType, Target, Value,
};
use std::path::PathBuf;

/// Class holding the framework's build configuration
pub const SETTINGS_CLASS: &str = "grails.util.BuildSettings";

/// The settings object of one launch context
#[derive(Debug, Clone)]
pub(crate) struct BuildSettings {
    object: ObjectRef,
}

impl BuildSettings {
    /// Load, instantiate and bind the settings object
    ///
    /// Any failure aborts construction; no partially initialised settings
    /// object escapes.
    pub(crate) fn create(
        loader: &LoaderRef,
        grails_home: Option<PathBuf>,
        base_dir: Option<PathBuf>,
    ) -> Result<Self, LaunchError> {
        let class = loader
            .load_class(SETTINGS_CLASS)
            .map_err(|e| construction("loadClass", e))?;

        let object = instantiate(
            &class,
            &[ParamType::Path, ParamType::Path],
            vec![grails_home.into(), base_dir.into()],
        )
        .map_err(|e| construction("<init>", e))?;

        // The settings object resolves framework classes through the same loader
        invoke(
            &object,
            "setRootLoader",
            &[ParamType::Loader],
            vec![Value::Loader(loader.clone())],
        )
        .map_err(|e| construction("setRootLoader", e))?;

        Ok(Self { object })
    }

    /// Handle passed on to the script runner
    #[inline]
    pub(crate) fn object(&self) -> &ObjectRef {
        &self.object
    }

    pub(crate) fn dir(&self, property: DirProperty) -> Result<Option<PathBuf>, InvocationError> {
        self.get(property.getter(), Value::into_path)
    }

    pub(crate) fn set_dir(
        &self,
        property: DirProperty,
        dir: Option<PathBuf>,
    ) -> Result<(), InvocationError> {
        self.set(property.setter(), ParamType::Path, dir.into())
    }

    pub(crate) fn dependencies(
        &self,
        scope: DependencyScope,
    ) -> Result<Option<Vec<PathBuf>>, InvocationError> {
        self.get(scope.getter(), Value::into_path_list)
    }

    pub(crate) fn set_dependencies(
        &self,
        scope: DependencyScope,
        dependencies: Option<Vec<PathBuf>>,
    ) -> Result<(), InvocationError> {
        self.set(scope.setter(), ParamType::List, dependencies.into())
    }

    pub(crate) fn dependencies_externally_configured(&self) -> Result<bool, InvocationError> {
        self.get("isDependenciesExternallyConfigured", Value::into_bool)
    }

    pub(crate) fn set_dependencies_externally_configured(
        &self,
        configured: bool,
    ) -> Result<(), InvocationError> {
        self.set(
            "setDependenciesExternallyConfigured",
            ParamType::Bool,
            configured.into(),
        )
    }

    fn get<T>(
        &self,
        operation: &str,
        extract: impl FnOnce(Value) -> Result<T, CallError>,
    ) -> Result<T, InvocationError> {
        let value = invoke_or_wrap(&self.object, operation, &[], vec![])?;
        extract(value).map_err(|source| {
            InvocationError::new(Target::from(&self.object).describe(), operation, source)
        })
    }

    fn set(&self, operation: &str, param: ParamType, value: Value) -> Result<(), InvocationError> {
        invoke_or_wrap(&self.object, operation, &[param], vec![value]).map(drop)
    }
}

fn construction(operation: &str, source: CallError) -> LaunchError {
    LaunchError::Construction(InvocationError::new(SETTINGS_CLASS, operation, source))
}
