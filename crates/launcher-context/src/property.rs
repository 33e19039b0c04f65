//! Configuration properties held by the build settings object
//!
//! The set is closed: every directory is a [`DirProperty`] and every
//! dependency list a [`DependencyScope`]. Each variant knows the getter and
//! setter operation names the settings object exposes for it.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Directory-valued property
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirProperty {
    /// Framework installation
    GrailsHome,
    /// Global work area
    GrailsWorkDir,
    /// Per-project work area
    ProjectWorkDir,
    /// Compiled main classes
    ClassesDir,
    /// Compiled test classes
    TestClassesDir,
    /// Processed resources
    ResourcesDir,
    /// Test report output
    TestReportsDir,
    /// Plugins installed for the project
    ProjectPluginsDir,
    /// Plugins installed globally
    GlobalPluginsDir,
    /// Project root
    BaseDir,
}

impl DirProperty {
    /// Every directory property
    pub const ALL: [DirProperty; 10] = [
        Self::GrailsHome,
        Self::GrailsWorkDir,
        Self::ProjectWorkDir,
        Self::ClassesDir,
        Self::TestClassesDir,
        Self::ResourcesDir,
        Self::TestReportsDir,
        Self::ProjectPluginsDir,
        Self::GlobalPluginsDir,
        Self::BaseDir,
    ];

    /// Getter operation on the settings object
    #[must_use]
    pub fn getter(self) -> &'static str {
        match self {
            Self::GrailsHome => "getGrailsHome",
            Self::GrailsWorkDir => "getGrailsWorkDir",
            Self::ProjectWorkDir => "getProjectWorkDir",
            Self::ClassesDir => "getClassesDir",
            Self::TestClassesDir => "getTestClassesDir",
            Self::ResourcesDir => "getResourcesDir",
            Self::TestReportsDir => "getTestReportsDir",
            Self::ProjectPluginsDir => "getProjectPluginsDir",
            Self::GlobalPluginsDir => "getGlobalPluginsDir",
            Self::BaseDir => "getBaseDir",
        }
    }

    /// Setter operation on the settings object
    #[must_use]
    pub fn setter(self) -> &'static str {
        match self {
            Self::GrailsHome => "setGrailsHome",
            Self::GrailsWorkDir => "setGrailsWorkDir",
            Self::ProjectWorkDir => "setProjectWorkDir",
            Self::ClassesDir => "setClassesDir",
            Self::TestClassesDir => "setTestClassesDir",
            Self::ResourcesDir => "setResourcesDir",
            Self::TestReportsDir => "setTestReportsDir",
            Self::ProjectPluginsDir => "setProjectPluginsDir",
            Self::GlobalPluginsDir => "setGlobalPluginsDir",
            Self::BaseDir => "setBaseDir",
        }
    }

    /// Passed to the settings constructor rather than set afterwards
    #[inline]
    #[must_use]
    pub fn is_constructor_argument(self) -> bool {
        matches!(self, Self::GrailsHome | Self::BaseDir)
    }

    /// Kebab-case name, as used in serialized contexts
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::GrailsHome => "grails-home",
            Self::GrailsWorkDir => "grails-work-dir",
            Self::ProjectWorkDir => "project-work-dir",
            Self::ClassesDir => "classes-dir",
            Self::TestClassesDir => "test-classes-dir",
            Self::ResourcesDir => "resources-dir",
            Self::TestReportsDir => "test-reports-dir",
            Self::ProjectPluginsDir => "project-plugins-dir",
            Self::GlobalPluginsDir => "global-plugins-dir",
            Self::BaseDir => "base-dir",
        }
    }
}

impl Display for DirProperty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Dependency list scope
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DependencyScope {
    /// Compile classpath
    Compile,
    /// Test classpath
    Test,
    /// Supplied by the container at runtime
    Provided,
    /// Runtime classpath
    Runtime,
    /// Build system classpath
    Build,
}

impl DependencyScope {
    /// Every scope
    pub const ALL: [DependencyScope; 5] = [
        Self::Compile,
        Self::Test,
        Self::Provided,
        Self::Runtime,
        Self::Build,
    ];

    /// Getter operation on the settings object
    #[must_use]
    pub fn getter(self) -> &'static str {
        match self {
            Self::Compile => "getCompileDependencies",
            Self::Test => "getTestDependencies",
            Self::Provided => "getProvidedDependencies",
            Self::Runtime => "getRuntimeDependencies",
            Self::Build => "getBuildDependencies",
        }
    }

    /// Setter operation on the settings object
    #[must_use]
    pub fn setter(self) -> &'static str {
        match self {
            Self::Compile => "setCompileDependencies",
            Self::Test => "setTestDependencies",
            Self::Provided => "setProvidedDependencies",
            Self::Runtime => "setRuntimeDependencies",
            Self::Build => "setBuildDependencies",
        }
    }

    /// Kebab-case name, as used in serialized contexts
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Compile => "compile",
            Self::Test => "test",
            Self::Provided => "provided",
            Self::Runtime => "runtime",
            Self::Build => "build",
        }
    }
}

impl Display for DependencyScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
