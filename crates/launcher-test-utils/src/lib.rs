//! Testing utilities for the launcher workspace
//!
//! An in-memory build framework: settings class, console singleton and
//! script runner, registered in a [`ClassRegistry`] and recording what the
//! launcher asks of them.

#![allow(missing_docs)]

use launcher_invoke::{
    object_ref, CallError, ClassRegistry, DynamicClass, DynamicObject, LoaderRef,
    ObjectRef, ParamType, Value,
};
use launcher_version::{GrailsVersion, GrailsVersionQuirks};
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::Arc;

pub const SETTINGS_CLASS: &str = "grails.util.BuildSettings";
pub const CONSOLE_CLASS: &str = "grails.build.logging.GrailsConsole";
pub const SCRIPT_RUNNER_CLASS: &str = "org.codehaus.groovy.grails.cli.GrailsScriptRunner";

const DIRS: [&str; 10] = [
    "GrailsHome",
    "GrailsWorkDir",
    "ProjectWorkDir",
    "ClassesDir",
    "TestClassesDir",
    "ResourcesDir",
    "TestReportsDir",
    "ProjectPluginsDir",
    "GlobalPluginsDir",
    "BaseDir",
];

/// Install a test subscriber honouring `RUST_LOG`
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Shared record of operation names, in call order
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<String>>>);

impl CallLog {
    pub fn record(&self, operation: &str) {
        self.0.lock().push(operation.to_string());
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().clone()
    }

    pub fn count(&self, operation: &str) -> usize {
        self.0.lock().iter().filter(|op| *op == operation).count()
    }

    pub fn contains(&self, operation: &str) -> bool {
        self.count(operation) > 0
    }

    /// Any recorded operation containing `fragment`
    pub fn mentions(&self, fragment: &str) -> bool {
        self.0.lock().iter().any(|op| op.contains(fragment))
    }

    pub fn clear(&self) {
        self.0.lock().clear();
    }
}

/// Which dependency lists a settings object exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsSchema {
    /// Compile, test and runtime only
    Legacy,
    /// Adds provided
    WithoutBuildDependencies,
    /// Adds build
    Current,
}

impl SettingsSchema {
    pub fn for_version(version: &GrailsVersion) -> Self {
        let quirks = GrailsVersionQuirks::new(version);
        match (
            quirks.supports_provided_dependencies(),
            quirks.supports_build_dependencies(),
        ) {
            (_, true) => Self::Current,
            (true, false) => Self::WithoutBuildDependencies,
            (false, false) => Self::Legacy,
        }
    }

    fn has_list(self, scope: &str) -> bool {
        match scope {
            "Compile" | "Test" | "Runtime" => true,
            "Provided" => self != Self::Legacy,
            "Build" => self == Self::Current,
            _ => false,
        }
    }
}

/// In-memory settings object
#[derive(Debug)]
pub struct FakeBuildSettings {
    schema: SettingsSchema,
    dirs: HashMap<String, PathBuf>,
    lists: HashMap<String, Vec<PathBuf>>,
    externally_configured: bool,
    root_loader: Option<LoaderRef>,
    failing: Arc<HashSet<String>>,
    log: CallLog,
}

impl DynamicObject for FakeBuildSettings {
    fn class_name(&self) -> String {
        SETTINGS_CLASS.to_string()
    }

    fn call(
        &mut self,
        operation: &str,
        params: &[ParamType],
        mut args: Vec<Value>,
    ) -> Result<Value, CallError> {
        self.log.record(operation);
        if self.failing.contains(operation) {
            return Err(CallError::target_failure(
                SETTINGS_CLASS,
                operation,
                "simulated settings failure",
            ));
        }

        match (operation, params) {
            ("setRootLoader", [ParamType::Loader]) => {
                if let Value::Loader(loader) = args.remove(0) {
                    self.root_loader = Some(loader);
                }
                Ok(Value::Null)
            }
            ("isDependenciesExternallyConfigured", []) => Ok(self.externally_configured.into()),
            ("setDependenciesExternallyConfigured", [ParamType::Bool]) => {
                self.externally_configured = args.remove(0).into_bool()?;
                Ok(Value::Null)
            }
            _ => self.property(operation, params, args),
        }
    }
}

impl FakeBuildSettings {
    fn property(
        &mut self,
        operation: &str,
        params: &[ParamType],
        mut args: Vec<Value>,
    ) -> Result<Value, CallError> {
        let missing = || CallError::no_such_operation(SETTINGS_CLASS, operation, params);

        if let Some(name) = operation.strip_prefix("get") {
            if !params.is_empty() {
                return Err(missing());
            }
            if let Some(scope) = name.strip_suffix("Dependencies") {
                return if self.schema.has_list(scope) {
                    Ok(self.lists.get(scope).cloned().into())
                } else {
                    Err(missing())
                };
            }
            if DIRS.contains(&name) {
                return Ok(self.dirs.get(name).cloned().into());
            }
        } else if let Some(name) = operation.strip_prefix("set") {
            if let Some(scope) = name.strip_suffix("Dependencies") {
                if !self.schema.has_list(scope) || !matches!(params, [ParamType::List]) {
                    return Err(missing());
                }
                match args.remove(0).into_path_list()? {
                    Some(list) => self.lists.insert(scope.to_string(), list),
                    None => self.lists.remove(scope),
                };
                return Ok(Value::Null);
            }
            if DIRS.contains(&name) && matches!(params, [ParamType::Path]) {
                match args.remove(0).into_path()? {
                    Some(dir) => self.dirs.insert(name.to_string(), dir),
                    None => self.dirs.remove(name),
                };
                return Ok(Value::Null);
            }
        }
        Err(missing())
    }
}

#[derive(Debug)]
struct FakeBuildSettingsClass {
    schema: SettingsSchema,
    defaults: HashMap<String, PathBuf>,
    failing: Arc<HashSet<String>>,
    log: CallLog,
    instances: Arc<Mutex<usize>>,
}

impl DynamicClass for FakeBuildSettingsClass {
    fn name(&self) -> &str {
        SETTINGS_CLASS
    }

    fn construct(&self, params: &[ParamType], args: Vec<Value>) -> Result<ObjectRef, CallError> {
        self.log.record("<init>");
        if !matches!(params, [ParamType::Path, ParamType::Path]) {
            return Err(CallError::no_such_operation(SETTINGS_CLASS, "<init>", params));
        }
        if self.failing.contains("<init>") {
            return Err(CallError::target_failure(
                SETTINGS_CLASS,
                "<init>",
                "simulated constructor failure",
            ));
        }

        let mut dirs = self.defaults.clone();
        let mut args = args.into_iter();
        for name in ["GrailsHome", "BaseDir"] {
            if let Some(dir) = args.next().unwrap_or(Value::Null).into_path()? {
                dirs.insert(name.to_string(), dir);
            }
        }

        *self.instances.lock() += 1;
        Ok(object_ref(FakeBuildSettings {
            schema: self.schema,
            dirs,
            lists: HashMap::new(),
            externally_configured: false,
            root_loader: None,
            failing: Arc::clone(&self.failing),
            log: self.log.clone(),
        }))
    }
}

/// Settings class handing out one prepared object, e.g. a mock
#[derive(Debug)]
pub struct FixedSettingsClass {
    object: ObjectRef,
}

impl FixedSettingsClass {
    pub fn new(object: ObjectRef) -> Self {
        Self { object }
    }

    /// Loader resolving only this class
    pub fn into_loader(self) -> LoaderRef {
        Arc::new(ClassRegistry::new().with_class(self))
    }
}

impl DynamicClass for FixedSettingsClass {
    fn name(&self) -> &str {
        SETTINGS_CLASS
    }

    fn construct(&self, _params: &[ParamType], _args: Vec<Value>) -> Result<ObjectRef, CallError> {
        Ok(Arc::clone(&self.object))
    }
}

#[derive(Debug)]
struct FakeConsole {
    ansi_enabled: Arc<Mutex<bool>>,
    log: CallLog,
}

impl DynamicObject for FakeConsole {
    fn class_name(&self) -> String {
        CONSOLE_CLASS.to_string()
    }

    fn call(
        &mut self,
        operation: &str,
        params: &[ParamType],
        mut args: Vec<Value>,
    ) -> Result<Value, CallError> {
        self.log.record(operation);
        match (operation, params) {
            ("isAnsiEnabled", []) => Ok((*self.ansi_enabled.lock()).into()),
            ("setAnsiEnabled", [ParamType::Bool]) => {
                *self.ansi_enabled.lock() = args.remove(0).into_bool()?;
                Ok(Value::Null)
            }
            _ => Err(CallError::no_such_operation(CONSOLE_CLASS, operation, params)),
        }
    }
}

#[derive(Debug)]
struct FakeConsoleClass {
    instance: ObjectRef,
}

impl DynamicClass for FakeConsoleClass {
    fn name(&self) -> &str {
        CONSOLE_CLASS
    }

    fn call_static(
        &self,
        operation: &str,
        params: &[ParamType],
        _args: Vec<Value>,
    ) -> Result<Value, CallError> {
        match (operation, params) {
            ("getInstance", []) => Ok(Value::Object(Arc::clone(&self.instance))),
            _ => Err(CallError::no_such_operation(CONSOLE_CLASS, operation, params)),
        }
    }
}

/// One `executeCommand` call seen by the fake runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutedCommand {
    pub script_name: Option<String>,
    pub args: Option<String>,
    pub env: Option<String>,
    pub arity: usize,
    pub interactive: Option<bool>,
    pub settings_class: String,
}

#[derive(Debug)]
struct FakeScriptRunner {
    settings: ObjectRef,
    interactive: Option<bool>,
    exit_code: i32,
    executions: Arc<Mutex<Vec<ExecutedCommand>>>,
}

impl DynamicObject for FakeScriptRunner {
    fn class_name(&self) -> String {
        SCRIPT_RUNNER_CLASS.to_string()
    }

    fn call(
        &mut self,
        operation: &str,
        params: &[ParamType],
        mut args: Vec<Value>,
    ) -> Result<Value, CallError> {
        match (operation, params) {
            ("setInteractive", [ParamType::Bool]) => {
                self.interactive = Some(args.remove(0).into_bool()?);
                Ok(Value::Null)
            }
            ("executeCommand", [ParamType::Str, ParamType::Str])
            | ("executeCommand", [ParamType::Str, ParamType::Str, ParamType::Str]) => {
                let arity = args.len();
                let mut args = args.into_iter();
                let mut next = || args.next().unwrap_or(Value::Null).into_string();
                let command = ExecutedCommand {
                    script_name: next()?,
                    args: next()?,
                    env: next()?,
                    arity,
                    interactive: self.interactive,
                    settings_class: self.settings.lock().class_name(),
                };
                self.executions.lock().push(command);
                Ok(Value::Int(self.exit_code))
            }
            _ => Err(CallError::no_such_operation(SCRIPT_RUNNER_CLASS, operation, params)),
        }
    }
}

#[derive(Debug)]
struct FakeScriptRunnerClass {
    exit_code: i32,
    executions: Arc<Mutex<Vec<ExecutedCommand>>>,
}

impl DynamicClass for FakeScriptRunnerClass {
    fn name(&self) -> &str {
        SCRIPT_RUNNER_CLASS
    }

    fn construct(&self, params: &[ParamType], mut args: Vec<Value>) -> Result<ObjectRef, CallError> {
        match params {
            [ParamType::Object(class_name)] if class_name == SETTINGS_CLASS => {
                Ok(object_ref(FakeScriptRunner {
                    settings: args.remove(0).into_object()?,
                    interactive: None,
                    exit_code: self.exit_code,
                    executions: Arc::clone(&self.executions),
                }))
            }
            _ => Err(CallError::no_such_operation(SCRIPT_RUNNER_CLASS, "<init>", params)),
        }
    }
}

/// Builder for a fake framework installation
#[derive(Debug, Clone)]
pub struct FakeGrailsRuntime {
    schema: SettingsSchema,
    console_ansi_enabled: Option<bool>,
    exit_code: i32,
    failing: HashSet<String>,
    defaults: HashMap<String, PathBuf>,
    settings_class: bool,
    script_runner: bool,
}

impl FakeGrailsRuntime {
    /// Runtime matching a framework version, without a console
    pub fn new(version: &GrailsVersion) -> Self {
        Self {
            schema: SettingsSchema::for_version(version),
            console_ansi_enabled: None,
            exit_code: 0,
            failing: HashSet::new(),
            defaults: HashMap::new(),
            settings_class: true,
            script_runner: true,
        }
    }

    #[must_use]
    pub fn with_schema(mut self, schema: SettingsSchema) -> Self {
        self.schema = schema;
        self
    }

    /// Provide the console singleton with an initial ANSI flag
    #[must_use]
    pub fn with_console(mut self, ansi_enabled: bool) -> Self {
        self.console_ansi_enabled = Some(ansi_enabled);
        self
    }

    #[must_use]
    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }

    /// Make a settings operation (or `<init>`) fail when called
    #[must_use]
    pub fn failing_operation(mut self, operation: &str) -> Self {
        self.failing.insert(operation.to_string());
        self
    }

    /// Directory value new settings objects start with, keyed like `ClassesDir`
    #[must_use]
    pub fn with_default_dir(mut self, name: &str, dir: impl Into<PathBuf>) -> Self {
        self.defaults.insert(name.to_string(), dir.into());
        self
    }

    #[must_use]
    pub fn without_settings_class(mut self) -> Self {
        self.settings_class = false;
        self
    }

    #[must_use]
    pub fn without_script_runner(mut self) -> Self {
        self.script_runner = false;
        self
    }

    pub fn build(self) -> FakeGrails {
        let settings_log = CallLog::default();
        let console_log = CallLog::default();
        let instances = Arc::new(Mutex::new(0));
        let executions = Arc::new(Mutex::new(Vec::new()));
        let mut registry = ClassRegistry::new();

        if self.settings_class {
            registry.register(FakeBuildSettingsClass {
                schema: self.schema,
                defaults: self.defaults,
                failing: Arc::new(self.failing),
                log: settings_log.clone(),
                instances: Arc::clone(&instances),
            });
        }

        let ansi_enabled = self.console_ansi_enabled.map(|enabled| {
            let flag = Arc::new(Mutex::new(enabled));
            registry.register(FakeConsoleClass {
                instance: object_ref(FakeConsole {
                    ansi_enabled: Arc::clone(&flag),
                    log: console_log.clone(),
                }),
            });
            flag
        });

        if self.script_runner {
            registry.register(FakeScriptRunnerClass {
                exit_code: self.exit_code,
                executions: Arc::clone(&executions),
            });
        }

        FakeGrails {
            loader: Arc::new(registry),
            settings_log,
            console_log,
            ansi_enabled,
            instances,
            executions,
        }
    }
}

/// A built fake framework and its observation points
#[derive(Debug)]
pub struct FakeGrails {
    loader: LoaderRef,
    settings_log: CallLog,
    console_log: CallLog,
    ansi_enabled: Option<Arc<Mutex<bool>>>,
    instances: Arc<Mutex<usize>>,
    executions: Arc<Mutex<Vec<ExecutedCommand>>>,
}

impl FakeGrails {
    pub fn loader(&self) -> LoaderRef {
        Arc::clone(&self.loader)
    }

    pub fn settings_calls(&self) -> &CallLog {
        &self.settings_log
    }

    pub fn console_calls(&self) -> &CallLog {
        &self.console_log
    }

    /// Current console ANSI flag, `None` without a console
    pub fn console_ansi_enabled(&self) -> Option<bool> {
        self.ansi_enabled.as_ref().map(|flag| *flag.lock())
    }

    pub fn settings_instances(&self) -> usize {
        *self.instances.lock()
    }

    pub fn executions(&self) -> Vec<ExecutedCommand> {
        self.executions.lock().clone()
    }
}

