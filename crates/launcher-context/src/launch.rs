//! Running a script through the framework's script runner
//!
//! The runner is built around the context's settings object, told whether
//! the session is interactive, and asked to execute the configured script.

use crate::context::LaunchContext;
use crate::delegating::DelegatingLaunchContext;
use crate::error::LaunchError;
use launcher_invoke::{instantiate, invoke_or_wrap, InvocationError, ParamType, Target, Value};

/// Script runner class
pub const SCRIPT_RUNNER_CLASS: &str = "org.codehaus.groovy.grails.cli.GrailsScriptRunner";

/// Flags that switch a session to non-interactive
const NON_INTERACTIVE_FLAGS: [&str; 2] = ["--non-interactive", "-non-interactive"];

/// Whether a session with these arguments is interactive
///
/// Non-interactive only if a whitespace-separated token is exactly one of the
/// non-interactive flags. Absent arguments mean interactive.
#[must_use]
pub fn is_interactive(args: Option<&str>) -> bool {
    args.map_or(true, |args| {
        !args
            .split_whitespace()
            .any(|token| NON_INTERACTIVE_FLAGS.contains(&token))
    })
}

impl DelegatingLaunchContext {
    /// Whether the configured arguments ask for an interactive session
    #[inline]
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        is_interactive(self.args())
    }

    /// Execute the configured script and return the runner's exit status
    ///
    /// The command receives `(script_name, args)` when no environment is
    /// set and `(script_name, args, env)` otherwise.
    ///
    /// # Errors
    /// `LaunchError::Invocation` if the runner cannot be loaded or built, or
    /// if any call on it fails
    pub fn launch(&self) -> Result<i32, LaunchError> {
        let settings = self.settings.object();
        let runner_class = self
            .loader
            .load_class(SCRIPT_RUNNER_CLASS)
            .map_err(|e| InvocationError::new(SCRIPT_RUNNER_CLASS, "loadClass", e))?;

        let settings_class = Target::from(settings).describe();
        let runner = instantiate(
            &runner_class,
            &[ParamType::Object(settings_class)],
            vec![Value::Object(settings.clone())],
        )
        .map_err(|e| InvocationError::new(SCRIPT_RUNNER_CLASS, "<init>", e))?;

        let interactive = self.is_interactive();
        invoke_or_wrap(
            &runner,
            "setInteractive",
            &[ParamType::Bool],
            vec![interactive.into()],
        )?;

        let script_name = Value::from(self.script_name());
        let args = Value::from(self.args());
        let (params, arguments) = match self.env() {
            None => (vec![ParamType::Str, ParamType::Str], vec![script_name, args]),
            Some(env) => (
                vec![ParamType::Str, ParamType::Str, ParamType::Str],
                vec![script_name, args, Value::from(env)],
            ),
        };

        tracing::info!(
            script = self.script_name().unwrap_or_default(),
            env = self.env().unwrap_or_default(),
            interactive,
            "launching script"
        );

        let status = invoke_or_wrap(&runner, "executeCommand", &params, arguments)?
            .into_int()
            .map_err(|e| InvocationError::new(SCRIPT_RUNNER_CLASS, "executeCommand", e))?;

        if status != 0 {
            tracing::warn!(status, "script finished with non-zero status");
        }
        Ok(status)
    }
}
