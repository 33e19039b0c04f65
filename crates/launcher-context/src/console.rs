//! Bridge to the framework's console singleton
//!
//! Older framework versions have no console class. Both operations return an
//! explicit "unavailable" outcome instead of failing, so callers can pick a
//! designated default.

use launcher_invoke::{invoke, CallError, LoaderRef, ObjectRef, ParamType, Value};

/// Console singleton class
pub const CONSOLE_CLASS: &str = "grails.build.logging.GrailsConsole";

/// Read the console's ANSI flag
///
/// Returns `None` when the console cannot be reached on this framework.
#[must_use]
pub fn console_ansi_enabled(loader: &LoaderRef) -> Option<bool> {
    let result = console_instance(loader)
        .and_then(|console| invoke(&console, "isAnsiEnabled", &[], vec![]))
        .and_then(Value::into_bool);

    match result {
        Ok(enabled) => Some(enabled),
        Err(err) => {
            tracing::debug!(error = %err, "console unavailable, reporting plain output");
            None
        }
    }
}

/// Set the console's ANSI flag
///
/// Returns `false` when the console cannot be reached and nothing changed.
pub fn set_console_ansi_enabled(loader: &LoaderRef, enabled: bool) -> bool {
    let result = console_instance(loader).and_then(|console| {
        invoke(
            &console,
            "setAnsiEnabled",
            &[ParamType::Bool],
            vec![enabled.into()],
        )
    });

    match result {
        Ok(_) => true,
        Err(err) => {
            tracing::debug!(error = %err, enabled, "console unavailable, ignoring ANSI setting");
            false
        }
    }
}

fn console_instance(loader: &LoaderRef) -> Result<ObjectRef, CallError> {
    let class = loader.load_class(CONSOLE_CLASS)?;
    invoke(&class, "getInstance", &[], vec![])?.into_object()
}
