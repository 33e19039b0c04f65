//! Invocation primitives
//!
//! [`invoke`] surfaces the raw [`CallError`]; [`invoke_or_wrap`] converts
//! every failure into the single [`InvocationError`] kind. Both check the
//! arguments against the declared parameter types before dispatching.

use crate::error::{CallError, InvocationError};
use crate::object::{ClassRef, ObjectRef};
use crate::value::{ParamType, Value};

/// Receiver of a dynamic call
#[derive(Debug, Clone, Copy)]
pub enum Target<'a> {
    /// Instance operation
    Instance(&'a ObjectRef),
    /// Static operation
    Class(&'a ClassRef),
}

impl Target<'_> {
    /// Class name of the receiver
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Instance(object) => object.lock().class_name(),
            Self::Class(class) => class.name().to_string(),
        }
    }
}

impl<'a> From<&'a ObjectRef> for Target<'a> {
    fn from(object: &'a ObjectRef) -> Self {
        Self::Instance(object)
    }
}

impl<'a> From<&'a ClassRef> for Target<'a> {
    fn from(class: &'a ClassRef) -> Self {
        Self::Class(class)
    }
}

/// Call a named operation and surface its failure unchanged
///
/// # Errors
/// - `CallError::ArgumentMismatch` if `args` do not fit `params`
/// - whatever the target raises (`NoSuchOperation`, `TargetFailure`, ...)
pub fn invoke<'a>(
    target: impl Into<Target<'a>>,
    operation: &str,
    params: &[ParamType],
    args: Vec<Value>,
) -> Result<Value, CallError> {
    let target = target.into();
    check_arguments(operation, params, &args)?;
    tracing::trace!(operation, arity = args.len(), "dynamic call");

    match target {
        Target::Instance(object) => object.lock().call(operation, params, args),
        Target::Class(class) => class.call_static(operation, params, args),
    }
}

/// Call a named operation, wrapping any failure into [`InvocationError`]
///
/// # Errors
/// `InvocationError` carrying the original [`CallError`]
pub fn invoke_or_wrap<'a>(
    target: impl Into<Target<'a>>,
    operation: &str,
    params: &[ParamType],
    args: Vec<Value>,
) -> Result<Value, InvocationError> {
    let target = target.into();
    invoke(target, operation, params, args).map_err(|source| {
        let receiver = target.describe();
        tracing::debug!(%receiver, operation, error = %source, "dynamic call failed");
        InvocationError::new(receiver, operation, source)
    })
}

/// Create an instance through the constructor matching `params`
///
/// # Errors
/// - `CallError::ArgumentMismatch` if `args` do not fit `params`
/// - whatever the class raises while constructing
pub fn instantiate(
    class: &ClassRef,
    params: &[ParamType],
    args: Vec<Value>,
) -> Result<ObjectRef, CallError> {
    check_arguments("<init>", params, &args)?;
    tracing::trace!(class = class.name(), arity = args.len(), "dynamic construction");
    class.construct(params, args)
}

fn check_arguments(operation: &str, params: &[ParamType], args: &[Value]) -> Result<(), CallError> {
    let fits = params.len() == args.len()
        && params.iter().zip(args).all(|(param, arg)| param.accepts(arg));
    if fits {
        return Ok(());
    }
    Err(CallError::ArgumentMismatch {
        operation: operation.to_string(),
        expected: params.to_vec(),
        actual: args.iter().map(Value::kind).collect(),
    })
}
