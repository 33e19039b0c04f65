//! Opaque objects, classes and the class-loading facility
//!
//! These traits are the only view the launcher has of the build framework:
//! objects answer named operations, classes construct objects and answer
//! static operations, and a loader resolves classes by name.

use crate::error::CallError;
use crate::value::{ParamType, Value};
use parking_lot::Mutex;
use std::fmt::Debug;
use std::sync::Arc;

/// Shared handle to an opaque object
pub type ObjectRef = Arc<Mutex<dyn DynamicObject>>;

/// Shared handle to a class
pub type ClassRef = Arc<dyn DynamicClass>;

/// Shared handle to a class-loading facility
pub type LoaderRef = Arc<dyn ClassLoader>;

/// An object whose type is only known at runtime
///
/// Implementations dispatch on the operation name and declared parameter
/// types. Arguments have already been checked against `params` by the
/// invocation layer when `call` is reached.
pub trait DynamicObject: Send + Debug {
    /// Name of the class this object was created from
    fn class_name(&self) -> String;

    /// Perform a named operation
    ///
    /// # Errors
    /// - `CallError::NoSuchOperation` if this object has no such operation
    /// - `CallError::TargetFailure` if the operation itself failed
    fn call(
        &mut self,
        operation: &str,
        params: &[ParamType],
        args: Vec<Value>,
    ) -> Result<Value, CallError>;
}

/// A class resolved through a [`ClassLoader`]
pub trait DynamicClass: Send + Sync + Debug {
    /// Fully qualified class name
    fn name(&self) -> &str;

    /// Create an instance through the constructor matching `params`
    ///
    /// # Errors
    /// `CallError::NoSuchOperation` when no constructor matches; classes that
    /// cannot be instantiated keep this default.
    fn construct(&self, params: &[ParamType], _args: Vec<Value>) -> Result<ObjectRef, CallError> {
        Err(CallError::no_such_operation(self.name(), "<init>", params))
    }

    /// Perform a static operation
    ///
    /// # Errors
    /// `CallError::NoSuchOperation` unless overridden
    fn call_static(
        &self,
        operation: &str,
        params: &[ParamType],
        _args: Vec<Value>,
    ) -> Result<Value, CallError> {
        Err(CallError::no_such_operation(self.name(), operation, params))
    }
}

/// Resolves classes by name
pub trait ClassLoader: Send + Sync + Debug {
    /// Look up a class
    ///
    /// # Errors
    /// `CallError::ClassNotFound` if the loader cannot resolve `name`
    fn load_class(&self, name: &str) -> Result<ClassRef, CallError>;
}

/// Wrap a concrete object into a shared handle
#[inline]
#[must_use]
pub fn object_ref<T: DynamicObject + 'static>(object: T) -> ObjectRef {
    Arc::new(Mutex::new(object))
}
