//! Launcher Invoke
//!
//! Uniform dynamic-invocation layer over objects whose types are only known
//! at runtime.
//!
//! # Core Concepts
//!
//! - [`DynamicObject`], [`DynamicClass`], [`ClassLoader`]: the opaque view of a runtime-loaded framework
//! - [`Value`] / [`ParamType`]: arguments and declared parameter types
//! - [`invoke`]: call and surface the raw [`CallError`]
//! - [`invoke_or_wrap`]: call and convert any failure into [`InvocationError`]
//! - [`ClassRegistry`]: a loader over host-registered classes
//!
//! # Example
//!
//! ```rust,ignore
//! use launcher_invoke::{invoke_or_wrap, ClassLoader, ParamType, Value};
//!
//! let class = loader.load_class("grails.util.BuildSettings")?;
//! let settings = launcher_invoke::instantiate(&class, &[ParamType::Path, ParamType::Path], args)?;
//!
//! let dir = invoke_or_wrap(&settings, "getClassesDir", &[], vec![])?.into_path()?;
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

mod error;
mod invoke;
mod object;
mod registry;
mod value;

pub use error::{CallError, InvocationError, TargetError};
pub use invoke::{instantiate, invoke, invoke_or_wrap, Target};
pub use object::{object_ref, ClassLoader, ClassRef, DynamicClass, DynamicObject, LoaderRef, ObjectRef};
pub use registry::ClassRegistry;
pub use value::{ParamType, Value};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
