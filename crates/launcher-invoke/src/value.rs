//! Argument and result values of dynamic calls
//!
//! Provides [`Value`], the closed set of shapes that cross the dynamic
//! boundary, and [`ParamType`], the declared parameter types a call is
//! checked against before dispatch.

use crate::error::CallError;
use crate::object::{LoaderRef, ObjectRef};
use std::fmt::{self, Display, Formatter};
use std::path::PathBuf;
use std::sync::Arc;

/// A value passed to or returned from a dynamic call
#[derive(Debug, Clone)]
pub enum Value {
    /// Absent reference
    Null,
    /// Boolean primitive
    Bool(bool),
    /// Integer primitive
    Int(i32),
    /// Text
    Str(String),
    /// File system location, passed through unvalidated
    Path(PathBuf),
    /// Ordered list of file system locations
    PathList(Vec<PathBuf>),
    /// Handle to another opaque object
    Object(ObjectRef),
    /// Handle to a class-loading facility
    Loader(LoaderRef),
}

impl Value {
    /// Shape name used in diagnostics
    #[inline]
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "int",
            Self::Str(_) => "string",
            Self::Path(_) => "path",
            Self::PathList(_) => "list",
            Self::Object(_) => "object",
            Self::Loader(_) => "loader",
        }
    }

    /// Check for [`Value::Null`]
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Extract an optional path
    ///
    /// # Errors
    /// `CallError::UnexpectedResult` if the value is neither null nor a path
    pub fn into_path(self) -> Result<Option<PathBuf>, CallError> {
        match self {
            Self::Null => Ok(None),
            Self::Path(path) => Ok(Some(path)),
            other => Err(CallError::unexpected("path", &other)),
        }
    }

    /// Extract an optional path list
    ///
    /// # Errors
    /// `CallError::UnexpectedResult` if the value is neither null nor a list
    pub fn into_path_list(self) -> Result<Option<Vec<PathBuf>>, CallError> {
        match self {
            Self::Null => Ok(None),
            Self::PathList(paths) => Ok(Some(paths)),
            other => Err(CallError::unexpected("list", &other)),
        }
    }

    /// Extract optional text
    ///
    /// # Errors
    /// `CallError::UnexpectedResult` if the value is neither null nor text
    pub fn into_string(self) -> Result<Option<String>, CallError> {
        match self {
            Self::Null => Ok(None),
            Self::Str(s) => Ok(Some(s)),
            other => Err(CallError::unexpected("string", &other)),
        }
    }

    /// Extract a boolean primitive
    ///
    /// # Errors
    /// `CallError::UnexpectedResult` for anything but a boolean, null included
    pub fn into_bool(self) -> Result<bool, CallError> {
        match self {
            Self::Bool(b) => Ok(b),
            other => Err(CallError::unexpected("boolean", &other)),
        }
    }

    /// Extract an integer primitive
    ///
    /// # Errors
    /// `CallError::UnexpectedResult` for anything but an integer, null included
    pub fn into_int(self) -> Result<i32, CallError> {
        match self {
            Self::Int(i) => Ok(i),
            other => Err(CallError::unexpected("int", &other)),
        }
    }

    /// Extract an object handle
    ///
    /// # Errors
    /// `CallError::UnexpectedResult` for anything but an object, null included
    pub fn into_object(self) -> Result<ObjectRef, CallError> {
        match self {
            Self::Object(object) => Ok(object),
            other => Err(CallError::unexpected("object", &other)),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Path(a), Self::Path(b)) => a == b,
            (Self::PathList(a), Self::PathList(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => Arc::ptr_eq(a, b),
            (Self::Loader(a), Self::Loader(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_string())
    }
}

impl From<PathBuf> for Value {
    fn from(path: PathBuf) -> Self {
        Self::Path(path)
    }
}

impl From<Vec<PathBuf>> for Value {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self::PathList(paths)
    }
}

impl From<ObjectRef> for Value {
    fn from(object: ObjectRef) -> Self {
        Self::Object(object)
    }
}

impl From<LoaderRef> for Value {
    fn from(loader: LoaderRef) -> Self {
        Self::Loader(loader)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

/// Declared type of a dynamic call parameter
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamType {
    /// Boolean primitive
    Bool,
    /// Integer primitive
    Int,
    /// Text
    Str,
    /// File system location
    Path,
    /// List of file system locations
    List,
    /// Class-loading facility
    Loader,
    /// Instance of the named class
    Object(String),
}

impl ParamType {
    /// Object parameter of a given class
    #[inline]
    #[must_use]
    pub fn object(class_name: impl Into<String>) -> Self {
        Self::Object(class_name.into())
    }

    /// Check whether a value may be bound to this parameter
    ///
    /// Null binds to every reference type but never to a primitive.
    #[must_use]
    pub fn accepts(&self, value: &Value) -> bool {
        match (self, value) {
            (Self::Bool | Self::Int, Value::Null) => false,
            (_, Value::Null)
            | (Self::Bool, Value::Bool(_))
            | (Self::Int, Value::Int(_))
            | (Self::Str, Value::Str(_))
            | (Self::Path, Value::Path(_))
            | (Self::List, Value::PathList(_))
            | (Self::Loader, Value::Loader(_)) => true,
            (Self::Object(class_name), Value::Object(object)) => {
                object.lock().class_name() == *class_name
            }
            _ => false,
        }
    }
}

impl Display for ParamType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("boolean"),
            Self::Int => f.write_str("int"),
            Self::Str => f.write_str("String"),
            Self::Path => f.write_str("File"),
            Self::List => f.write_str("List"),
            Self::Loader => f.write_str("ClassLoader"),
            Self::Object(class_name) => f.write_str(class_name),
        }
    }
}

/// Render a parameter list as `A, B, C`
pub(crate) fn signature(params: &[ParamType]) -> String {
    params
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
