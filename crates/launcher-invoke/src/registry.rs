//! Registry-backed class loader
//!
//! Provides [`ClassRegistry`], a [`ClassLoader`] over classes registered by
//! the host. This is how an embedding application hands the launcher its
//! view of the build framework.

use crate::error::CallError;
use crate::object::{ClassLoader, ClassRef, DynamicClass};
use std::collections::HashMap;
use std::sync::Arc;

/// Class loader resolving names against registered classes
#[derive(Debug, Default, Clone)]
pub struct ClassRegistry {
    classes: HashMap<String, ClassRef>,
}

impl ClassRegistry {
    /// Create new empty registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            classes: HashMap::new(),
        }
    }

    /// Register a class under its own name, replacing any previous one
    pub fn register(&mut self, class: impl DynamicClass + 'static) {
        self.register_ref(Arc::new(class));
    }

    /// Register an already shared class
    pub fn register_ref(&mut self, class: ClassRef) {
        self.classes.insert(class.name().to_string(), class);
    }

    /// Builder form of [`ClassRegistry::register`]
    #[inline]
    #[must_use]
    pub fn with_class(mut self, class: impl DynamicClass + 'static) -> Self {
        self.register(class);
        self
    }

    /// Check if class exists
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Remove class
    #[inline]
    pub fn remove(&mut self, name: &str) -> bool {
        self.classes.remove(name).is_some()
    }

    /// List all registered class names
    #[inline]
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.classes.keys().map(String::as_str).collect()
    }

    /// Get number of registered classes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if registry is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl ClassLoader for ClassRegistry {
    fn load_class(&self, name: &str) -> Result<ClassRef, CallError> {
        self.classes
            .get(name)
            .cloned()
            .ok_or_else(|| CallError::ClassNotFound(name.to_string()))
    }
}
