use std::collections::HashSet;

use indexmap::IndexMap;
use inwx_types::MethodSpec;
use thiserror::Error;

use crate::methods::builtin_methods;

/// Errors raised while assembling a [`MethodRegistry`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("duplicate method: {name}")]
    DuplicateMethod { name: String },

    #[error("method name '{name}' must be a dotted two-part identifier")]
    InvalidMethodName { name: String },

    #[error("duplicate parameter '{param}' in method {method}")]
    DuplicateParam { method: String, param: String },
}

/// The authoritative table of remote methods available to the CLI.
///
/// Built once at startup and never mutated afterwards; every other component
/// receives it by shared reference.
#[derive(Debug, Clone, Default)]
pub struct MethodRegistry {
    methods: IndexMap<&'static str, MethodSpec>,
}

impl MethodRegistry {
    /// Creates the registry holding every `domain.*` and `nameserver.*`
    /// method known to the CLI.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use inwx_registry::MethodRegistry;
    ///
    /// let registry = MethodRegistry::builtin().expect("builtin registry is valid");
    /// assert!(registry.lookup("domain.check").is_some());
    /// ```
    pub fn builtin() -> Result<Self, RegistryError> {
        Self::try_new(builtin_methods())
    }

    /// Creates a registry from arbitrary method specifications, validating
    /// name uniqueness for methods and for parameters within each method.
    pub fn try_new(specs: Vec<MethodSpec>) -> Result<Self, RegistryError> {
        let mut methods = IndexMap::with_capacity(specs.len());
        for spec in specs {
            validate_method(&spec)?;
            if methods.contains_key(spec.name) {
                return Err(RegistryError::DuplicateMethod {
                    name: spec.name.to_string(),
                });
            }
            methods.insert(spec.name, spec);
        }
        Ok(Self { methods })
    }

    /// Finds a method by its exact remote name.
    pub fn lookup(&self, name: &str) -> Option<&MethodSpec> {
        self.methods.get(name)
    }

    /// Iterates all methods in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &MethodSpec> {
        self.methods.values()
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

fn validate_method(spec: &MethodSpec) -> Result<(), RegistryError> {
    let well_formed = spec
        .name
        .split_once('.')
        .is_some_and(|(group, action)| !group.is_empty() && !action.is_empty() && !action.contains('.'));
    if !well_formed {
        return Err(RegistryError::InvalidMethodName {
            name: spec.name.to_string(),
        });
    }

    let mut seen = HashSet::new();
    for param in &spec.params {
        if !seen.insert(param.name) {
            return Err(RegistryError::DuplicateParam {
                method: spec.name.to_string(),
                param: param.name.to_string(),
            });
        }
    }
    Ok(())
}
