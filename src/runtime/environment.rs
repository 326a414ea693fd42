use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::runtime::Value;

/// Flat, mutable variable environment for one interpreter session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Environment {
    variables: HashMap<String, Value>,
}

impl Environment {
    /// Creates an empty environment
    pub fn new() -> Self {
        Environment {
            variables: HashMap::new(),
        }
    }

    /// Binds `name`, overwriting any earlier value
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.variables.insert(name.into(), value);
    }

    /// Gets the value of a variable by name
    pub fn get(&self, name: &str) -> Result<Value> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| Error::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Checks if a variable is bound
    pub fn exists(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// Returns a copy of every binding
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.variables.clone()
    }

    /// Number of bound variables
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Returns true if nothing is bound
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Drops every binding
    pub fn clear(&mut self) {
        self.variables.clear();
    }

    /// Bindings sorted by name
    pub fn sorted(&self) -> Vec<(&str, Value)> {
        let mut entries: Vec<(&str, Value)> = self
            .variables
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}
