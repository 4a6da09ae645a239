use indexmap::IndexMap;

use crate::value::Value;

/// Mutable variable store for one program run.
///
/// A single flat map with unique keys where the last write wins; the
/// grammar has no nested scopes, so no scope stack is needed. Insertion
/// order is preserved so variable dumps read in definition order.
#[derive(Debug, Clone)]
pub struct Environment {
    bindings: IndexMap<String, Value>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            bindings: IndexMap::new(),
        }
    }

    /// Bind or overwrite a variable.
    pub fn set(&mut self, name: String, value: Value) {
        self.bindings.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// All bindings in insertion order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
