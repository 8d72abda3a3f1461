//! Bidirectional node name <-> index registry.
//!
//! Names are stored once in an index-ordered `Vec` and looked up through a
//! `HashMap`, so the forward and reverse directions always describe the same
//! bijection over the dense range `[0, len)`.

use std::collections::HashMap;

/// Maps node names to dense indices in first-seen order and back.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl NodeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index for `name`, assigning the next free index if the
    /// name has not been seen before.
    pub fn register(&mut self, name: &str) -> usize {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }

        let idx = self.names.len();
        self.names.push(name.to_string());
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Look up the index assigned to `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Look up the name assigned to `index`.
    pub fn name_of(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    /// Name at an index handed out by this registry.
    pub(crate) fn name(&self, index: usize) -> &str {
        &self.names[index]
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over `(index, name)` pairs in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.names.iter().map(String::as_str).enumerate()
    }
}
