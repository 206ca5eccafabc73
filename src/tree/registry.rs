//! Registry: the process-wide id-to-node mapping.

use std::collections::HashMap;

use slotmap::SlotMap;

use crate::error::{Error, Result};
use crate::tree::node::{Node, NodeKey};

/// All registered nodes, backed by a slotmap arena with a string-id index.
///
/// Mutated only by node construction (insert) and deletion (remove). An entry
/// is never silently overwritten: inserting an id that is already present is
/// a [`Error::DuplicateId`].
#[derive(Debug, Default)]
pub struct Registry {
    nodes: SlotMap<NodeKey, Node>,
    index: HashMap<String, NodeKey>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            index: HashMap::new(),
        }
    }

    /// Register a node under its id.
    pub fn insert(&mut self, node: Node) -> Result<NodeKey> {
        if self.index.contains_key(node.id()) {
            return Err(Error::DuplicateId(node.id().to_owned()));
        }
        let id = node.id().to_owned();
        let key = self.nodes.insert(node);
        self.index.insert(id, key);
        Ok(key)
    }

    /// Remove and return the node registered under `id`.
    pub fn remove(&mut self, id: &str) -> Option<Node> {
        let key = self.index.remove(id)?;
        self.nodes.remove(key)
    }

    /// Whether a node is registered under `id`.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Immutable access to the node registered under `id`.
    pub fn get(&self, id: &str) -> Option<&Node> {
        self.index.get(id).and_then(|&key| self.nodes.get(key))
    }

    /// Mutable access to the node registered under `id`.
    pub fn get_mut(&mut self, id: &str) -> Option<&mut Node> {
        let key = *self.index.get(id)?;
        self.nodes.get_mut(key)
    }

    /// Number of registered nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate all registered ids. Order is not guaranteed.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::schema::{Binding, KindDef};

    static KIND: KindDef = KindDef {
        name: "Thing",
        container: false,
        dependent: true,
        schema: &[("show", Binding::Synchronized)],
        defaults: Vec::new,
    };

    fn node(id: &str) -> Node {
        Node::new(&KIND, id.to_owned())
    }

    #[test]
    fn insert_and_get() {
        let mut registry = Registry::new();
        registry.insert(node("a")).unwrap();
        assert!(registry.contains("a"));
        assert_eq!(registry.get("a").unwrap().id(), "a");
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn duplicate_insert_rejected() {
        let mut registry = Registry::new();
        registry.insert(node("a")).unwrap();
        let err = registry.insert(node("a")).unwrap_err();
        assert_eq!(err, Error::DuplicateId("a".to_owned()));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn remove_returns_node() {
        let mut registry = Registry::new();
        registry.insert(node("a")).unwrap();
        let removed = registry.remove("a").unwrap();
        assert_eq!(removed.id(), "a");
        assert!(!registry.contains("a"));
        assert!(registry.is_empty());
    }

    #[test]
    fn remove_missing_is_none() {
        let mut registry = Registry::new();
        assert!(registry.remove("ghost").is_none());
    }

    #[test]
    fn id_free_for_reuse_after_remove() {
        let mut registry = Registry::new();
        registry.insert(node("a")).unwrap();
        registry.remove("a");
        registry.insert(node("a")).unwrap();
        assert!(registry.contains("a"));
    }

    #[test]
    fn get_mut_allows_cache_writes() {
        let mut registry = Registry::new();
        registry.insert(node("a")).unwrap();
        registry
            .get_mut("a")
            .unwrap()
            .cache_insert("show", crate::value::Value::Bool(false));
        assert_eq!(
            registry.get("a").unwrap().cached("show"),
            crate::value::Value::Bool(false)
        );
    }

    #[test]
    fn ids_lists_all() {
        let mut registry = Registry::new();
        registry.insert(node("a")).unwrap();
        registry.insert(node("b")).unwrap();
        let mut ids: Vec<_> = registry.ids().collect();
        ids.sort_unstable();
        assert_eq!(ids, vec!["a", "b"]);
    }
}
