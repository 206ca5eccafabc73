//! Node types: NodeKey, Node, NodeRef.

use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;

use slotmap::new_key_type;

use crate::binding::schema::KindDef;
use crate::value::Value;

new_key_type! {
    /// Arena key for a node in the registry's slotmap. Copy, lightweight (u64).
    pub struct NodeKey;
}

/// The in-process representation of one widget.
///
/// A node owns its identity, its local attribute cache, and its placement
/// intent. Whether it is *valid* (has a live counterpart in the host) is
/// derived from the host (`host.exists(id)`), never stored here.
#[derive(Debug)]
pub struct Node {
    id: String,
    label: String,
    kind: &'static KindDef,
    /// Last-known value per schema-declared attribute name.
    cache: HashMap<String, Value>,
    /// Parent intent. Empty means "host default at materialization".
    parent: String,
    /// Sibling intent: id of the sibling this node precedes. Empty appends.
    before: String,
}

impl Node {
    /// Construct a node with its kind's default attribute values.
    ///
    /// The defaults constructor runs here so every instance owns an
    /// independent copy of multi-component defaults. If the schema declares a
    /// `label` attribute and the defaults leave it unset, it falls back to the
    /// node's id.
    pub(crate) fn new(kind: &'static KindDef, id: String) -> Self {
        let mut cache: HashMap<String, Value> = HashMap::new();
        for (name, value) in (kind.defaults)() {
            cache.insert(name.to_owned(), value);
        }

        let mut label = id.clone();
        if kind.has_attr("label") {
            match cache.get("label") {
                Some(Value::Str(s)) if !s.is_empty() => label = s.clone(),
                _ => {
                    cache.insert("label".to_owned(), Value::Str(label.clone()));
                }
            }
        }

        Self {
            id,
            label,
            kind,
            cache,
            parent: String::new(),
            before: String::new(),
        }
    }

    /// The node's globally unique identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The node's display label. Defaults to the id.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The node's static kind definition.
    pub fn kind(&self) -> &'static KindDef {
        self.kind
    }

    /// The cached value for an attribute, or `Null` if never written.
    pub fn cached(&self, attr: &str) -> Value {
        self.cache.get(attr).cloned().unwrap_or_default()
    }

    /// Overwrite the cache entry for an attribute.
    pub(crate) fn cache_insert(&mut self, attr: &str, value: Value) {
        if attr == "label" {
            if let Value::Str(s) = &value {
                self.label = s.clone();
            }
        }
        self.cache.insert(attr.to_owned(), value);
    }

    /// The cached parent intent. Empty when no parent has been chosen.
    pub fn parent_intent(&self) -> &str {
        &self.parent
    }

    /// The cached sibling intent. Empty means "append".
    pub fn before_intent(&self) -> &str {
        &self.before
    }

    pub(crate) fn set_parent_intent(&mut self, parent: &str) {
        self.parent = parent.to_owned();
    }

    pub(crate) fn set_before_intent(&mut self, before: &str) {
        self.before = before.to_owned();
    }

    /// The full configuration pushed to the host at materialization: every
    /// schema attribute's cached value in schema order, plus placement intent
    /// for dependent kinds.
    pub(crate) fn full_config(&self) -> Vec<(&'static str, Value)> {
        let mut config: Vec<(&'static str, Value)> = self
            .kind
            .attrs()
            .map(|attr| (attr, self.cached(attr)))
            .collect();
        if self.kind.dependent {
            config.push(("parent", Value::Str(self.parent.clone())));
            config.push(("before", Value::Str(self.before.clone())));
        }
        config
    }
}

// ---------------------------------------------------------------------------
// NodeRef
// ---------------------------------------------------------------------------

/// A cheap, cloneable handle to a registered node: its id.
///
/// Dereferences to `&str`, so it can be passed anywhere an id is expected.
/// Converting a `NodeRef` into a [`Value`] stores the id string, so assigning
/// a node as another node's attribute records the reference by id.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodeRef(pub(crate) String);

impl NodeRef {
    /// The referenced node's id.
    pub fn id(&self) -> &str {
        &self.0
    }
}

impl Deref for NodeRef {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for NodeRef {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&NodeRef> for Value {
    fn from(node: &NodeRef) -> Self {
        Value::Str(node.0.clone())
    }
}

impl From<NodeRef> for Value {
    fn from(node: NodeRef) -> Self {
        Value::Str(node.0)
    }
}
